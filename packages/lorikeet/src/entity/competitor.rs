use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "competitors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub school: Option<String>,
    pub year: Option<i32>,
    pub state: Option<String>,
    pub country: Option<String>,

    #[sea_orm(has_many)]
    pub submissions: HasMany<super::submission::Entity>,

    #[sea_orm(has_many)]
    pub progress: HasMany<super::progress::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
