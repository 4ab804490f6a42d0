use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,

    pub title: String,
    pub public: bool,

    #[sea_orm(has_many, via = "set_content")]
    pub problems: HasMany<super::problem::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
