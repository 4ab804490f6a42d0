use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Short identifier used in URLs, e.g. `aio11tickets`.
    #[sea_orm(unique)]
    pub name: String,
    pub title: String,

    #[sea_orm(has_many)]
    pub submissions: HasMany<super::submission::Entity>,

    #[sea_orm(has_many, via = "set_content")]
    pub sets: HasMany<super::problem_set::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
