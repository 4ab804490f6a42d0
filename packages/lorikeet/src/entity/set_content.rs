use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "set_contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "set")]
    pub set_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub problemid: i32,

    #[sea_orm(belongs_to, from = "set_name", to = "name")]
    pub set: HasOne<super::problem_set::Entity>,
    #[sea_orm(belongs_to, from = "problemid", to = "id")]
    pub problem: HasOne<super::problem::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
