use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Best score per (competitor, problem). A row exists once the competitor has opened the problem.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub competitorid: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub problemid: i32,

    pub bestscore: Option<i32>,

    #[sea_orm(belongs_to, from = "competitorid", to = "id")]
    pub competitor: HasOne<super::competitor::Entity>,
    #[sea_orm(belongs_to, from = "problemid", to = "id")]
    pub problem: HasOne<super::problem::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
