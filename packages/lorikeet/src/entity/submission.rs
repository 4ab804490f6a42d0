use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub competitorid: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub problemid: i32,
    /// 1-based, per (competitor, problem).
    #[sea_orm(primary_key, auto_increment = false)]
    pub attempt: i32,

    /// 0-100. NULL when judging was cut short before a mark was assigned.
    pub mark: Option<i32>,
    pub timestamp: DateTimeUtc,
    /// Source text. Base64 for `zip` submissions.
    #[sea_orm(column_type = "Text")]
    pub submitted_file: String,
    pub languageid: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub judge: Option<String>,

    #[sea_orm(belongs_to, from = "competitorid", to = "id")]
    pub competitor: HasOne<super::competitor::Entity>,
    #[sea_orm(belongs_to, from = "problemid", to = "id")]
    pub problem: HasOne<super::problem::Entity>,
    #[sea_orm(belongs_to, from = "languageid", to = "id")]
    pub language: HasOne<super::language::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
