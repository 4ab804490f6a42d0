use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    /// File extension style identifier, e.g. `cpp` or `zip`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name, e.g. `C++`.
    pub name: String,

    #[sea_orm(has_many)]
    pub submissions: HasMany<super::submission::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
