use std::collections::BTreeMap;

use sea_orm::{ConnectionTrait, DbErr};
use tracing::{instrument, warn};

use crate::config::GroupConfig;
use crate::models::group::Group;
use crate::services::catalog;

/// Statically configured groups, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: BTreeMap<String, GroupConfig>,
}

impl GroupRegistry {
    pub fn new(groups: BTreeMap<String, GroupConfig>) -> Self {
        Self { groups }
    }

    pub fn get(&self, name: &str) -> Option<&GroupConfig> {
        self.groups.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Look up a group and resolve its usernames and set names.
    ///
    /// Members that no longer exist in the database are skipped.
    #[instrument(skip(self, db))]
    pub async fn resolve<C: ConnectionTrait>(
        &self,
        db: &C,
        name: &str,
    ) -> Result<Option<Group>, DbErr> {
        let Some(config) = self.get(name) else {
            return Ok(None);
        };

        let mut users = Vec::with_capacity(config.users.len());
        for username in &config.users {
            match catalog::get_user(db, username).await? {
                Some(user) => users.push(user),
                None => warn!(group = name, username = %username, "Group user does not exist"),
            }
        }

        let mut sets = Vec::with_capacity(config.sets.len());
        for set_name in &config.sets {
            match catalog::get_set(db, set_name).await? {
                Some(set) => sets.push(set),
                None => warn!(group = name, set = %set_name, "Group set does not exist"),
            }
        }

        Ok(Some(Group {
            name: name.to_string(),
            title: config.title.clone(),
            users,
            sets,
        }))
    }
}
