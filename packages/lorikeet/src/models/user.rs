use serde::Serialize;

use crate::entity::competitor;

/// A registered contest participant.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct User {
    #[schema(example = 42)]
    pub id: i32,
    #[schema(example = "junkbot")]
    pub username: String,
    #[schema(example = "Joshua")]
    pub firstname: String,
    #[schema(example = "Lau")]
    pub lastname: String,
    /// First and last name joined by a space.
    #[schema(example = "Joshua Lau")]
    pub name: String,
    pub school: Option<String>,
    pub year: Option<i32>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl From<competitor::Model> for User {
    fn from(m: competitor::Model) -> Self {
        let name = format!("{} {}", m.firstname.trim(), m.lastname.trim())
            .trim()
            .to_string();
        Self {
            id: m.id,
            username: m.username,
            firstname: m.firstname,
            lastname: m.lastname,
            name,
            school: m.school,
            year: m.year,
            state: m.state,
            country: m.country,
        }
    }
}
