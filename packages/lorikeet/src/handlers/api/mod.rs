//! Read-only JSON mirror of the pages.

pub mod groups;
pub mod problems;
pub mod search;
pub mod sets;
pub mod submissions;
pub mod users;
