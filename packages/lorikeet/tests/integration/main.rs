mod common;
mod groups;
mod schema;
