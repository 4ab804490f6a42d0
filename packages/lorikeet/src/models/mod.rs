pub mod group;
pub mod problem;
pub mod problem_set;
pub mod shared;
pub mod submission;
pub mod user;
