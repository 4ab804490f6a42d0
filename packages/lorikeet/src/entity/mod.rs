pub mod competitor;
pub mod language;
pub mod problem;
pub mod problem_set;
pub mod progress;
pub mod set_content;
pub mod submission;
