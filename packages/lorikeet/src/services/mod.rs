//! Read-side queries against the training database.
//!
//! Every function takes any [`sea_orm::ConnectionTrait`] so handlers can pass the pool
//! and tests can pass a dedicated connection.

pub mod catalog;
pub mod scoreboard;
pub mod search;
pub mod stats;
pub mod submissions;
