//! Diesel models and queries.

pub mod todo;
pub mod user;
