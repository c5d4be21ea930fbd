//! HTTP surface: router, auth gate and handlers.

pub mod auth;
pub mod ctx;
pub mod error;
pub mod extract;
pub mod mw_auth;
pub mod routes;
pub mod state;
pub mod todo;
