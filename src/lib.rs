//! Multi-user task list HTTP API.
//!
//! Users register and log in with a username and password. Passwords are
//! stored as Argon2id hashes and a successful login returns an HS256 JWT that
//! must be presented as `Authorization: Bearer <token>` on the `/todos` routes.
//!
//! # Usage
//!
//! ```rust
//! use todo_api::auth::{jwt::TokenKeys, secret_hash::{HashParams, SecretHasher}};
//! use todo_api::store::memory::MemoryStore;
//! use todo_api::web::{routes::app, state::AppState};
//!
//! let state = AppState::new(
//!     MemoryStore::new(),
//!     TokenKeys::from_secret("MySuperSecret").unwrap(),
//!     SecretHasher::new(&HashParams::default()).unwrap(),
//! );
//! let router: axum::Router = app(state);
//! ```

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod prelude;
mod schema;
pub mod store;
pub mod web;
