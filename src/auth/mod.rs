//! Authentication primitives: password hashing and session tokens.

pub mod error;
pub mod jwt;
pub mod secret_hash;

/// Prefix expected in front of the token in the `Authorization` header.
pub const AUTH_HEADER_PREFIX: &str = "Bearer ";
