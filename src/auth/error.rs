//! Authentication error types.

/// Failures of the token and password primitives.
///
/// The token variants are stored in the request extensions by the context
/// resolver, which is why the type is `Clone`.
#[derive(Debug, thiserror::Error, Clone)]
pub enum AuthError {
    #[error("Token Missing")]
    TokenMissing,
    #[error("Malformed Authorization Header")]
    MalformedHeader,
    #[error("Invalid Token")]
    InvalidToken,
    #[error("Token Expired")]
    TokenExpired,
    #[error("Signing Secret Missing")]
    SecretMissing,
    #[error(transparent)]
    TokenCreation(#[from] jsonwebtoken::errors::Error),

    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}
