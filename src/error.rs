//! Main Crate Error

use crate::auth::error::AuthError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),

    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Migration(Box<dyn std::error::Error + Send + Sync>),

    #[error("Configuration {0}")]
    Config(String),

    /* Request Errors */
    #[error("Invalid Payload {0}")]
    InvalidPayload(String),

    #[error("Invalid Path {0}")]
    InvalidPath(String),

    #[error("Missing Credentials")]
    MissingCredentials,

    #[error("Missing Title")]
    MissingTitle,

    /* Auth Errors */
    #[error("Wrong Credentials")]
    WrongCredentials,

    #[error("Context Missing")]
    CtxMissing,

    /* Store Errors */
    #[error("User Creation")]
    UserCreation,

    #[error("Todo Not Found")]
    TodoNotFound,

    #[error("Store Lock Poisoned")]
    StorePoisoned,
}
