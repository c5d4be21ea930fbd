//! Registration and login.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::auth::secret_hash::SecretHasher;
use crate::models::user::{User, UserCreate};
use crate::prelude::*;
use crate::store::UserStore;

use super::{extract::ApiJson, state::AppState};

pub const USER_CREATED: &str = "User successfully created";

/// Body of `/register` and `/login`.
#[derive(Deserialize, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: String::from(username),
            password: String::from(password),
        }
    }

    fn require_present(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(Error::MissingCredentials);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Successful login response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginBody {
    pub token: String,
}

/// Plain confirmation response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: &str) -> Self {
        Self {
            message: String::from(message),
        }
    }
}

/// Hashes the password and stores a new user.
pub fn register_user(
    payload: Credentials,
    users: &dyn UserStore,
    hasher: &SecretHasher,
) -> Result<User> {
    payload.require_present()?;
    let password_hash = hasher.hash(&payload.password)?;

    users
        .create(UserCreate {
            username: payload.username,
            password_hash,
        })
        .map_err(|err| {
            error!("Error while creating user: {err}");
            Error::UserCreation
        })
}

/// Checks the credentials against the store.
///
/// An unknown username and a wrong password produce the same error.
pub fn authenticate(
    payload: &Credentials,
    users: &dyn UserStore,
    hasher: &SecretHasher,
) -> Result<User> {
    payload.require_present()?;
    let user = users
        .find_by_username(&payload.username)?
        .ok_or(Error::WrongCredentials)?;

    if !hasher.verify(&payload.password, &user.password_hash)? {
        return Err(Error::WrongCredentials);
    }
    Ok(user)
}

/// Runs Argon2 and the store round trip off the async worker threads.
async fn run_blocking<T, F>(state: AppState, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn UserStore, &SecretHasher) -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(state.users.as_ref(), &state.hasher)).await?
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<Json<MessageBody>> {
    let user = run_blocking(state, move |users, hasher| {
        register_user(payload, users, hasher)
    })
    .await?;
    info!("Registered user {}", user.username);
    Ok(Json(MessageBody::new(USER_CREATED)))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<Json<LoginBody>> {
    let user = run_blocking(state.clone(), move |users, hasher| {
        authenticate(&payload, users, hasher)
    })
    .await?;
    let token = state.keys.issue(&user.username)?;
    info!("User {} logged in", user.username);
    Ok(Json(LoginBody { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{error::AuthError, secret_hash::HashParams};
    use crate::store::memory::MemoryStore;

    fn hasher() -> SecretHasher {
        SecretHasher::new(&HashParams {
            m_cost: 1024,
            t_cost: 1,
            p_cost: 1,
        })
        .unwrap()
    }

    #[test]
    fn stored_hash_is_not_the_password() {
        let store = MemoryStore::new();
        let user = register_user(Credentials::new("alice", "pw1"), &store, &hasher()).unwrap();
        assert_ne!(user.password_hash, "pw1");
    }

    #[test]
    fn duplicate_registration_fails() {
        let store = MemoryStore::new();
        let hasher = hasher();
        register_user(Credentials::new("alice", "pw1"), &store, &hasher).unwrap();
        assert!(matches!(
            register_user(Credentials::new("alice", "pw2"), &store, &hasher),
            Err(Error::UserCreation)
        ));
    }

    #[test]
    fn authenticate_checks_the_password() {
        let store = MemoryStore::new();
        let hasher = hasher();
        register_user(Credentials::new("alice", "pw1"), &store, &hasher).unwrap();

        let user = authenticate(&Credentials::new("alice", "pw1"), &store, &hasher).unwrap();
        assert_eq!(user.username, "alice");

        assert!(matches!(
            authenticate(&Credentials::new("alice", "pw2"), &store, &hasher),
            Err(Error::WrongCredentials)
        ));
        assert!(matches!(
            authenticate(&Credentials::new("bob", "pw1"), &store, &hasher),
            Err(Error::WrongCredentials)
        ));
    }

    #[test]
    fn unusable_stored_hash_is_an_internal_error() {
        let store = MemoryStore::new();
        UserStore::create(
            &store,
            UserCreate {
                username: String::from("alice"),
                password_hash: String::from("$argon2id$v=19$m=1024,t=1,p=1$c2FsdHNhbHQ"),
            },
        )
        .unwrap();

        let result = authenticate(&Credentials::new("alice", "pw1"), &store, &hasher());
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::PasswordHash(_)))
        ));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let store = MemoryStore::new();
        for (username, password) in [("", "pw1"), ("  ", "pw1"), ("alice", "")] {
            assert!(matches!(
                register_user(Credentials::new(username, password), &store, &hasher()),
                Err(Error::MissingCredentials)
            ));
        }
    }

    #[test]
    fn debug_hides_the_password() {
        let debug = format!("{:?}", Credentials::new("alice", "hunter2"));
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
