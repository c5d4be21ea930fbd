//! Shared application state.

use std::sync::Arc;

use crate::auth::{jwt::TokenKeys, secret_hash::SecretHasher};
use crate::store::{TodoStore, UserStore};

/// State handed to every handler. Everything in it is read-only or does its
/// own synchronisation, so cloning per request is cheap and lock free.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub todos: Arc<dyn TodoStore>,
    pub keys: Arc<TokenKeys>,
    pub hasher: SecretHasher,
}

impl AppState {
    /// Builds the state around a single value serving as both stores.
    pub fn new<S>(store: S, keys: TokenKeys, hasher: SecretHasher) -> Self
    where
        S: UserStore + TodoStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            todos: store,
            keys: Arc::new(keys),
            hasher,
        }
    }
}
