#![allow(dead_code)]

use api_client::ApiClient;
use axum::Router;
use reqwest::StatusCode;
use todo_api::{
    auth::{
        jwt::TokenKeys,
        secret_hash::{HashParams, SecretHasher},
    },
    store::memory::MemoryStore,
    web::{auth::Credentials, routes::app, state::AppState},
};

pub mod api_client;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Cheap Argon2 parameters so the suites stay fast.
pub const FAST_HASH: HashParams = HashParams {
    m_cost: 1024,
    t_cost: 1,
    p_cost: 1,
};

pub fn test_state() -> AppState {
    AppState::new(
        MemoryStore::new(),
        TokenKeys::from_secret(TEST_SECRET).expect("Failed to build token keys"),
        SecretHasher::new(&FAST_HASH).expect("Failed to build hasher"),
    )
}

/// Serves `router` on an ephemeral local port.
pub async fn spawn_router(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });
    ApiClient::new(format!("http://{addr}"))
}

/// Serves the full application backed by a fresh in-memory store.
pub async fn spawn_app() -> ApiClient {
    spawn_router(app(test_state())).await
}

pub async fn register(api: &ApiClient, username: &str, password: &str) {
    let response = api
        .post("register", None, &Credentials::new(username, password))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
}

pub async fn login(api: &ApiClient, username: &str, password: &str) -> String {
    let response = api
        .post("login", None, &Credentials::new(username, password))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    response.body["token"]
        .as_str()
        .expect("Login response without token")
        .to_string()
}

/// Registers and logs in, returning a bearer token.
pub async fn signed_in(api: &ApiClient, username: &str) -> String {
    register(api, username, "pw1").await;
    login(api, username, "pw1").await
}

/// Replaces the first character of the signature segment.
pub fn flip_signature_char(token: &str) -> String {
    let index = token.rfind('.').expect("Token without signature") + 1;
    let mut chars: Vec<char> = token.chars().collect();
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}
