//! Router assembly.

use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use super::{
    auth::{MessageBody, login, register},
    ctx::mw_ctx_resolver,
    mw_auth::mw_require_auth,
    state::AppState,
    todo::{create_todo, delete_todo, get_todo, list_todos, update_todo},
};

pub const WELCOME: &str = "Welcome to ToDo API";

async fn home() -> Json<MessageBody> {
    Json(MessageBody::new(WELCOME))
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    let todo_routes = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route_layer(middleware::from_fn(mw_require_auth));

    let public_routes = Router::new()
        .route("/", get(home))
        .route("/register", post(register))
        .route("/login", post(login));

    Router::new()
        .merge(public_routes)
        .merge(todo_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            mw_ctx_resolver,
        ))
        .with_state(state)
}
