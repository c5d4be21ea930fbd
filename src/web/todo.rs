//! Task CRUD handlers. All of them sit behind the auth gate.

use axum::{Json, extract::State};
use tracing::{debug, info};

use crate::models::todo::{Todo, TodoCreate, TodoUpdate};
use crate::prelude::*;

use super::{
    auth::MessageBody,
    ctx::Ctx,
    extract::{ApiJson, ApiPath},
    state::AppState,
};

pub const TODO_DELETED: &str = "Todo deleted";

fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}

pub async fn list_todos(State(state): State<AppState>, ctx: Ctx) -> Result<Json<Vec<Todo>>> {
    debug!("{} listing todos", ctx.username);
    Ok(Json(state.todos.find_all()?))
}

pub async fn get_todo(
    State(state): State<AppState>,
    ctx: Ctx,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Todo>> {
    debug!("{} fetching todo {id}", ctx.username);
    let todo = state.todos.find_by_id(id)?.ok_or(Error::TodoNotFound)?;
    Ok(Json(todo))
}

pub async fn create_todo(
    State(state): State<AppState>,
    ctx: Ctx,
    ApiJson(payload): ApiJson<TodoCreate>,
) -> Result<Json<Todo>> {
    if is_blank(&payload.title) {
        return Err(Error::MissingTitle);
    }
    let todo = state.todos.create(payload)?;
    info!("{} created todo {}", ctx.username, todo.id);
    Ok(Json(todo))
}

pub async fn update_todo(
    State(state): State<AppState>,
    ctx: Ctx,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<TodoUpdate>,
) -> Result<Json<Todo>> {
    if payload.title.as_deref().is_some_and(is_blank) {
        return Err(Error::MissingTitle);
    }
    let todo = state.todos.update(id, payload)?.ok_or(Error::TodoNotFound)?;
    info!("{} updated todo {id}", ctx.username);
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    ctx: Ctx,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageBody>> {
    if !state.todos.delete(id)? {
        return Err(Error::TodoNotFound);
    }
    info!("{} deleted todo {id}", ctx.username);
    Ok(Json(MessageBody::new(TODO_DELETED)))
}
