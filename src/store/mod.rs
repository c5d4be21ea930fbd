//! Persistence seams used by the web layer.
//!
//! Handlers only see these traits. [`DbConnection`](crate::db::connection::DbConnection)
//! implements them on top of PostgreSQL; [`memory::MemoryStore`] keeps
//! everything in process, which is what the tests and database-less runs use.

use crate::models::{
    todo::{Todo, TodoCreate, TodoUpdate},
    user::{User, UserCreate},
};
use crate::prelude::*;

pub mod memory;
pub mod pg;

/// Credential store.
pub trait UserStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Inserts a user. A duplicate username is an error.
    fn create(&self, user: UserCreate) -> Result<User>;
}

/// Task store.
pub trait TodoStore: Send + Sync {
    /// All tasks ordered by id.
    fn find_all(&self) -> Result<Vec<Todo>>;

    fn find_by_id(&self, id: i32) -> Result<Option<Todo>>;

    fn create(&self, todo: TodoCreate) -> Result<Todo>;

    /// Returns `None` when no task has this id.
    fn update(&self, id: i32, changes: TodoUpdate) -> Result<Option<Todo>>;

    /// Returns whether a task was removed.
    fn delete(&self, id: i32) -> Result<bool>;
}
