//! PostgreSQL backed stores.

use crate::db::connection::DbConnection;
use crate::models::{
    todo::{Todo, TodoCreate, TodoUpdate},
    user::{User, UserCreate},
};
use crate::prelude::*;

use super::{TodoStore, UserStore};

impl UserStore for DbConnection {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        User::fetch_by_username(username, self)
    }

    fn create(&self, user: UserCreate) -> Result<User> {
        user.save(self)
    }
}

impl TodoStore for DbConnection {
    fn find_all(&self) -> Result<Vec<Todo>> {
        Todo::fetch_all(self)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Todo>> {
        Todo::fetch_by_id(id, self)
    }

    fn create(&self, todo: TodoCreate) -> Result<Todo> {
        todo.save(self)
    }

    fn update(&self, id: i32, changes: TodoUpdate) -> Result<Option<Todo>> {
        Todo::update(id, changes, self)
    }

    fn delete(&self, id: i32) -> Result<bool> {
        Todo::delete(id, self)
    }
}
