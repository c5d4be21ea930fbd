//! In-process stores.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::models::{
    todo::{Todo, TodoCreate, TodoUpdate},
    user::{User, UserCreate},
};
use crate::prelude::*;

use super::{TodoStore, UserStore};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    todos: BTreeMap<i32, Todo>,
    next_user_id: i32,
    next_todo_id: i32,
}

/// Both stores behind a single lock.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| Error::StorePoisoned)
    }
}

impl UserStore for MemoryStore {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .tables()?
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    fn create(&self, user: UserCreate) -> Result<User> {
        let mut tables = self.tables()?;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(Error::Diesel(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                Box::new(String::from("duplicate key value violates unique constraint")),
            )));
        }

        tables.next_user_id += 1;
        let now = Utc::now();
        let user = User {
            id: tables.next_user_id,
            username: user.username,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }
}

impl TodoStore for MemoryStore {
    fn find_all(&self) -> Result<Vec<Todo>> {
        Ok(self.tables()?.todos.values().cloned().collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Todo>> {
        Ok(self.tables()?.todos.get(&id).cloned())
    }

    fn create(&self, todo: TodoCreate) -> Result<Todo> {
        let mut tables = self.tables()?;
        tables.next_todo_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: tables.next_todo_id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: now,
            updated_at: now,
        };
        tables.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    fn update(&self, id: i32, changes: TodoUpdate) -> Result<Option<Todo>> {
        let mut tables = self.tables()?;
        Ok(tables.todos.get_mut(&id).map(|todo| {
            todo.apply(changes, Utc::now());
            todo.clone()
        }))
    }

    fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.tables()?.todos.remove(&id).is_some())
    }
}
