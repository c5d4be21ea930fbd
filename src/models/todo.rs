//! Task model.

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::todos::dsl::*;
use chrono::{DateTime, Utc};
use diesel::associations::HasTable;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A task record.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new task.
#[derive(Insertable, PartialEq, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::todos)]
pub struct TodoCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update of a task. `None` fields are left untouched.
#[derive(AsChangeset, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::todos)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Todo {
    /// Applies the fields present in `changes`.
    pub fn apply(&mut self, changes: TodoUpdate, now: DateTime<Utc>) {
        if let Some(value) = changes.title {
            self.title = value;
        }
        if let Some(value) = changes.description {
            self.description = value;
        }
        if let Some(value) = changes.completed {
            self.completed = value;
        }
        self.updated_at = now;
    }
}

impl TodoCreate {
    pub fn save(self, connection: &DbConnection) -> Result<Todo> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::insert_into(todos)
            .values(&self)
            .returning(Todo::as_returning())
            .get_result(conn)?)
    }
}

impl Todo {
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(Todo::table()
            .order(id.asc())
            .select(Todo::as_select())
            .load(conn)?)
    }

    pub fn fetch_by_id(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(Todo::by_id(target)
            .select(Todo::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn update(
        target: i32,
        changes: TodoUpdate,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::update(Todo::by_id(target))
            .set((&changes, updated_at.eq(Utc::now())))
            .returning(Todo::as_returning())
            .get_result(conn)
            .optional()?)
    }

    pub fn delete(target: i32, connection: &DbConnection) -> Result<bool> {
        let conn = &mut connection.pool.get()?;
        let deleted = diesel::delete(Todo::by_id(target)).execute(conn)?;
        Ok(deleted > 0)
    }

    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_id(target: i32) -> _ {
        crate::schema::todos::dsl::todos.filter(id.eq(target))
    }
}
