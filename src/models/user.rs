//! User credential model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::users::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// A registered user with its password hash.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user ID.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// PHC formatted Argon2 hash.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct UserCreate {
    pub username: String,
    pub password_hash: String,
}

impl UserCreate {
    /// Inserts the user. Fails on a duplicate username.
    pub fn save(self, connection: &DbConnection) -> Result<User> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::insert_into(users)
            .values(&self)
            .returning(User::as_returning())
            .get_result(conn)?)
    }
}

impl User {
    pub fn fetch_by_username(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(User::by_username(target)
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }

    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_username<'a>(target: &'a str) -> _ {
        crate::schema::users::dsl::users.filter(username.eq(target))
    }
}
