//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::UserRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::id::UserId;
use holocron_domain::user::{NewUser, Password, User};

use crate::columns;
use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let password: String = row.try_get("password")?;

        Ok(Self(User {
            id: columns::id(row, "id")?,
            email: row.try_get("email")?,
            password: Password::new(password),
            is_active: row.try_get("is_active")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (email, password, is_active) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY id";
const SELECT_BY_EMAIL: &str = "SELECT * FROM users WHERE email = ? ORDER BY id LIMIT 1";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, HolocronError> {
        let result = sqlx::query(INSERT)
            .bind(&user.email)
            .bind(user.password.expose())
            .bind(user.is_active)
            .execute(&self.pool)
            .await
            .map_err(write_error("User"))?;

        let id = columns::inserted_id(&result)?;
        Ok(User::from_draft(id, user))
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, HolocronError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<User>, HolocronError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, HolocronError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }
}
