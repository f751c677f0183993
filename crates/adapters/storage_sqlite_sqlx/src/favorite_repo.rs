//! `SQLite` implementation of [`FavoriteRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use holocron_app::ports::FavoriteRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::favorite::{Favorite, FavoriteTarget, NewFavorite};
use holocron_domain::id::{FavoriteId, UserId};

use crate::columns;
use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain [`Favorite`].
///
/// Rows that do not point at exactly one target fail to decode.
struct Wrapper(Favorite);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Favorite> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let target = FavoriteTarget::from_columns(
            columns::optional_id(row, "planet_id")?,
            columns::optional_id(row, "people_id")?,
        )
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Favorite {
            id: columns::id(row, "id")?,
            user_id: columns::id(row, "user_id")?,
            target,
        }))
    }
}

const INSERT: &str = "INSERT INTO favorites (user_id, planet_id, people_id) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM favorites WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM favorites ORDER BY id";
const SELECT_BY_USER: &str = "SELECT * FROM favorites WHERE user_id = ? ORDER BY id";
const SELECT_BY_USER_AND_PLANET: &str =
    "SELECT * FROM favorites WHERE user_id = ? AND planet_id = ? ORDER BY id LIMIT 1";
const SELECT_BY_USER_AND_PERSON: &str =
    "SELECT * FROM favorites WHERE user_id = ? AND people_id = ? ORDER BY id LIMIT 1";
const DELETE_BY_ID: &str = "DELETE FROM favorites WHERE id = ?";

/// `SQLite`-backed favorite repository.
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FavoriteRepository for SqliteFavoriteRepository {
    async fn create(&self, favorite: NewFavorite) -> Result<Favorite, HolocronError> {
        let result = sqlx::query(INSERT)
            .bind(favorite.user_id.get())
            .bind(favorite.target.planet_id().map(|id| id.get()))
            .bind(favorite.target.people_id().map(|id| id.get()))
            .execute(&self.pool)
            .await
            .map_err(write_error("Favorite"))?;

        let id = columns::inserted_id(&result)?;
        Ok(Favorite::from_draft(id, favorite))
    }

    async fn get_by_id(&self, id: FavoriteId) -> Result<Option<Favorite>, HolocronError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Favorite>, HolocronError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Favorite>, HolocronError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_USER)
            .bind(user_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_user_and_target(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, HolocronError> {
        let (sql, target_id) = match target {
            FavoriteTarget::Planet(id) => (SELECT_BY_USER_AND_PLANET, id.get()),
            FavoriteTarget::Person(id) => (SELECT_BY_USER_AND_PERSON, id.get()),
        };

        let row: Option<Wrapper> = sqlx::query_as(sql)
            .bind(user_id.get())
            .bind(target_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn delete(&self, id: FavoriteId) -> Result<bool, HolocronError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
