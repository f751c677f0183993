//! `SQLite` implementation of [`PersonRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::PersonRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::id::PersonId;
use holocron_domain::person::{NewPerson, Person};

use crate::columns;
use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain [`Person`].
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Person {
            id: columns::id(row, "id")?,
            name: row.try_get("name")?,
            species: row.try_get("species")?,
            gender: row.try_get("gender")?,
            homeworld: row.try_get("homeworld")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO people (name, species, gender, homeworld) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM people WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM people ORDER BY id";
const DELETE_FAVORITES: &str = "DELETE FROM favorites WHERE people_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM people WHERE id = ?";

/// `SQLite`-backed person repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    async fn create(&self, person: NewPerson) -> Result<Person, HolocronError> {
        let result = sqlx::query(INSERT)
            .bind(&person.name)
            .bind(&person.species)
            .bind(&person.gender)
            .bind(&person.homeworld)
            .execute(&self.pool)
            .await
            .map_err(write_error("Person"))?;

        let id = columns::inserted_id(&result)?;
        Ok(Person::from_draft(id, person))
    }

    async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, HolocronError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Person>, HolocronError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    /// Favorites go first, then the person, in one transaction. A missing
    /// person rolls the whole thing back.
    async fn delete(&self, id: PersonId) -> Result<bool, HolocronError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let favorites = sqlx::query(DELETE_FAVORITES)
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        let deleted = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await.map_err(StorageError::from)?;
            return Ok(false);
        }

        tx.commit().await.map_err(StorageError::from)?;
        tracing::debug!(
            person_id = %id,
            favorites = favorites.rows_affected(),
            "deleted person with its favorites"
        );
        Ok(true)
    }
}
