//! `SQLite` implementation of [`PlanetRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::PlanetRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::id::PlanetId;
use holocron_domain::planet::{NewPlanet, Planet};

use crate::columns;
use crate::error::{StorageError, write_error};

/// Wrapper for converting database rows into domain [`Planet`].
struct Wrapper(Planet);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Planet> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Planet {
            id: columns::id(row, "id")?,
            name: row.try_get("name")?,
            climate: row.try_get("climate")?,
            population: row.try_get("population")?,
            terrain: row.try_get("terrain")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO planets (name, climate, population, terrain) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM planets WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM planets ORDER BY id";
const DELETE_FAVORITES: &str = "DELETE FROM favorites WHERE planet_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM planets WHERE id = ?";

/// `SQLite`-backed planet repository.
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlanetRepository for SqlitePlanetRepository {
    async fn create(&self, planet: NewPlanet) -> Result<Planet, HolocronError> {
        let result = sqlx::query(INSERT)
            .bind(&planet.name)
            .bind(&planet.climate)
            .bind(&planet.population)
            .bind(&planet.terrain)
            .execute(&self.pool)
            .await
            .map_err(write_error("Planet"))?;

        let id = columns::inserted_id(&result)?;
        Ok(Planet::from_draft(id, planet))
    }

    async fn get_by_id(&self, id: PlanetId) -> Result<Option<Planet>, HolocronError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Planet>, HolocronError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn delete(&self, id: PlanetId) -> Result<bool, HolocronError> {
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
            planet_id = %id,
            favorites = favorites.rows_affected(),
            "deleted planet with its favorites"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorite_repo::SqliteFavoriteRepository;
    use crate::pool::Config;
    use holocron_app::ports::FavoriteRepository;
    use holocron_domain::favorite::NewFavorite;
    use holocron_domain::id::UserId;

    async fn setup() -> (SqlitePlanetRepository, SqliteFavoriteRepository) {
        let db = Config::in_memory().build().await.unwrap();
        (
            SqlitePlanetRepository::new(db.pool().clone()),
            SqliteFavoriteRepository::new(db.pool().clone()),
        )
    }

    fn naboo() -> NewPlanet {
        Planet::builder()
            .name("Naboo")
            .climate("temperate")
            .population("4500000000")
            .terrain("grassy hills, swamps, forests, mountains")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_roundtrip_all_fields() {
        let (repo, _) = setup().await;
        let created = repo.create(naboo()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.population, "4500000000");
    }

    #[tokio::test]
    async fn should_list_planets_in_insertion_order() {
        let (repo, _) = setup().await;
        let first = repo.create(naboo()).await.unwrap();
        let mut kamino = naboo();
        kamino.name = "Kamino".to_string();
        let second = repo.create(kamino).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn should_cascade_delete_to_favorites() {
        let (repo, favorites) = setup().await;
        let naboo = repo.create(naboo()).await.unwrap();
        favorites
            .create(NewFavorite::planet(UserId::try_from(1).unwrap(), naboo.id))
            .await
            .unwrap();

        assert!(repo.delete(naboo.id).await.unwrap());

        assert!(repo.get_by_id(naboo.id).await.unwrap().is_none());
        assert!(favorites.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_false_when_deleting_missing_planet() {
        let (repo, _) = setup().await;
        assert!(!repo.delete(PlanetId::try_from(8).unwrap()).await.unwrap());
    }
}
