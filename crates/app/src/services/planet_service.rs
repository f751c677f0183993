//! Planet service: use-cases for managing planets.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::id::PlanetId;
use holocron_domain::planet::{NewPlanet, Planet};

use crate::ports::PlanetRepository;

/// Application service for planet CRUD operations.
pub struct PlanetService<R> {
    repo: R,
}

impl<R: PlanetRepository> PlanetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new planet after the presence checks pass.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Validation`] if a field is empty, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, planet), fields(planet_name = %planet.name))]
    pub async fn create_planet(&self, planet: NewPlanet) -> Result<Planet, HolocronError> {
        planet.validate()?;
        self.repo.create(planet).await
    }

    /// Look up a planet by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no planet with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_planet(&self, id: PlanetId) -> Result<Planet, HolocronError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Planet",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all planets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_planets(&self) -> Result<Vec<Planet>, HolocronError> {
        self.repo.get_all().await
    }

    /// Delete a planet and, through the store, every favorite pointing at it.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no planet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_planet(&self, id: PlanetId) -> Result<(), HolocronError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Planet",
                id: id.to_string(),
            }
            .into())
        }
    }
}
