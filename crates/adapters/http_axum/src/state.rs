//! Shared application state for axum handlers.

use std::sync::Arc;

use holocron_app::ports::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository};
use holocron_app::services::favorite_service::FavoriteService;
use holocron_app::services::person_service::PersonService;
use holocron_app::services::planet_service::PlanetService;
use holocron_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the four repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<UR, PR, PLR, FR> {
    /// User service.
    pub user_service: Arc<UserService<UR>>,
    /// Person CRUD service.
    pub person_service: Arc<PersonService<PR>>,
    /// Planet CRUD service.
    pub planet_service: Arc<PlanetService<PLR>>,
    /// Favorite linking service.
    pub favorite_service: Arc<FavoriteService<FR>>,
}

impl<UR, PR, PLR, FR> Clone for AppState<UR, PR, PLR, FR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            person_service: Arc::clone(&self.person_service),
            planet_service: Arc::clone(&self.planet_service),
            favorite_service: Arc::clone(&self.favorite_service),
        }
    }
}

impl<UR, PR, PLR, FR> AppState<UR, PR, PLR, FR>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR>,
        person_service: PersonService<PR>,
        planet_service: PlanetService<PLR>,
        favorite_service: FavoriteService<FR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            person_service: Arc::new(person_service),
            planet_service: Arc::new(planet_service),
            favorite_service: Arc::new(favorite_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when services are also needed outside the HTTP layer.
    pub fn from_arcs(
        user_service: Arc<UserService<UR>>,
        person_service: Arc<PersonService<PR>>,
        planet_service: Arc<PlanetService<PLR>>,
        favorite_service: Arc<FavoriteService<FR>>,
    ) -> Self {
        Self {
            user_service,
            person_service,
            planet_service,
            favorite_service,
        }
    }
}
