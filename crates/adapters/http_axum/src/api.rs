//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod favorites;
#[allow(clippy::missing_errors_doc)]
pub mod people;
#[allow(clippy::missing_errors_doc)]
pub mod planets;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use serde::Serialize;

use holocron_app::ports::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository};
use holocron_domain::error::{HolocronError, NotFoundError, ValidationError};
use holocron_domain::id::ParseIdError;

use crate::error::ApiError;
use crate::sitemap::Sitemap;
use crate::state::AppState;

/// `{"msg": ...}` body used by informational responses.
#[derive(Serialize)]
pub struct MessageBody {
    pub msg: &'static str,
}

/// Parse an id taken from the URL path.
fn parse_id<T>(field: &'static str, raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = ParseIdError>,
{
    T::from_str(raw).map_err(|source| ValidationError::InvalidId { field, source }.into())
}

/// Parse an id used only to look records up.
///
/// Zero and negative integers are well-formed but never assigned, so they
/// yield `None` (nothing matches) rather than a validation error.
fn lookup_id<T>(field: &'static str, raw: &str) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = ParseIdError>,
{
    match T::from_str(raw) {
        Ok(id) => Ok(Some(id)),
        Err(ParseIdError::NotPositive) => Ok(None),
        Err(source) => Err(ValidationError::InvalidId { field, source }.into()),
    }
}

fn not_found(entity: &'static str, raw: &str) -> ApiError {
    HolocronError::from(NotFoundError {
        entity,
        id: raw.to_string(),
    })
    .into()
}

/// Register every API route.
pub fn routes<UR, PR, PLR, FR>() -> Sitemap<AppState<UR, PR, PLR, FR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    Sitemap::default()
        // People
        .get("/people", people::list::<UR, PR, PLR, FR>)
        .post("/people", people::create::<UR, PR, PLR, FR>)
        .get("/people/{id}", people::get::<UR, PR, PLR, FR>)
        // Planets
        .get("/planet", planets::list::<UR, PR, PLR, FR>)
        .post("/planet", planets::create::<UR, PR, PLR, FR>)
        .get("/planet/{id}", planets::get::<UR, PR, PLR, FR>)
        // Favorites
        .get("/favorites", favorites::list::<UR, PR, PLR, FR>)
        .get("/favorites/{id}", favorites::get::<UR, PR, PLR, FR>)
        .post(
            "/favorite/planet/{planet_id}",
            favorites::add_planet::<UR, PR, PLR, FR>,
        )
        .delete(
            "/favorite/planet/{planet_id}",
            favorites::remove_planet::<UR, PR, PLR, FR>,
        )
        .post(
            "/favorite/people/{people_id}",
            favorites::add_person::<UR, PR, PLR, FR>,
        )
        .delete(
            "/favorite/people/{people_id}",
            favorites::remove_person::<UR, PR, PLR, FR>,
        )
        // Users
        .get("/user", users::hello)
        .get("/users", users::list::<UR, PR, PLR, FR>)
        .post("/users", users::create::<UR, PR, PLR, FR>)
        .get(
            "/users/{user_id}/favorites",
            favorites::list_for_user::<UR, PR, PLR, FR>,
        )
}
