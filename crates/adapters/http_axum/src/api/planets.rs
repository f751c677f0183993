//! JSON REST handlers for planets.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use holocron_app::ports::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository};
use holocron_domain::id::PlanetId;
use holocron_domain::planet::Planet;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Request body for creating a planet.
#[derive(Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Planet>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Planet>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Planet>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /planet`
pub async fn list<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let planets = state.planet_service.list_planets().await?;
    Ok(ListResponse::Ok(Json(planets)))
}

/// `GET /planet/{id}`
pub async fn get<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Some(planet_id) = super::lookup_id::<PlanetId>("id", &id)? else {
        return Err(super::not_found("Planet", &id));
    };
    let planet = state.planet_service.get_planet(planet_id).await?;
    Ok(GetResponse::Ok(Json(planet)))
}

/// `POST /planet`
pub async fn create<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    JsonBody(req): JsonBody<CreatePlanetRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let mut builder = Planet::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(climate) = req.climate {
        builder = builder.climate(climate);
    }
    if let Some(population) = req.population {
        builder = builder.population(population);
    }
    if let Some(terrain) = req.terrain {
        builder = builder.terrain(terrain);
    }

    let planet = builder.build()?;
    let created = state.planet_service.create_planet(planet).await?;
    Ok(CreateResponse::Created(Json(created)))
}
