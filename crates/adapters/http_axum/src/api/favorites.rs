//! JSON REST handlers for favorites.
//!
//! Adding and removing a favorite is keyed by the `(user, target)` pair:
//! the target comes from the path, the user from the JSON body.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use holocron_app::ports::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository};
use holocron_domain::error::ValidationError;
use holocron_domain::favorite::{Favorite, FavoriteTarget, NewFavorite};
use holocron_domain::id::{FavoriteId, PersonId, PlanetId, UserId};

use super::MessageBody;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Request body naming the user who owns the favorite.
#[derive(Deserialize)]
pub struct FavoriteRequest {
    pub user_id: Option<UserId>,
}

impl FavoriteRequest {
    fn user_id(&self) -> Result<UserId, ApiError> {
        self.user_id
            .ok_or_else(|| ValidationError::MissingField("user_id").into())
    }
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Favorite>>),
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
    Ok(Json<Favorite>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the add endpoints.
pub enum CreateResponse {
    Created(Json<Favorite>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the remove endpoints.
pub enum DeleteResponse {
    Deleted(&'static str),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(msg) => Json(MessageBody { msg }).into_response(),
        }
    }
}

/// `GET /favorites`
pub async fn list<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let favorites = state.favorite_service.list_favorites().await?;
    Ok(ListResponse::Ok(Json(favorites)))
}

/// `GET /favorites/{id}`
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
    let Some(favorite_id) = super::lookup_id::<FavoriteId>("id", &id)? else {
        return Err(super::not_found("Favorite", &id));
    };
    let favorite = state.favorite_service.get_favorite(favorite_id).await?;
    Ok(GetResponse::Ok(Json(favorite)))
}

/// `GET /users/{user_id}/favorites`
pub async fn list_for_user<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    Path(user_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Some(user_id) = super::lookup_id::<UserId>("user_id", &user_id)? else {
        return Ok(ListResponse::Ok(Json(Vec::new())));
    };
    let favorites = state.favorite_service.list_user_favorites(user_id).await?;
    Ok(ListResponse::Ok(Json(favorites)))
}

/// `POST /favorite/planet/{planet_id}`
pub async fn add_planet<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    Path(planet_id): Path<String>,
    JsonBody(req): JsonBody<FavoriteRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let planet_id: PlanetId = super::parse_id("planet_id", &planet_id)?;
    let favorite = NewFavorite::planet(req.user_id()?, planet_id);
    let created = state.favorite_service.add_favorite(favorite).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `POST /favorite/people/{people_id}`
pub async fn add_person<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    Path(people_id): Path<String>,
    JsonBody(req): JsonBody<FavoriteRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let people_id: PersonId = super::parse_id("people_id", &people_id)?;
    let favorite = NewFavorite::person(req.user_id()?, people_id);
    let created = state.favorite_service.add_favorite(favorite).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /favorite/planet/{planet_id}`
pub async fn remove_planet<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    Path(planet_id): Path<String>,
    JsonBody(req): JsonBody<FavoriteRequest>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let lookup = super::lookup_id::<PlanetId>("planet_id", &planet_id)?;
    let user_id = req.user_id()?;
    let Some(planet_id) = lookup else {
        return Err(super::not_found("Favorite planet", &planet_id));
    };
    state
        .favorite_service
        .remove_favorite(user_id, FavoriteTarget::Planet(planet_id))
        .await?;
    Ok(DeleteResponse::Deleted("Favorite planet deleted"))
}

/// `DELETE /favorite/people/{people_id}`
pub async fn remove_person<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    Path(people_id): Path<String>,
    JsonBody(req): JsonBody<FavoriteRequest>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let lookup = super::lookup_id::<PersonId>("people_id", &people_id)?;
    let user_id = req.user_id()?;
    let Some(people_id) = lookup else {
        return Err(super::not_found("Favorite person", &people_id));
    };
    state
        .favorite_service
        .remove_favorite(user_id, FavoriteTarget::Person(people_id))
        .await?;
    Ok(DeleteResponse::Deleted("Favorite person deleted"))
}
