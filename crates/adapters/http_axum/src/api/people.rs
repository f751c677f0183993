//! JSON REST handlers for people.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use holocron_app::ports::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository};
use holocron_domain::id::PersonId;
use holocron_domain::person::Person;

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Request body for creating a person.
#[derive(Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
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
    Ok(Json<Person>),
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
    Created(Json<Person>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /people`
pub async fn list<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;
    Ok(ListResponse::Ok(Json(people)))
}

/// `GET /people/{id}`
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
    let Some(person_id) = super::lookup_id::<PersonId>("id", &id)? else {
        return Err(super::not_found("Person", &id));
    };
    let person = state.person_service.get_person(person_id).await?;
    Ok(GetResponse::Ok(Json(person)))
}

/// `POST /people`
pub async fn create<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    JsonBody(req): JsonBody<CreatePersonRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let mut builder = Person::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(species) = req.species {
        builder = builder.species(species);
    }
    if let Some(gender) = req.gender {
        builder = builder.gender(gender);
    }
    if let Some(homeworld) = req.homeworld {
        builder = builder.homeworld(homeworld);
    }

    let person = builder.build()?;
    let created = state.person_service.create_person(person).await?;
    Ok(CreateResponse::Created(Json(created)))
}
