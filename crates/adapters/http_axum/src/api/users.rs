//! JSON REST handlers for users.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use holocron_app::ports::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository};
use holocron_domain::user::User;

use super::MessageBody;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Request body for registering a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /user`
pub async fn hello() -> Json<MessageBody> {
    Json(MessageBody {
        msg: "Hello, this is your GET /user response ",
    })
}

/// `GET /users`
pub async fn list<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `POST /users`
pub async fn create<UR, PR, PLR, FR>(
    State(state): State<AppState<UR, PR, PLR, FR>>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlanetRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let mut builder = User::builder();
    if let Some(email) = req.email {
        builder = builder.email(email);
    }
    if let Some(password) = req.password {
        builder = builder.password(password);
    }
    if let Some(is_active) = req.is_active {
        builder = builder.is_active(is_active);
    }

    let user = builder.build()?;
    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Created(Json(created)))
}
