//! Request extractors that reject with a JSON [`ApiError`].

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use holocron_domain::error::ValidationError;

use crate::error::ApiError;

/// Like [`axum::Json`], but a missing or malformed body becomes a
/// `400` validation error with a JSON body instead of axum's plain-text
/// rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationError::MalformedBody(rejection.body_text()).into()),
        }
    }
}
