//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use holocron_domain::error::{HolocronError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HolocronError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HolocronError);

impl From<HolocronError> for ApiError {
    fn from(err: HolocronError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HolocronError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HolocronError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HolocronError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            HolocronError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_domain::error::{ConflictError, NotFoundError};
    use http_body_util::BodyExt;

    async fn render(err: HolocronError) -> (StatusCode, serde_json::Value) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_map_missing_field_to_bad_request() {
        let (status, body) = render(ValidationError::MissingField("user_id").into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing required field: user_id");
    }

    #[tokio::test]
    async fn should_map_not_found_to_404() {
        let err = NotFoundError {
            entity: "Person",
            id: "4".to_string(),
        };
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Person not found");
    }

    #[tokio::test]
    async fn should_map_conflict_to_409() {
        let (status, _) = render(ConflictError::Duplicate { entity: "User" }.into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_hide_storage_details() {
        let source = std::io::Error::other("disk I/O error at /var/lib/holocron.db");
        let (status, body) = render(HolocronError::Storage(Box::new(source))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "internal server error"}));
    }
}
