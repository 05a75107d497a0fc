//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mockservices_domain::error::{InvalidInputError, MockServiceError};

/// JSON error body returned by every endpoint.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps [`MockServiceError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(MockServiceError);

impl From<MockServiceError> for ApiError {
    fn from(err: MockServiceError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(InvalidInputError::new(rejection.body_text()).into())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(InvalidInputError::new(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MockServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            MockServiceError::InvalidOperation(_) | MockServiceError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
        };
        tracing::debug!(error = %self.0, %status, "request rejected");

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Fallback for paths no route matches.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method not allowed".to_string(),
        }),
    )
        .into_response()
}
