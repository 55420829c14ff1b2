use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::database::RegistryError;

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const ALREADY_SIGNED_UP: &str = "Student is already signed up for this activity";

/// Errors surfaced to HTTP clients as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),
    /// Malformed path or query string.
    #[error("{0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ActivityNotFound(_) => ApiError::NotFound(ACTIVITY_NOT_FOUND.into()),
            RegistryError::AlreadySignedUp { .. } => {
                ApiError::BadRequest(ALREADY_SIGNED_UP.into())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_http_errors() {
        let not_found: ApiError = RegistryError::ActivityNotFound("X".into()).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Activity not found");

        let duplicate: ApiError = RegistryError::AlreadySignedUp {
            activity: "Chess Club".into(),
            email: "michael@mergington.edu".into(),
        }
        .into();
        assert_eq!(duplicate.status_code(), StatusCode::BAD_REQUEST);
        assert!(duplicate.to_string().contains("already signed up"));
    }

    #[test]
    fn missing_parameter_is_unprocessable() {
        let err = ApiError::MissingParameter("email");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Missing required query parameter: email");
    }

    #[test]
    fn invalid_request_is_bad_request() {
        let err = ApiError::InvalidRequest("Invalid URL".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid URL");
    }
}
