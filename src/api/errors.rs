use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::application::errors::UseCaseError;
use crate::domain::authorization::AuthorizationError;

/// Field-level validation failure
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// API error response, rendered as `{"error": {"message", "status"}}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    field_errors: Vec<FieldError>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn with_field_errors(mut self, field_errors: Vec<FieldError>) -> Self {
        self.field_errors = field_errors;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "message": self.message,
            "status": self.status.as_u16(),
        });
        if !self.field_errors.is_empty() {
            error["fieldErrors"] = json!(self.field_errors);
        }

        (self.status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::InvalidRequest(msg) => ApiError::bad_request(msg),
            UseCaseError::NotFound(msg) => ApiError::not_found(msg),
            UseCaseError::Conflict(msg) => ApiError::conflict(msg),
            UseCaseError::Unauthorized(msg) => ApiError::unauthorized(msg),
            UseCaseError::Repository(e) => {
                error!(error = %e, "Repository failure");
                ApiError::internal_error("Internal server error")
            }
            UseCaseError::Internal(msg) => {
                error!(error = %msg, "Internal failure");
                ApiError::internal_error("Internal server error")
            }
        }
    }
}

impl From<AuthorizationError> for ApiError {
    fn from(err: AuthorizationError) -> Self {
        ApiError::unauthorized(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RepositoryError;

    #[test]
    fn test_use_case_errors_map_to_status_codes() {
        let cases = [
            (UseCaseError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (UseCaseError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (UseCaseError::Conflict("x".into()), StatusCode::CONFLICT),
            (UseCaseError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (UseCaseError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_store_failures_are_not_leaked() {
        let err = ApiError::from(UseCaseError::Repository(RepositoryError::Internal(
            "password=secret".to_string(),
        )));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_authorization_errors_are_unauthorized() {
        let err = ApiError::from(AuthorizationError::PermissionDenied("no".to_string()));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
