//! Error type shared by every use case

use thiserror::Error;

use crate::application::ports::{PasswordHashError, RepositoryError, TokenError};
use crate::domain::errors::DomainError;
use crate::domain::filters::FilterError;

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    /// Store failure; details stay in the logs
    #[error("Repository error: {0}")]
    Repository(RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => UseCaseError::NotFound(msg),
            RepositoryError::Conflict(msg) => UseCaseError::Conflict(msg),
            RepositoryError::InvalidRequest(msg) => UseCaseError::InvalidRequest(msg),
            other => UseCaseError::Repository(other),
        }
    }
}

impl From<DomainError> for UseCaseError {
    fn from(err: DomainError) -> Self {
        UseCaseError::InvalidRequest(err.to_string())
    }
}

impl From<FilterError> for UseCaseError {
    fn from(err: FilterError) -> Self {
        UseCaseError::InvalidRequest(err.to_string())
    }
}

impl From<PasswordHashError> for UseCaseError {
    fn from(err: PasswordHashError) -> Self {
        UseCaseError::Internal(err.to_string())
    }
}

impl From<TokenError> for UseCaseError {
    fn from(err: TokenError) -> Self {
        UseCaseError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_kinds_are_kept() {
        assert!(matches!(
            UseCaseError::from(RepositoryError::NotFound("No job: 1".to_string())),
            UseCaseError::NotFound(msg) if msg == "No job: 1"
        ));
        assert!(matches!(
            UseCaseError::from(RepositoryError::Conflict("dup".to_string())),
            UseCaseError::Conflict(_)
        ));
        assert!(matches!(
            UseCaseError::from(RepositoryError::InvalidRequest("No data".to_string())),
            UseCaseError::InvalidRequest(_)
        ));
        assert!(matches!(
            UseCaseError::from(RepositoryError::Internal("boom".to_string())),
            UseCaseError::Repository(_)
        ));
    }

    #[test]
    fn test_filter_error_is_invalid_request() {
        let err = UseCaseError::from(FilterError::InappropriateFields(vec!["x".to_string()]));
        assert!(matches!(err, UseCaseError::InvalidRequest(msg) if msg.contains("inappropriate")));
    }
}
