use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Validation failed for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Unknown field for {entity}: {field}")]
    UnknownField { entity: &'static str, field: String },

    #[error("Invalid company handle: {0}")]
    InvalidCompanyHandle(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
