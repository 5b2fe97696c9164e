use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Validated company handle (primary key of a company, e.g. "anderson-arias")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyHandle(String);

impl CompanyHandle {
    pub const MAX_LENGTH: usize = 25;

    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidCompanyHandle(
                "Handle cannot be empty".to_string(),
            ));
        }

        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidCompanyHandle(format!(
                "Handle too long: {} > {}",
                value.chars().count(),
                Self::MAX_LENGTH
            )));
        }

        if value.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(DomainError::InvalidCompanyHandle(
                "Handle cannot contain whitespace or '/'".to_string(),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CompanyHandle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompanyHandle> for String {
    fn from(handle: CompanyHandle) -> Self {
        handle.0
    }
}

impl std::fmt::Display for CompanyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CompanyHandle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_handles() {
        assert!(CompanyHandle::new("c1".to_string()).is_ok());
        assert!(CompanyHandle::new("anderson-arias-morrow".to_string()).is_ok());
        assert!(CompanyHandle::new("a".repeat(25)).is_ok());
    }

    #[test]
    fn test_invalid_handles() {
        assert!(CompanyHandle::new(String::new()).is_err());
        assert!(CompanyHandle::new("a".repeat(26)).is_err());
        assert!(CompanyHandle::new("two words".to_string()).is_err());
        assert!(CompanyHandle::new("a/b".to_string()).is_err());
    }

    #[test]
    fn test_deserialize_rejects_invalid_handle() {
        let ok: Result<CompanyHandle, _> = serde_json::from_str("\"c1\"");
        assert_eq!(ok.unwrap().as_str(), "c1");

        let err: Result<CompanyHandle, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }
}
