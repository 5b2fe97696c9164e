//! Field-level validation helpers shared by value objects and partial updates.

use crate::domain::errors::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

pub type ValidationResult<T> = Result<T, DomainError>;

pub struct Validation;

impl Validation {
    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field_name: &str) -> ValidationResult<()> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(field_name, "Field cannot be empty"));
        }
        Ok(())
    }

    /// Validate string length constraints (in characters)
    pub fn validate_length(
        value: &str,
        field_name: &str,
        min_length: Option<usize>,
        max_length: Option<usize>,
    ) -> ValidationResult<()> {
        let len = value.chars().count();

        if let Some(min) = min_length {
            if len < min {
                return Err(DomainError::validation(
                    field_name,
                    format!("Field length must be at least {} characters", min),
                ));
            }
        }

        if let Some(max) = max_length {
            if len > max {
                return Err(DomainError::validation(
                    field_name,
                    format!("Field length must be at most {} characters", max),
                ));
            }
        }

        Ok(())
    }

    /// Validate that a value is within a numeric range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        field_name: &str,
        min: Option<T>,
        max: Option<T>,
    ) -> ValidationResult<()> {
        if let Some(min_val) = min {
            if value < min_val {
                return Err(DomainError::validation(
                    field_name,
                    format!("Value {} is below minimum {}", value, min_val),
                ));
            }
        }

        if let Some(max_val) = max {
            if value > max_val {
                return Err(DomainError::validation(
                    field_name,
                    format!("Value {} exceeds maximum {}", value, max_val),
                ));
            }
        }

        Ok(())
    }

    pub fn validate_email(email: &str, field_name: &str) -> ValidationResult<()> {
        if !EMAIL_REGEX.is_match(email) || email.contains("..") {
            return Err(DomainError::validation(field_name, "Invalid email format"));
        }

        Self::validate_length(email, field_name, Some(3), Some(254))
    }

    pub fn validate_url(url: &str, field_name: &str) -> ValidationResult<()> {
        let Some(rest) = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
        else {
            return Err(DomainError::validation(
                field_name,
                "URL must start with http:// or https://",
            ));
        };
        if rest.starts_with('/') || rest.is_empty() {
            return Err(DomainError::validation(field_name, "URL must include a host"));
        }
        if url.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(
                field_name,
                "URL cannot contain whitespace",
            ));
        }

        Self::validate_length(url, field_name, None, Some(2048))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(Validation::validate_not_empty("test", "field").is_ok());
        assert!(Validation::validate_not_empty("", "field").is_err());
        assert!(Validation::validate_not_empty(" \t\n", "field").is_err());
    }

    #[test]
    fn test_validate_length_edge_cases() {
        assert!(Validation::validate_length("ab", "field", Some(2), Some(10)).is_ok());
        assert!(Validation::validate_length("abcdefghij", "field", Some(2), Some(10)).is_ok());
        assert!(Validation::validate_length("a", "field", Some(2), Some(10)).is_err());
        assert!(Validation::validate_length("abcdefghijk", "field", Some(2), Some(10)).is_err());
        assert!(Validation::validate_length("", "field", None, Some(10)).is_ok());
        assert!(Validation::validate_length("any length", "field", None, None).is_ok());
    }

    #[test]
    fn test_validate_length_counts_characters() {
        // five characters, ten bytes
        assert!(Validation::validate_length("ééééé", "field", None, Some(5)).is_ok());
    }

    #[test]
    fn test_validate_range() {
        assert!(Validation::validate_range(0, "salary", Some(0), None).is_ok());
        assert!(Validation::validate_range(-1, "salary", Some(0), None).is_err());
        assert!(Validation::validate_range(1.0, "equity", Some(0.0), Some(1.0)).is_ok());
        assert!(Validation::validate_range(1.01, "equity", Some(0.0), Some(1.0)).is_err());
    }

    #[test]
    fn test_validate_email() {
        for email in ["test@example.com", "user.name+tag@example.co.uk", "a@b.co"] {
            assert!(
                Validation::validate_email(email, "email").is_ok(),
                "Email should be valid: {}",
                email
            );
        }

        for email in [
            "",
            "@example.com",
            "test@",
            "test",
            "test @example.com",
            "test@example..com",
        ] {
            assert!(
                Validation::validate_email(email, "email").is_err(),
                "Email should be invalid: {}",
                email
            );
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(Validation::validate_url("http://c1.img", "logoUrl").is_ok());
        assert!(Validation::validate_url("https://example.com/logo.png", "logoUrl").is_ok());
        assert!(Validation::validate_url("ftp://example.com", "logoUrl").is_err());
        assert!(Validation::validate_url("http://a b.com", "logoUrl").is_err());
    }

    #[test]
    fn test_validate_url_short_host() {
        assert!(Validation::validate_url("http://x.y", "logoUrl").is_ok());
        assert!(Validation::validate_url("https://a", "logoUrl").is_ok());

        for url in ["http://", "https:///logo.png"] {
            let err = Validation::validate_url(url, "logoUrl").unwrap_err();
            assert!(err.to_string().contains("host"), "unexpected error for {}", url);
        }
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = Validation::validate_not_empty("", "username").unwrap_err();
        assert!(err.to_string().contains("username"));
        assert!(err.to_string().contains("empty"));
    }
}
