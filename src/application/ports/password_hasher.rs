use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Malformed password hash")]
    Malformed,

    #[error("Password hashing failed: {0}")]
    Internal(String),
}

/// Port for one-way password hashing
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check `password` against a hash produced by `hash`
    fn verify(&self, password: &str, encoded: &str) -> Result<bool, PasswordHashError>;
}
