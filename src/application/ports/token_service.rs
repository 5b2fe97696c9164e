use thiserror::Error;

use crate::domain::authorization::UserContext;
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token could not be issued: {0}")]
    Issue(String),
}

/// Port for issuing and verifying bearer tokens
#[cfg_attr(test, automock)]
pub trait TokenService: Send + Sync {
    fn issue(&self, user: &UserContext) -> Result<String, TokenError>;

    fn verify(&self, token: &str) -> Result<UserContext, TokenError>;
}
