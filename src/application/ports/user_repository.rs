use async_trait::async_trait;

use crate::application::ports::RepositoryError;
use crate::domain::changes::FieldValue;
use crate::domain::entities::{NewUser, User, UserCredentials, UserDetail};
#[cfg(test)]
use mockall::automock;

/// Port for user persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; a taken username is a `Conflict`
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// Stored credentials for login, `None` when the user does not exist
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, RepositoryError>;

    /// All users ordered by username
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// User with the ids of the jobs they applied to
    async fn get(&self, username: &str) -> Result<UserDetail, RepositoryError>;

    /// Apply a partial update; a `password` change must already carry the hash
    async fn update(
        &self,
        username: &str,
        changes: &[(&'static str, FieldValue)],
    ) -> Result<User, RepositoryError>;

    async fn remove(&self, username: &str) -> Result<(), RepositoryError>;
}
