use async_trait::async_trait;

use crate::application::ports::RepositoryError;
use crate::domain::changes::FieldValue;
use crate::domain::entities::{Job, NewJob};
use crate::domain::filters::JobFilterField;
#[cfg(test)]
use mockall::automock;

/// Port for job persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a job; an unknown company is `NotFound`
    async fn create(&self, job: &NewJob) -> Result<Job, RepositoryError>;

    /// All jobs ordered by title
    async fn find_all(&self) -> Result<Vec<Job>, RepositoryError>;

    async fn find_filtered(&self, filter: &[JobFilterField]) -> Result<Vec<Job>, RepositoryError>;

    async fn get(&self, id: i32) -> Result<Job, RepositoryError>;

    async fn update(
        &self,
        id: i32,
        changes: &[(&'static str, FieldValue)],
    ) -> Result<Job, RepositoryError>;

    async fn remove(&self, id: i32) -> Result<(), RepositoryError>;
}
