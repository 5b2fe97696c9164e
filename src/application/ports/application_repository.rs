use async_trait::async_trait;

use crate::application::ports::RepositoryError;
use crate::domain::entities::JobApplication;
#[cfg(test)]
use mockall::automock;

/// Port for job applications
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Record an application; unknown user or job is `NotFound`, a repeat is `Conflict`
    async fn apply(&self, username: &str, job_id: i32) -> Result<JobApplication, RepositoryError>;
}
