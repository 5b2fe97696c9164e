use std::sync::Arc;

use tracing::info;

use crate::application::{errors::UseCaseError, ports::ApplicationRepository};
use crate::domain::entities::JobApplication;

/// Use case for applying a user to a job
pub struct ApplyToJobUseCase {
    repository: Arc<dyn ApplicationRepository>,
}

impl ApplyToJobUseCase {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, username: &str, job_id: i32) -> Result<JobApplication, UseCaseError> {
        let application = self.repository.apply(username, job_id).await?;
        info!(username = %username, job_id, "Applied to job");
        Ok(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockApplicationRepository, RepositoryError};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_apply() {
        let mut repo = MockApplicationRepository::new();
        repo.expect_apply()
            .with(eq("u1"), eq(3))
            .times(1)
            .returning(|u, id| {
                Ok(JobApplication {
                    username: u.to_string(),
                    job_id: id,
                })
            });

        let application = ApplyToJobUseCase::new(Arc::new(repo))
            .execute("u1", 3)
            .await
            .unwrap();
        assert_eq!(application.job_id, 3);
    }

    #[tokio::test]
    async fn test_repeat_application_is_conflict() {
        let mut repo = MockApplicationRepository::new();
        repo.expect_apply()
            .returning(|_, id| Err(RepositoryError::Conflict(format!("Already applied to job {}", id))));

        let err = ApplyToJobUseCase::new(Arc::new(repo))
            .execute("u1", 3)
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_apply_to_missing_job_is_not_found() {
        let mut repo = MockApplicationRepository::new();
        repo.expect_apply()
            .returning(|_, id| Err(RepositoryError::NotFound(format!("No job: {}", id))));

        let err = ApplyToJobUseCase::new(Arc::new(repo))
            .execute("u1", 0)
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound(_)));
    }
}
