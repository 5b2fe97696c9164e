use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::application::{dto::CreateJobRequest, errors::UseCaseError, ports::JobRepository};
use crate::domain::{
    changes::{into_changeset, parse_changes, JobChange},
    entities::{Job, NewJob},
    filters::{parse_filter, JobFilterField},
    validation::Validation,
    value_objects::CompanyHandle,
};

/// Use case for posting jobs
pub struct CreateJobUseCase {
    repository: Arc<dyn JobRepository>,
}

impl CreateJobUseCase {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: CreateJobRequest) -> Result<Job, UseCaseError> {
        let company_handle = CompanyHandle::new(request.company_handle)?;
        Validation::validate_not_empty(&request.title, "title")?;
        if let Some(salary) = request.salary {
            Validation::validate_range(salary, "salary", Some(0), None)?;
        }
        if let Some(equity) = request.equity {
            Validation::validate_range(equity, "equity", Some(0.0), Some(1.0))?;
        }

        let job = self
            .repository
            .create(&NewJob {
                title: request.title,
                salary: request.salary,
                equity: request.equity,
                company_handle,
            })
            .await?;

        info!(job_id = job.id, company = %job.company_handle, "Job created");
        Ok(job)
    }
}

/// Use case for listing jobs, optionally filtered
pub struct ListJobsUseCase {
    repository: Arc<dyn JobRepository>,
}

impl ListJobsUseCase {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, query: &[(String, String)]) -> Result<Vec<Job>, UseCaseError> {
        if query.is_empty() {
            return Ok(self.repository.find_all().await?);
        }

        let filter: Vec<JobFilterField> = parse_filter(query)?;
        Ok(self.repository.find_filtered(&filter).await?)
    }
}

pub struct GetJobUseCase {
    repository: Arc<dyn JobRepository>,
}

impl GetJobUseCase {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i32) -> Result<Job, UseCaseError> {
        Ok(self.repository.get(id).await?)
    }
}

/// Use case for partially updating a job; the owning company never changes
pub struct UpdateJobUseCase {
    repository: Arc<dyn JobRepository>,
}

impl UpdateJobUseCase {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i32, body: &Map<String, Value>) -> Result<Job, UseCaseError> {
        let changes: Vec<JobChange> = parse_changes(body)?;
        if changes.is_empty() {
            return Err(UseCaseError::InvalidRequest("No data".to_string()));
        }

        let job = self.repository.update(id, &into_changeset(changes)).await?;

        info!(job_id = id, "Job updated");
        Ok(job)
    }
}

pub struct DeleteJobUseCase {
    repository: Arc<dyn JobRepository>,
}

impl DeleteJobUseCase {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i32) -> Result<(), UseCaseError> {
        self.repository.remove(id).await?;
        info!(job_id = id, "Job deleted");
        Ok(())
    }
}
