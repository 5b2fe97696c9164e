use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::application::{
    dto::CreateCompanyRequest, errors::UseCaseError, ports::CompanyRepository,
};
use crate::domain::{
    changes::{into_changeset, parse_changes, CompanyChange},
    entities::{Company, CompanyDetail, NewCompany},
    filters::{parse_filter, CompanyFilterField},
    validation::Validation,
    value_objects::CompanyHandle,
};

/// Use case for creating companies
pub struct CreateCompanyUseCase {
    repository: Arc<dyn CompanyRepository>,
}

impl CreateCompanyUseCase {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: CreateCompanyRequest) -> Result<Company, UseCaseError> {
        let handle = CompanyHandle::new(request.handle)?;
        Validation::validate_not_empty(&request.name, "name")?;
        if let Some(url) = &request.logo_url {
            Validation::validate_url(url, "logoUrl")?;
        }

        let company = self
            .repository
            .create(&NewCompany {
                handle,
                name: request.name,
                description: request.description,
                num_employees: request.num_employees,
                logo_url: request.logo_url,
            })
            .await?;

        info!(handle = %company.handle, "Company created");
        Ok(company)
    }
}

/// Use case for listing companies, optionally filtered
pub struct ListCompaniesUseCase {
    repository: Arc<dyn CompanyRepository>,
}

impl ListCompaniesUseCase {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    /// `query` holds the raw query string pairs in request order
    pub async fn execute(&self, query: &[(String, String)]) -> Result<Vec<Company>, UseCaseError> {
        if query.is_empty() {
            return Ok(self.repository.find_all().await?);
        }

        let filter: Vec<CompanyFilterField> = parse_filter(query)?;
        Ok(self.repository.find_filtered(&filter).await?)
    }
}

/// Use case for fetching one company with its jobs
pub struct GetCompanyUseCase {
    repository: Arc<dyn CompanyRepository>,
}

impl GetCompanyUseCase {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, handle: &str) -> Result<CompanyDetail, UseCaseError> {
        Ok(self.repository.get(handle).await?)
    }
}

/// Use case for partially updating a company
pub struct UpdateCompanyUseCase {
    repository: Arc<dyn CompanyRepository>,
}

impl UpdateCompanyUseCase {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        handle: &str,
        body: &Map<String, Value>,
    ) -> Result<Company, UseCaseError> {
        let changes: Vec<CompanyChange> = parse_changes(body)?;
        if changes.is_empty() {
            return Err(UseCaseError::InvalidRequest("No data".to_string()));
        }

        let company = self
            .repository
            .update(handle, &into_changeset(changes))
            .await?;

        info!(handle = %handle, "Company updated");
        Ok(company)
    }
}

/// Use case for deleting companies
pub struct DeleteCompanyUseCase {
    repository: Arc<dyn CompanyRepository>,
}

impl DeleteCompanyUseCase {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, handle: &str) -> Result<(), UseCaseError> {
        self.repository.remove(handle).await?;
        info!(handle = %handle, "Company deleted");
        Ok(())
    }
}
