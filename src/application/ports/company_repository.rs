use async_trait::async_trait;

use crate::application::ports::RepositoryError;
use crate::domain::changes::FieldValue;
use crate::domain::entities::{Company, CompanyDetail, NewCompany};
use crate::domain::filters::CompanyFilterField;
#[cfg(test)]
use mockall::automock;

/// Port for company persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a company; a taken handle or name is a `Conflict`
    async fn create(&self, company: &NewCompany) -> Result<Company, RepositoryError>;

    /// All companies ordered by name
    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError>;

    /// Companies matching every filter field, ordered by name
    async fn find_filtered(
        &self,
        filter: &[CompanyFilterField],
    ) -> Result<Vec<Company>, RepositoryError>;

    /// Company with its jobs ordered by id
    async fn get(&self, handle: &str) -> Result<CompanyDetail, RepositoryError>;

    /// Apply a partial update and return the stored company
    async fn update(
        &self,
        handle: &str,
        changes: &[(&'static str, FieldValue)],
    ) -> Result<Company, RepositoryError>;

    async fn remove(&self, handle: &str) -> Result<(), RepositoryError>;
}
