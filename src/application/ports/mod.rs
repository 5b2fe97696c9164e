mod application_repository;
mod company_repository;
mod job_repository;
mod password_hasher;
mod repository_error;
mod token_service;
mod user_repository;

pub use application_repository::ApplicationRepository;
pub use company_repository::CompanyRepository;
pub use job_repository::JobRepository;
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use repository_error::RepositoryError;
pub use token_service::{TokenError, TokenService};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use application_repository::MockApplicationRepository;
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use token_service::MockTokenService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
