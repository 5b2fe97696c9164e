mod constraint;
mod postgres_application_repository;
mod postgres_company_repository;
mod postgres_job_repository;
mod postgres_user_repository;
mod query_builder;
pub mod sql_fragment;

pub use postgres_application_repository::PostgresApplicationRepository;
pub use postgres_company_repository::PostgresCompanyRepository;
pub use postgres_job_repository::PostgresJobRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use query_builder::QueryBuilder;
