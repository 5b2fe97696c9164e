use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{
    AppliedResponse, CompaniesResponse, CompanyDetailResponse, CompanyResponse,
    CreateCompanyRequest, CreateJobRequest, CreateUserRequest, CreatedUserResponse,
    DeletedJobResponse, DeletedResponse, JobResponse, JobsResponse, LoginRequest,
    RegisterUserRequest, TokenResponse, UserDetailResponse, UserResponse, UsersResponse,
};
use crate::domain::entities::{Company, CompanyDetail, Job, User, UserDetail};

/// OpenAPI specification for the Jobly API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobly API",
        version = "1.0.0",
        description = "Job board backend: companies, jobs, users and applications"
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::auth::token_handler,
        crate::api::handlers::auth::register_handler,
        crate::api::handlers::companies::create_company_handler,
        crate::api::handlers::companies::list_companies_handler,
        crate::api::handlers::companies::get_company_handler,
        crate::api::handlers::companies::update_company_handler,
        crate::api::handlers::companies::delete_company_handler,
        crate::api::handlers::jobs::create_job_handler,
        crate::api::handlers::jobs::list_jobs_handler,
        crate::api::handlers::jobs::get_job_handler,
        crate::api::handlers::jobs::update_job_handler,
        crate::api::handlers::jobs::delete_job_handler,
        crate::api::handlers::users::create_user_handler,
        crate::api::handlers::users::list_users_handler,
        crate::api::handlers::users::get_user_handler,
        crate::api::handlers::users::update_user_handler,
        crate::api::handlers::users::delete_user_handler,
        crate::api::handlers::users::apply_handler,
    ),
    components(
        schemas(
            Company,
            CompanyDetail,
            Job,
            User,
            UserDetail,
            CreateCompanyRequest,
            CreateJobRequest,
            CreateUserRequest,
            RegisterUserRequest,
            LoginRequest,
            TokenResponse,
            CompanyResponse,
            CompanyDetailResponse,
            CompaniesResponse,
            JobResponse,
            JobsResponse,
            UserResponse,
            UserDetailResponse,
            UsersResponse,
            CreatedUserResponse,
            DeletedResponse,
            DeletedJobResponse,
            AppliedResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Tokens and self-registration"),
        (name = "companies", description = "Company operations"),
        (name = "jobs", description = "Job postings"),
        (name = "users", description = "User accounts and job applications")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/auth/token",
            "/auth/register",
            "/companies",
            "/companies/{handle}",
            "/jobs",
            "/jobs/{id}",
            "/users",
            "/users/{username}",
            "/users/{username}/jobs/{id}",
            "/health",
            "/health/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer"));
    }
}
