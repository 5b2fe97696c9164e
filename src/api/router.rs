use axum::{
    http::header::AUTHORIZATION,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::iter::once;
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, sensitive_headers::SetSensitiveRequestHeadersLayer};

use crate::api::handlers::{
    apply_handler, create_company_handler, create_job_handler, create_user_handler,
    delete_company_handler, delete_job_handler, delete_user_handler, get_company_handler,
    get_job_handler, get_user_handler, health_handler, list_companies_handler, list_jobs_handler,
    list_users_handler, readiness_handler, register_handler, token_handler,
    update_company_handler, update_job_handler, update_user_handler,
};
use crate::api::middleware::{
    auth::auth_middleware,
    authorization::{require_admin, require_correct_user_or_admin},
    cors::create_cors_layer,
    metrics::metrics_middleware,
};
use crate::api::openapi::swagger_ui;
use crate::application::ports::TokenService;
use crate::application::use_cases::{
    ApplyToJobUseCase, AuthenticateUserUseCase, CreateCompanyUseCase, CreateJobUseCase,
    CreateUserUseCase, DeleteCompanyUseCase, DeleteJobUseCase, DeleteUserUseCase,
    GetCompanyUseCase, GetJobUseCase, GetUserUseCase, ListCompaniesUseCase, ListJobsUseCase,
    ListUsersUseCase, UpdateCompanyUseCase, UpdateJobUseCase, UpdateUserUseCase,
};

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub tokens: Arc<dyn TokenService>,
    pub max_body_bytes: usize,
    pub cors_origins: Vec<String>,

    pub authenticate_user: Arc<AuthenticateUserUseCase>,
    pub create_user: Arc<CreateUserUseCase>,
    pub list_users: Arc<ListUsersUseCase>,
    pub get_user: Arc<GetUserUseCase>,
    pub update_user: Arc<UpdateUserUseCase>,
    pub delete_user: Arc<DeleteUserUseCase>,
    pub apply_to_job: Arc<ApplyToJobUseCase>,

    pub create_company: Arc<CreateCompanyUseCase>,
    pub list_companies: Arc<ListCompaniesUseCase>,
    pub get_company: Arc<GetCompanyUseCase>,
    pub update_company: Arc<UpdateCompanyUseCase>,
    pub delete_company: Arc<DeleteCompanyUseCase>,

    pub create_job: Arc<CreateJobUseCase>,
    pub list_jobs: Arc<ListJobsUseCase>,
    pub get_job: Arc<GetJobUseCase>,
    pub update_job: Arc<UpdateJobUseCase>,
    pub delete_job: Arc<DeleteJobUseCase>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let admin = || axum_middleware::from_fn(require_admin);
    let correct_user = || axum_middleware::from_fn(require_correct_user_or_admin);

    Router::new()
        // Health checks
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        // Auth
        .route(
            "/auth/token",
            post(token_handler).with_state(Arc::clone(&state.authenticate_user)),
        )
        .route(
            "/auth/register",
            post(register_handler).with_state(Arc::clone(&state.create_user)),
        )
        // Companies
        .route(
            "/companies",
            get(list_companies_handler).with_state(Arc::clone(&state.list_companies)),
        )
        .route(
            "/companies",
            post(create_company_handler)
                .with_state(Arc::clone(&state.create_company))
                .route_layer(admin()),
        )
        .route(
            "/companies/{handle}",
            get(get_company_handler).with_state(Arc::clone(&state.get_company)),
        )
        .route(
            "/companies/{handle}",
            patch(update_company_handler)
                .with_state(Arc::clone(&state.update_company))
                .route_layer(admin()),
        )
        .route(
            "/companies/{handle}",
            delete(delete_company_handler)
                .with_state(Arc::clone(&state.delete_company))
                .route_layer(admin()),
        )
        // Jobs
        .route(
            "/jobs",
            get(list_jobs_handler).with_state(Arc::clone(&state.list_jobs)),
        )
        .route(
            "/jobs",
            post(create_job_handler)
                .with_state(Arc::clone(&state.create_job))
                .route_layer(admin()),
        )
        .route(
            "/jobs/{id}",
            get(get_job_handler).with_state(Arc::clone(&state.get_job)),
        )
        .route(
            "/jobs/{id}",
            patch(update_job_handler)
                .with_state(Arc::clone(&state.update_job))
                .route_layer(admin()),
        )
        .route(
            "/jobs/{id}",
            delete(delete_job_handler)
                .with_state(Arc::clone(&state.delete_job))
                .route_layer(admin()),
        )
        // Users
        .route(
            "/users",
            post(create_user_handler)
                .with_state(Arc::clone(&state.create_user))
                .route_layer(admin()),
        )
        .route(
            "/users",
            get(list_users_handler)
                .with_state(Arc::clone(&state.list_users))
                .route_layer(admin()),
        )
        .route(
            "/users/{username}",
            get(get_user_handler)
                .with_state(Arc::clone(&state.get_user))
                .route_layer(correct_user()),
        )
        .route(
            "/users/{username}",
            patch(update_user_handler)
                .with_state(Arc::clone(&state.update_user))
                .route_layer(correct_user()),
        )
        .route(
            "/users/{username}",
            delete(delete_user_handler)
                .with_state(Arc::clone(&state.delete_user))
                .route_layer(correct_user()),
        )
        .route(
            "/users/{username}/jobs/{id}",
            post(apply_handler)
                .with_state(Arc::clone(&state.apply_to_job))
                .route_layer(correct_user()),
        )
        .merge(swagger_ui())
        // Innermost first: auth runs before the per-route guards
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&state.tokens),
            auth_middleware,
        ))
        .layer(RequestBodyLimitLayer::new(state.max_body_bytes))
        .layer(create_cors_layer(&state.cors_origins))
        .layer(SetSensitiveRequestHeadersLayer::new(once(AUTHORIZATION)))
        .layer(axum_middleware::from_fn(metrics_middleware))
}
