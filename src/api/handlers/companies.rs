use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_and_respond;
use crate::application::dto::{
    CompaniesResponse, CompanyDetailResponse, CompanyResponse, CreateCompanyRequest,
    DeletedResponse,
};
use crate::application::use_cases::{
    CreateCompanyUseCase, DeleteCompanyUseCase, GetCompanyUseCase, ListCompaniesUseCase,
    UpdateCompanyUseCase,
};

/// POST /companies
#[utoipa::path(
    post,
    path = "/companies",
    tag = "companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Invalid company data"),
        (status = 401, description = "Admin rights required"),
        (status = 409, description = "Duplicate company")
    ),
    security(("bearer" = []))
)]
pub async fn create_company_handler(
    State(use_case): State<Arc<CreateCompanyUseCase>>,
    body: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let Json(request) = body?;
    validate_and_respond(&request)?;

    let company = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// GET /companies
/// Lists all companies, or those matching `name`, `minEmployees` and `maxEmployees`
#[utoipa::path(
    get,
    path = "/companies",
    tag = "companies",
    params(
        ("name" = Option<String>, Query, description = "Case-insensitive substring of the name"),
        ("minEmployees" = Option<i32>, Query, description = "Minimum number of employees"),
        ("maxEmployees" = Option<i32>, Query, description = "Maximum number of employees")
    ),
    responses(
        (status = 200, description = "Companies ordered by name", body = CompaniesResponse),
        (status = 400, description = "Unknown filter field or invalid range")
    )
)]
pub async fn list_companies_handler(
    State(use_case): State<Arc<ListCompaniesUseCase>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CompaniesResponse>, ApiError> {
    let Query(pairs) = query?;
    let companies = use_case.execute(&pairs).await?;
    Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/{handle}
#[utoipa::path(
    get,
    path = "/companies/{handle}",
    tag = "companies",
    params(("handle" = String, Path, description = "Company handle")),
    responses(
        (status = 200, description = "Company with its jobs", body = CompanyDetailResponse),
        (status = 404, description = "No such company")
    )
)]
pub async fn get_company_handler(
    State(use_case): State<Arc<GetCompanyUseCase>>,
    Path(handle): Path<String>,
) -> Result<Json<CompanyDetailResponse>, ApiError> {
    let company = use_case.execute(&handle).await?;
    Ok(Json(CompanyDetailResponse { company }))
}

/// PATCH /companies/{handle}
/// Accepts any of `name`, `description`, `numEmployees`, `logoUrl`
#[utoipa::path(
    patch,
    path = "/companies/{handle}",
    tag = "companies",
    params(("handle" = String, Path, description = "Company handle")),
    request_body = Object,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 400, description = "Empty, unknown or invalid fields"),
        (status = 401, description = "Admin rights required"),
        (status = 404, description = "No such company")
    ),
    security(("bearer" = []))
)]
pub async fn update_company_handler(
    State(use_case): State<Arc<UpdateCompanyUseCase>>,
    Path(handle): Path<String>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let Json(changes) = body?;
    let company = use_case.execute(&handle, &changes).await?;
    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{handle}
#[utoipa::path(
    delete,
    path = "/companies/{handle}",
    tag = "companies",
    params(("handle" = String, Path, description = "Company handle")),
    responses(
        (status = 200, description = "Company deleted", body = DeletedResponse),
        (status = 401, description = "Admin rights required"),
        (status = 404, description = "No such company")
    ),
    security(("bearer" = []))
)]
pub async fn delete_company_handler(
    State(use_case): State<Arc<DeleteCompanyUseCase>>,
    Path(handle): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    use_case.execute(&handle).await?;
    Ok(Json(DeletedResponse { deleted: handle }))
}
