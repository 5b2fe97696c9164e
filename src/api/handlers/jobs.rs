use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_and_respond;
use crate::application::dto::{CreateJobRequest, DeletedJobResponse, JobResponse, JobsResponse};
use crate::application::use_cases::{
    CreateJobUseCase, DeleteJobUseCase, GetJobUseCase, ListJobsUseCase, UpdateJobUseCase,
};

/// POST /jobs
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 400, description = "Invalid job data"),
        (status = 401, description = "Admin rights required"),
        (status = 404, description = "No such company")
    ),
    security(("bearer" = []))
)]
pub async fn create_job_handler(
    State(use_case): State<Arc<CreateJobUseCase>>,
    body: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JobResponse>), ApiError> {
    let Json(request) = body?;
    validate_and_respond(&request)?;

    let job = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}

/// GET /jobs
/// Lists all jobs, or those matching `title`, `minSalary` and `hasEquity`
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    params(
        ("title" = Option<String>, Query, description = "Case-insensitive substring of the title"),
        ("minSalary" = Option<i32>, Query, description = "Minimum salary"),
        ("hasEquity" = Option<bool>, Query, description = "Only jobs with non-zero equity when true")
    ),
    responses(
        (status = 200, description = "Jobs ordered by title", body = JobsResponse),
        (status = 400, description = "Unknown or invalid filter field")
    )
)]
pub async fn list_jobs_handler(
    State(use_case): State<Arc<ListJobsUseCase>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<JobsResponse>, ApiError> {
    let Query(pairs) = query?;
    let jobs = use_case.execute(&pairs).await?;
    Ok(Json(JobsResponse { jobs }))
}

/// GET /jobs/{id}
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job", body = JobResponse),
        (status = 404, description = "No such job")
    )
)]
pub async fn get_job_handler(
    State(use_case): State<Arc<GetJobUseCase>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<JobResponse>, ApiError> {
    let Path(id) = id?;
    let job = use_case.execute(id).await?;
    Ok(Json(JobResponse { job }))
}

/// PATCH /jobs/{id}
/// Accepts any of `title`, `salary`, `equity`
#[utoipa::path(
    patch,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    request_body = Object,
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 400, description = "Empty, unknown or invalid fields"),
        (status = 401, description = "Admin rights required"),
        (status = 404, description = "No such job")
    ),
    security(("bearer" = []))
)]
pub async fn update_job_handler(
    State(use_case): State<Arc<UpdateJobUseCase>>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<JobResponse>, ApiError> {
    let Path(id) = id?;
    let Json(changes) = body?;
    let job = use_case.execute(id, &changes).await?;
    Ok(Json(JobResponse { job }))
}

/// DELETE /jobs/{id}
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job deleted", body = DeletedJobResponse),
        (status = 401, description = "Admin rights required"),
        (status = 404, description = "No such job")
    ),
    security(("bearer" = []))
)]
pub async fn delete_job_handler(
    State(use_case): State<Arc<DeleteJobUseCase>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedJobResponse>, ApiError> {
    let Path(id) = id?;
    use_case.execute(id).await?;
    Ok(Json(DeletedJobResponse { deleted: id }))
}
