use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_and_respond;
use crate::application::dto::{
    AppliedResponse, CreateUserRequest, CreatedUserResponse, DeletedResponse, UserDetailResponse,
    UserResponse, UsersResponse,
};
use crate::application::use_cases::{
    ApplyToJobUseCase, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdateUserUseCase,
};

/// POST /users
/// Admin-only; unlike registration it may create admins
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "Invalid user data"),
        (status = 401, description = "Admin rights required"),
        (status = 409, description = "Duplicate username")
    ),
    security(("bearer" = []))
)]
pub async fn create_user_handler(
    State(use_case): State<Arc<CreateUserUseCase>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), ApiError> {
    let Json(request) = body?;
    validate_and_respond(&request)?;

    let (user, token) = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(CreatedUserResponse { user, token })))
}

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users ordered by username", body = UsersResponse),
        (status = 401, description = "Admin rights required")
    ),
    security(("bearer" = []))
)]
pub async fn list_users_handler(
    State(use_case): State<Arc<ListUsersUseCase>>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = use_case.execute().await?;
    Ok(Json(UsersResponse { users }))
}

/// GET /users/{username}
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User with applied job ids", body = UserDetailResponse),
        (status = 401, description = "Same user or admin required"),
        (status = 404, description = "No such user")
    ),
    security(("bearer" = []))
)]
pub async fn get_user_handler(
    State(use_case): State<Arc<GetUserUseCase>>,
    Path(username): Path<String>,
) -> Result<Json<UserDetailResponse>, ApiError> {
    let user = use_case.execute(&username).await?;
    Ok(Json(UserDetailResponse { user }))
}

/// PATCH /users/{username}
/// Accepts any of `firstName`, `lastName`, `email`, `password`
#[utoipa::path(
    patch,
    path = "/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    request_body = Object,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Empty, unknown or invalid fields"),
        (status = 401, description = "Same user or admin required"),
        (status = 404, description = "No such user")
    ),
    security(("bearer" = []))
)]
pub async fn update_user_handler(
    State(use_case): State<Arc<UpdateUserUseCase>>,
    Path(username): Path<String>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(changes) = body?;
    let user = use_case.execute(&username, &changes).await?;
    Ok(Json(UserResponse { user }))
}

/// DELETE /users/{username}
#[utoipa::path(
    delete,
    path = "/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User deleted", body = DeletedResponse),
        (status = 401, description = "Same user or admin required"),
        (status = 404, description = "No such user")
    ),
    security(("bearer" = []))
)]
pub async fn delete_user_handler(
    State(use_case): State<Arc<DeleteUserUseCase>>,
    Path(username): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    use_case.execute(&username).await?;
    Ok(Json(DeletedResponse { deleted: username }))
}

/// POST /users/{username}/jobs/{id}
#[utoipa::path(
    post,
    path = "/users/{username}/jobs/{id}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username"),
        ("id" = i32, Path, description = "Job id")
    ),
    responses(
        (status = 201, description = "Application recorded", body = AppliedResponse),
        (status = 401, description = "Same user or admin required"),
        (status = 404, description = "No such user or job"),
        (status = 409, description = "Already applied")
    ),
    security(("bearer" = []))
)]
pub async fn apply_handler(
    State(use_case): State<Arc<ApplyToJobUseCase>>,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<(StatusCode, Json<AppliedResponse>), ApiError> {
    let Path((username, job_id)) = path?;
    let application = use_case.execute(&username, job_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(AppliedResponse {
            applied: application.job_id,
        }),
    ))
}
