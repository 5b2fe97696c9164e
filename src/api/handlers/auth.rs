use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_and_respond;
use crate::application::dto::{LoginRequest, RegisterUserRequest, TokenResponse};
use crate::application::use_cases::{AuthenticateUserUseCase, CreateUserUseCase};

/// POST /auth/token
/// Exchange a username and password for a bearer token
#[utoipa::path(
    post,
    path = "/auth/token",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Malformed credentials"),
        (status = 401, description = "Invalid username/password")
    )
)]
pub async fn token_handler(
    State(use_case): State<Arc<AuthenticateUserUseCase>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(request) = body?;
    validate_and_respond(&request)?;

    let token = use_case.execute(request).await?;
    Ok(Json(TokenResponse { token }))
}

/// POST /auth/register
/// Self-registration; never creates an admin
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = TokenResponse),
        (status = 400, description = "Invalid user data"),
        (status = 409, description = "Duplicate username")
    )
)]
pub async fn register_handler(
    State(use_case): State<Arc<CreateUserUseCase>>,
    body: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let Json(request) = body?;
    validate_and_respond(&request)?;

    let (_, token) = use_case.execute(request.into()).await?;
    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}
