//! Route guards built on `AccessPolicy`; apply with `route_layer` after `auth_middleware`.

use std::collections::HashMap;

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};

use crate::api::errors::ApiError;
use crate::domain::authorization::{AccessPolicy, UserContext};

/// Only admins
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    AccessPolicy::Admin.check(request.extensions().get::<UserContext>(), None)?;
    Ok(next.run(request).await)
}

/// The user named by the `{username}` path segment, or an admin
pub async fn require_correct_user_or_admin(
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    AccessPolicy::CorrectUserOrAdmin.check(
        request.extensions().get::<UserContext>(),
        params.get("username").map(String::as_str),
    )?;
    Ok(next.run(request).await)
}
