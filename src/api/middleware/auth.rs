use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::application::ports::TokenService;

/// Attach the caller's `UserContext` when a valid bearer token is present.
///
/// Never rejects: a missing or invalid token just leaves the request anonymous,
/// and the route guards decide what anonymous callers may do.
pub async fn auth_middleware(
    State(tokens): State<Arc<dyn TokenService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = bearer_token(request.headers()).and_then(|token| match tokens.verify(token) {
        Ok(context) => Some(context),
        Err(e) => {
            debug!(error = %e, "Ignoring invalid bearer token");
            None
        }
    });

    if let Some(context) = context {
        request.extensions_mut().insert(context);
    }

    next.run(request).await
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
