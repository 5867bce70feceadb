//! Bearer identity middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Resolve the caller from an optional bearer token.
///
/// Without an `Authorization` header the request continues anonymously.
/// With one, it must carry a valid bearer token; the resolved
/// [`Identity`](crate::domain::Identity) is stored in the request
/// extensions for handlers that need it.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(header) = request.headers().get(AUTHORIZATION).cloned() else {
        return Ok(next.run(request).await);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::to_owned)
        .ok_or(AppError::Unauthorized)?;

    let identity = state.identity_service.resolve(&token).await?;
    tracing::debug!(admin_id = %identity.id, "request identity resolved");

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
