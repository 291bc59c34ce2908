//! Cross-origin gate.
//!
//! Runs ahead of the CORS layer. Requests declaring an origin outside the
//! allow-list are rejected here and never reach a handler or receive
//! `access-control-*` headers.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use movies_core::error::CoreError;
use movies_core::origin::{OriginDecision, OriginPolicy};

use crate::error::AppError;
use crate::state::AppState;

/// Reject requests from origins the policy blocks.
pub async fn origin_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = blocked_origin(&state.origin_policy, request.headers()) {
        tracing::warn!(
            %origin,
            method = %request.method(),
            path = %request.uri().path(),
            "Blocked cross-origin request",
        );
        return Err(AppError::Core(CoreError::OriginNotAllowed(origin)));
    }

    Ok(next.run(request).await)
}

/// The declared origin, if present and not allowed.
///
/// An `Origin` header that is not valid visible ASCII can never match the
/// allow-list and is blocked.
fn blocked_origin(policy: &OriginPolicy, headers: &HeaderMap) -> Option<String> {
    let value = headers.get(ORIGIN)?;
    let Ok(origin) = value.to_str() else {
        return Some(String::from_utf8_lossy(value.as_bytes()).into_owned());
    };
    match policy.decide(Some(origin)) {
        OriginDecision::Allowed => None,
        OriginDecision::Blocked => Some(origin.to_string()),
    }
}
