//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` body used for greetings and confirmations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
