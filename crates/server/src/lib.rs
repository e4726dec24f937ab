//! FarmWise HTTP server
//!
//! REST endpoints for text chat and voice chat, plus static serving
//! of synthesized audio.

pub mod chat;
pub mod http;
pub mod state;

pub use chat::{process_message, ChatOutcome};
pub use http::create_router;
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Server errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Speech-to-text is not configured")]
    SttUnavailable,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::SttUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        };
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
