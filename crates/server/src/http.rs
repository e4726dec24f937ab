//! HTTP routes and handlers

use axum::extract::{Multipart, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use farmwise_config::ServerConfig;
use farmwise_core::{normalize_language, Language};
use farmwise_speech::TRANSCRIPTION_ERROR;

use crate::chat::{process_message, ChatOutcome};
use crate::state::AppState;
use crate::ServerError;

/// Request body for `POST /chat/`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: Option<String>,
    pub text: String,
    pub lang: Option<String>,
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let audio_dir = state.settings.speech.audio_dir.clone();
    let cors = build_cors_layer(&state.settings.server);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/chat/", post(chat))
        .route("/voice_chat/", post(voice_chat))
        .nest_service("/audio_responses", ServeDir::new(audio_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    if !config.cors_enabled {
        return CorsLayer::new();
    }
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to FarmWise AI 💰📊" }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatOutcome>, ServerError> {
    if request.text.trim().is_empty() {
        return Err(ServerError::InvalidRequest("No text provided.".to_string()));
    }
    let user_id = request.user_id.as_deref().unwrap_or("guest");
    let outcome = process_message(&state, &request.text, user_id, request.lang.as_deref()).await;
    Ok(Json(outcome))
}

async fn voice_chat(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ChatOutcome>, ServerError> {
    let mut audio: Option<Vec<u8>> = None;
    let mut user_id: Option<String> = None;
    let mut text_override: Option<String> = None;
    let mut lang: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ServerError::InvalidRequest(e.to_string()))?;
                audio = Some(bytes.to_vec());
            }
            Some("user_id") => {
                user_id = field.text().await.ok().filter(|s| !s.trim().is_empty());
            }
            Some("text_override") => {
                text_override = field.text().await.ok().filter(|s| !s.trim().is_empty());
            }
            Some("lang") => {
                lang = field.text().await.ok().filter(|s| !s.trim().is_empty());
            }
            _ => {}
        }
    }

    let user_text = match (text_override, audio) {
        (Some(text), _) => text,
        (None, Some(audio)) => transcribe_audio(&state, &audio, lang.as_deref()).await?,
        (None, None) => {
            return Err(ServerError::InvalidRequest(
                "No input provided. Provide text_override or file.".to_string(),
            ));
        }
    };

    let user_id = user_id.as_deref().unwrap_or("guest");
    let outcome = process_message(&state, &user_text, user_id, lang.as_deref()).await;
    Ok(Json(outcome))
}

/// Transcribe uploaded audio, retrying once without a language hint
///
/// The hint narrows the decoder to the caller's language; some
/// recordings transcribe better unconstrained, so a failed or empty
/// hinted pass falls back to an unhinted one before giving up with a
/// fixed sentinel.
async fn transcribe_audio(
    state: &AppState,
    audio: &[u8],
    lang: Option<&str>,
) -> Result<String, ServerError> {
    let stt = state.stt.as_ref().ok_or(ServerError::SttUnavailable)?;

    let iso_hint = Language::from_canonical(&normalize_language(lang))
        .map(|l| l.iso_code())
        .unwrap_or("en");

    let first = stt.transcribe(audio, Some(iso_hint)).await;
    let needs_retry = match &first {
        Ok(text) => text.trim().is_empty() || text.contains("Error transcribing"),
        Err(e) => {
            warn!(error = %e, hint = iso_hint, "hinted transcription failed, retrying without hint");
            true
        }
    };
    if !needs_retry {
        return Ok(first.unwrap_or_default());
    }

    match stt.transcribe(audio, None).await {
        Ok(text) if !text.trim().is_empty() => Ok(text),
        Ok(_) => Ok(TRANSCRIPTION_ERROR.to_string()),
        Err(e) => {
            warn!(error = %e, "unhinted transcription failed");
            Ok(TRANSCRIPTION_ERROR.to_string())
        }
    }
}
