//! FarmWise server entry point
//!
//! Loads configuration, wires the LLM, speech, and persistence
//! collaborators into shared state, and serves the HTTP API with
//! graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use farmwise_config::{load_settings, Settings};
use farmwise_core::{ConversationStore, InteractionLog, SpeechToText, TextToSpeech};
use farmwise_llm::{GroqBackend, LlmConfig};
use farmwise_persistence::{FileConversationStore, FileInteractionLog, InMemoryConversationStore};
use farmwise_server::{create_router, AppState};
use farmwise_speech::{NeuralTts, SttConfig, TtsConfig, WhisperStt};
use farmwise_tips::TipSelector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("FARMWISE_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!(
                "Loaded configuration (env: {})",
                env.as_deref().unwrap_or("default")
            );
            settings
        }
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };
    config.validate()?;

    init_tracing(&config);

    tracing::info!("Starting FarmWise server v{}", env!("CARGO_PKG_VERSION"));

    let api_key = std::env::var("GROQ_API_KEY").ok();
    if api_key.is_none() {
        tracing::warn!(
            "GROQ_API_KEY is not set; LLM and transcription requests will be rejected upstream"
        );
    }

    let llm = Arc::new(GroqBackend::new(LlmConfig {
        model: config.llm.model.clone(),
        endpoint: config.llm.endpoint.clone(),
        api_key: api_key.clone(),
        max_tokens: config.llm.max_tokens,
        temperature: config.llm.temperature,
        timeout: Duration::from_secs(config.llm.timeout_secs),
        ..LlmConfig::default()
    })?);
    tracing::info!(model = %config.llm.model, "LLM backend initialized");

    let (stt, tts): (Option<Arc<dyn SpeechToText>>, Option<Arc<dyn TextToSpeech>>) =
        if config.speech.enabled {
            let stt = WhisperStt::new(SttConfig {
                model: config.speech.stt_model.clone(),
                endpoint: config.speech.stt_endpoint.clone(),
                api_key: api_key.clone(),
                ..SttConfig::default()
            })?;
            let tts = NeuralTts::new(TtsConfig {
                model: config.speech.tts_model.clone(),
                endpoint: config.speech.tts_endpoint.clone(),
                audio_dir: config.speech.audio_dir.clone().into(),
                ..TtsConfig::default()
            })?;
            tracing::info!(
                stt_model = %config.speech.stt_model,
                tts_endpoint = %config.speech.tts_endpoint,
                "Speech pipeline initialized"
            );
            (Some(Arc::new(stt)), Some(Arc::new(tts)))
        } else {
            tracing::info!("Speech pipeline disabled, text chat only");
            (None, None)
        };

    let store: Arc<dyn ConversationStore> = match FileConversationStore::new(&config.memory.path) {
        Ok(store) => {
            tracing::info!(path = %config.memory.path, "Conversation memory initialized");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!(
                "Failed to open conversation memory: {}. Falling back to in-memory.",
                e
            );
            Arc::new(InMemoryConversationStore::new())
        }
    };

    let log: Arc<dyn InteractionLog> = Arc::new(FileInteractionLog::new(&config.memory.log_path)?);

    let tips = TipSelector::new();
    tracing::info!("Topic model built");

    let port = config.server.port;
    let state = AppState::new(config, tips, llm, stt, tts, store, log);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("farmwise={},tower_http=debug", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
