//! Arogya: the advice core of a bilingual health chatbot.
//!
//! Users describe symptoms in English or Hindi; the engine matches
//! them against a stored tip library and composes a single-tip or
//! merged multi-symptom response, always closed by a safety
//! disclaimer. Around the engine sit the SQLite persistence layer and
//! the chat, score, emergency, wellness and analytics services the
//! external web layer calls into.

pub mod config;
pub mod models;
pub mod db;
pub mod engine;
pub mod chat;
pub mod score;
pub mod emergency;
pub mod wellness;
pub mod analytics;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application. Honors `RUST_LOG`
/// when set, otherwise falls back to the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
