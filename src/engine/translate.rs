//! Best-effort translation of tip content into Hindi.
//!
//! Translation is an optional capability: the engine works fully without
//! it, and any failure falls back to the stored English text. Responses
//! therefore degrade to mixed-language output rather than errors.

use std::cell::Cell;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Cannot reach translation service at {0}")]
    Connection(String),

    #[error("Translation service error: HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Failed to parse translation response: {0}")]
    ResponseParsing(String),
}

/// A backend that turns one English sentence fragment into Hindi.
pub trait Translate {
    fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

// ── Best-effort wrapper ─────────────────────────────────────

/// Wraps an optional [`Translate`] backend with the fallback policy:
/// no backend, or any error on any fragment, yields the original text
/// unchanged. Partial translations are never stitched together.
pub struct BestEffort<T: Translate> {
    backend: Option<T>,
}

impl<T: Translate> BestEffort<T> {
    pub fn new(backend: T) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A wrapper with no backend; every call returns the original text.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&T> {
        self.backend.as_ref()
    }

    /// Translate sentence by sentence, rejoining with single spaces.
    /// Returns the input unchanged when translation is unavailable or
    /// any fragment fails.
    pub fn translate_or_original(&self, text: &str) -> String {
        let Some(backend) = &self.backend else {
            return text.to_string();
        };

        let fragments = split_sentences(text);
        if fragments.is_empty() {
            return text.to_string();
        }

        let mut translated = Vec::with_capacity(fragments.len());
        for fragment in &fragments {
            match backend.translate(fragment) {
                Ok(hindi) => translated.push(hindi),
                Err(e) => {
                    tracing::debug!(error = %e, "Translation failed, keeping original text");
                    return text.to_string();
                }
            }
        }

        translated.join(" ")
    }
}

/// Split text into sentence fragments on ASCII terminators and the
/// Devanagari danda. Runs of terminators count as one boundary; empty
/// fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let boundary = Regex::new(r"[.!?।]+").unwrap();
    boundary
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

// ── HTTP backend ────────────────────────────────────────────

/// LibreTranslate-compatible HTTP client (`POST {base}/translate`).
pub struct HttpTranslator {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpTranslator {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default local instance at localhost:5000.
    pub fn default_local() -> Self {
        Self::new(config::DEFAULT_TRANSLATE_URL, config::TRANSLATE_TIMEOUT_SECS)
    }

    /// Endpoint from `AROGYA_TRANSLATE_URL`, or the local default.
    pub fn from_env() -> Self {
        match std::env::var(config::TRANSLATE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                Self::new(url.trim(), config::TRANSLATE_TIMEOUT_SECS)
            }
            _ => Self::default_local(),
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl Translate for HttpTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.base_url);
        let body = TranslateRequest {
            q: text,
            source: "en",
            target: "hi",
            format: "text",
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                TranslateError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                TranslateError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                TranslateError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TranslateError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .map_err(|e| TranslateError::ResponseParsing(e.to_string()))?;

        Ok(parsed.translated_text)
    }
}

// ── Mock backend ────────────────────────────────────────────

/// Mock translator for testing: wraps each fragment in guillemets, or
/// fails every call when constructed with [`MockTranslator::failing`].
pub struct MockTranslator {
    fail: bool,
    calls: Cell<u32>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Cell::new(0),
        }
    }

    /// Number of translate calls received so far.
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translate for MockTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(TranslateError::Connection("mock".into()));
        }
        Ok(format!("«{text}»"))
    }
}
