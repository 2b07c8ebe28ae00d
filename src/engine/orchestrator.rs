//! Engine entry point: one message in, one [`ChatTurn`] out.

use rusqlite::Connection;

use crate::db;
use crate::models::{HealthTip, UserAccount};

use super::translate::{BestEffort, Translate};
use super::types::ChatTurn;
use super::{compose, language, matcher, EngineError};

/// Where the engine reads its tip library from.
pub trait TipSource {
    fn list_all(&self) -> Result<Vec<HealthTip>, EngineError>;
}

/// Tip library backed by the SQLite store.
pub struct SqliteTipStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteTipStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl TipSource for SqliteTipStore<'_> {
    fn list_all(&self) -> Result<Vec<HealthTip>, EngineError> {
        Ok(db::list_tips(self.conn)?)
    }
}

/// Fixed tip library held in memory, for tests and demos.
pub struct InMemoryTipStore {
    tips: Vec<HealthTip>,
}

impl InMemoryTipStore {
    pub fn new(tips: Vec<HealthTip>) -> Self {
        Self { tips }
    }
}

impl TipSource for InMemoryTipStore {
    fn list_all(&self) -> Result<Vec<HealthTip>, EngineError> {
        Ok(self.tips.clone())
    }
}

/// Runs the full advice pipeline for one message: detect the language,
/// match tips against the library, compose the reply.
pub struct AdviceEngine<'a, S: TipSource, T: Translate> {
    tips: &'a S,
    translator: &'a BestEffort<T>,
}

impl<'a, S: TipSource, T: Translate> AdviceEngine<'a, S, T> {
    pub fn new(tips: &'a S, translator: &'a BestEffort<T>) -> Self {
        Self { tips, translator }
    }

    /// Produce the reply for one user message. The engine keeps no
    /// per-user state, so the same message always yields the same turn.
    pub fn respond(&self, message: &str, user: &UserAccount) -> Result<ChatTurn, EngineError> {
        let lang = language::detect_language(message);
        let tips = self.tips.list_all()?;
        let matches = matcher::match_tips(message, &tips);

        tracing::debug!(
            language = lang.as_str(),
            tip_count = tips.len(),
            match_count = matches.len(),
            "composing advice"
        );

        let response = compose::compose_response(message, &matches, &lang, user, self.translator);

        Ok(ChatTurn {
            input_text: message.to_string(),
            language: lang,
            matches,
            response,
        })
    }
}
