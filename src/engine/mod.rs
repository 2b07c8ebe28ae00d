//! The advice engine: language detection, symptom matching, response
//! composition, and best-effort translation of tip content.
//!
//! The engine is pure with respect to chat history: it reads the tip
//! library through [`TipSource`] and returns a [`ChatTurn`]; persisting
//! the exchange is the chat service's job.

pub mod canned;
pub mod compose;
pub mod language;
pub mod matcher;
pub mod orchestrator;
pub mod translate;
pub mod types;

pub use orchestrator::{AdviceEngine, InMemoryTipStore, SqliteTipStore, TipSource};
pub use types::{ChatTurn, TipMatch};

use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Repository error: {0}")]
    Repository(#[from] DatabaseError),
}
