use serde::{Deserialize, Serialize};

use crate::models::enums::Language;
use crate::models::HealthTip;

/// One tip surfaced for a chat message, with the keyword that matched.
/// A tip appears at most once per message even when several of its
/// keywords occur in the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipMatch {
    pub tip: HealthTip,
    pub keyword: String,
}

/// The engine's complete answer for one chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub input_text: String,
    pub language: Language,
    pub matches: Vec<TipMatch>,
    pub response: String,
}
