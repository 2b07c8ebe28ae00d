use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::TipCategory;

/// An advice entry from the tip library. `symptoms` holds the
/// comma-separated keyword list matched against chat messages;
/// `None` means the tip is never surfaced by the matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthTip {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: TipCategory,
    pub symptoms: Option<String>,
    pub created_at: NaiveDateTime,
    pub created_by: Option<Uuid>,
}
