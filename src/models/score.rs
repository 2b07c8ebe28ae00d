use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A daily wellness score (0-100) with an optional free-text note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScore {
    pub id: Uuid,
    pub user_id: Uuid,
    pub score: u8,
    pub date: NaiveDate,
    pub notes: Option<String>,
}
