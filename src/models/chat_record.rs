use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored chat exchange: the user's message and the composed reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub response: String,
    pub timestamp: NaiveDateTime,
}
