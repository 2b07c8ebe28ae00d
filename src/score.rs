//! Wellness score: a rough self-reported health number derived from
//! age and recently reported symptoms, tracked over time for the
//! progression chart.

use chrono::{Local, NaiveDate};
use rusqlite::Connection;
use serde::Serialize;
use uuid::Uuid;

use crate::db::{self, DatabaseError};
use crate::models::{HealthScore, UserAccount};

const BASE_SCORE: i32 = 80;
const YOUNG_AGE_BONUS: i32 = 5;
const SENIOR_AGE_PENALTY: i32 = 5;
const PER_SYMPTOM_PENALTY: i32 = 2;

/// Compute the wellness score: 80 base, +5 under age 30, -5 over age
/// 60, -2 per recent symptom, clamped to 0..=100.
pub fn calculate_health_score(user: &UserAccount, recent_symptoms: &[String]) -> u8 {
    let mut score = BASE_SCORE;

    if user.age < 30 {
        score += YOUNG_AGE_BONUS;
    } else if user.age > 60 {
        score -= SENIOR_AGE_PENALTY;
    }

    score -= PER_SYMPTOM_PENALTY * recent_symptoms.len() as i32;
    score.clamp(0, 100) as u8
}

/// Persist today's score for the user.
pub fn record_score(
    conn: &Connection,
    user: &UserAccount,
    score: u8,
    notes: Option<&str>,
) -> Result<HealthScore, DatabaseError> {
    let entry = HealthScore {
        id: Uuid::new_v4(),
        user_id: user.id,
        score,
        date: Local::now().date_naive(),
        notes: notes.map(str::to_string),
    };
    db::insert_score(conn, &entry)?;

    tracing::info!(user_id = %user.id, score, "health score recorded");
    Ok(entry)
}

/// Date and score vectors for the progression chart, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSeries {
    pub dates: Vec<NaiveDate>,
    pub scores: Vec<u8>,
}

/// The user's last `limit` scores, reshaped chronologically for
/// charting. Rendering is the caller's concern.
pub fn score_series(
    conn: &Connection,
    user: &UserAccount,
    limit: u32,
) -> Result<ScoreSeries, DatabaseError> {
    let mut recent = db::scores_for_user(conn, &user.id, limit)?;
    recent.reverse();

    Ok(ScoreSeries {
        dates: recent.iter().map(|s| s.date).collect(),
        scores: recent.iter().map(|s| s.score).collect(),
    })
}
