use chrono::NaiveDate;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::HealthScore;

pub fn insert_score(conn: &Connection, score: &HealthScore) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO health_scores (id, user_id, score, date, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            score.id.to_string(),
            score.user_id.to_string(),
            score.score,
            score.date.to_string(),
            score.notes,
        ],
    )?;
    Ok(())
}

/// A user's most recent scores, newest first.
pub fn scores_for_user(
    conn: &Connection,
    user_id: &Uuid,
    limit: u32,
) -> Result<Vec<HealthScore>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, score, date, notes FROM health_scores
         WHERE user_id = ?1 ORDER BY date DESC, rowid DESC LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![user_id.to_string(), limit], score_row)?;

    let mut scores = Vec::new();
    for row in rows {
        scores.push(score_from_row(row?)?);
    }
    Ok(scores)
}

/// Latest scores across all users, newest first (admin reporting).
pub fn recent_scores(conn: &Connection, limit: u32) -> Result<Vec<HealthScore>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, score, date, notes FROM health_scores
         ORDER BY date DESC, rowid DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], score_row)?;

    let mut scores = Vec::new();
    for row in rows {
        scores.push(score_from_row(row?)?);
    }
    Ok(scores)
}

pub fn count_scores(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM health_scores", [], |row| row.get(0))?;
    Ok(count)
}

struct ScoreRow {
    id: String,
    user_id: String,
    score: u8,
    date: String,
    notes: Option<String>,
}

fn score_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScoreRow> {
    Ok(ScoreRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        score: row.get(2)?,
        date: row.get(3)?,
        notes: row.get(4)?,
    })
}

fn score_from_row(row: ScoreRow) -> Result<HealthScore, DatabaseError> {
    Ok(HealthScore {
        id: Uuid::parse_str(&row.id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        user_id: Uuid::parse_str(&row.user_id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        score: row.score,
        date: NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").unwrap_or_default(),
        notes: row.notes,
    })
}
