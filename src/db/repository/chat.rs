use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::ChatRecord;

pub fn insert_chat_record(conn: &Connection, record: &ChatRecord) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO chat_records (id, user_id, message, response, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.id.to_string(),
            record.user_id.to_string(),
            record.message,
            record.response,
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        ],
    )?;
    Ok(())
}

/// A user's chat history, newest exchange first.
pub fn records_for_user(
    conn: &Connection,
    user_id: &Uuid,
    limit: u32,
) -> Result<Vec<ChatRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, message, response, timestamp FROM chat_records
         WHERE user_id = ?1 ORDER BY timestamp DESC, rowid DESC LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![user_id.to_string(), limit], record_row)?;

    let mut records = Vec::new();
    for row in rows {
        records.push(record_from_row(row?)?);
    }
    Ok(records)
}

/// Latest exchanges across all users, newest first (admin views).
pub fn recent_records(conn: &Connection, limit: u32) -> Result<Vec<ChatRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, message, response, timestamp FROM chat_records
         ORDER BY timestamp DESC, rowid DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], record_row)?;

    let mut records = Vec::new();
    for row in rows {
        records.push(record_from_row(row?)?);
    }
    Ok(records)
}

/// Delete one of the user's own exchanges. Returns false when the record
/// does not exist or belongs to someone else.
pub fn delete_chat_record(
    conn: &Connection,
    user_id: &Uuid,
    record_id: &Uuid,
) -> Result<bool, DatabaseError> {
    let deleted = conn.execute(
        "DELETE FROM chat_records WHERE id = ?1 AND user_id = ?2",
        params![record_id.to_string(), user_id.to_string()],
    )?;
    Ok(deleted > 0)
}

pub fn count_chat_records(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM chat_records", [], |row| row.get(0))?;
    Ok(count)
}

struct ChatRecordRow {
    id: String,
    user_id: String,
    message: String,
    response: String,
    timestamp: String,
}

fn record_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChatRecordRow> {
    Ok(ChatRecordRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        message: row.get(2)?,
        response: row.get(3)?,
        timestamp: row.get(4)?,
    })
}

fn record_from_row(row: ChatRecordRow) -> Result<ChatRecord, DatabaseError> {
    Ok(ChatRecord {
        id: Uuid::parse_str(&row.id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        user_id: Uuid::parse_str(&row.user_id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        message: row.message,
        response: row.response,
        timestamp: NaiveDateTime::parse_from_str(&row.timestamp, "%Y-%m-%d %H:%M:%S")
            .unwrap_or_default(),
    })
}
