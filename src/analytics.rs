//! Admin-facing aggregates: dashboard counters, recent-activity feeds,
//! and tabular report data. Rendering (PDF, CSV, charts) is external;
//! this module only prepares the numbers and rows.

use chrono::Local;
use rusqlite::Connection;
use serde::Serialize;

use crate::config;
use crate::db::{self, DatabaseError};
use crate::models::enums::ReportKind;
use crate::models::{ChatRecord, UserAccount};

pub const RECENT_USERS_LIMIT: u32 = 5;
pub const RECENT_CHATS_LIMIT: u32 = 10;
pub const REPORT_ROW_LIMIT: u32 = 50;

const CHAT_CELL_LIMIT: usize = 50;
const NOTES_CELL_LIMIT: usize = 30;

/// Headline counters for the admin dashboard. User counts exclude
/// administrator accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_chats: i64,
    pub total_health_scores: i64,
}

pub fn dashboard_stats(conn: &Connection) -> Result<DashboardStats, DatabaseError> {
    Ok(DashboardStats {
        total_users: db::count_non_admin_users(conn)?,
        total_chats: db::count_chat_records(conn)?,
        total_health_scores: db::count_scores(conn)?,
    })
}

/// Counters plus the newest users and chat records, the data behind
/// the analytics page.
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySnapshot {
    pub stats: DashboardStats,
    pub recent_users: Vec<UserAccount>,
    pub recent_chats: Vec<ChatRecord>,
}

pub fn activity_snapshot(conn: &Connection) -> Result<ActivitySnapshot, DatabaseError> {
    Ok(ActivitySnapshot {
        stats: dashboard_stats(conn)?,
        recent_users: db::recent_users(conn, RECENT_USERS_LIMIT)?,
        recent_chats: db::recent_records(conn, RECENT_CHATS_LIMIT)?,
    })
}

/// One report, ready for an external renderer: a title line, the
/// generation time, a header row and the data rows.
#[derive(Debug, Clone, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub generated_at: String,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub fn report_table(conn: &Connection, kind: &ReportKind) -> Result<ReportTable, DatabaseError> {
    let (label, header, rows) = match kind {
        ReportKind::Users => (
            "Users",
            vec!["ID", "Name", "Email", "Age", "Location", "Joined"],
            user_rows(conn)?,
        ),
        ReportKind::Chats => (
            "Chats",
            vec!["User ID", "Message", "Response", "Timestamp"],
            chat_rows(conn)?,
        ),
        ReportKind::Health => (
            "Health",
            vec!["User ID", "Score", "Date", "Notes"],
            health_rows(conn)?,
        ),
    };

    Ok(ReportTable {
        title: format!("{} - {} Report", config::APP_NAME, label),
        generated_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        header,
        rows,
    })
}

fn user_rows(conn: &Connection) -> Result<Vec<Vec<String>>, DatabaseError> {
    let users = db::list_non_admin_users(conn)?;
    Ok(users
        .into_iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.name,
                u.email,
                u.age.to_string(),
                u.location,
                u.created_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect())
}

fn chat_rows(conn: &Connection) -> Result<Vec<Vec<String>>, DatabaseError> {
    let records = db::recent_records(conn, REPORT_ROW_LIMIT)?;
    Ok(records
        .into_iter()
        .map(|r| {
            vec![
                r.user_id.to_string(),
                truncate_cell(&r.message, CHAT_CELL_LIMIT),
                truncate_cell(&r.response, CHAT_CELL_LIMIT),
                r.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect())
}

fn health_rows(conn: &Connection) -> Result<Vec<Vec<String>>, DatabaseError> {
    let scores = db::recent_scores(conn, REPORT_ROW_LIMIT)?;
    Ok(scores
        .into_iter()
        .map(|s| {
            let notes = match s.notes.as_deref() {
                Some(n) if !n.is_empty() => truncate_cell(n, NOTES_CELL_LIMIT),
                _ => "N/A".to_string(),
            };
            vec![
                s.user_id.to_string(),
                s.score.to_string(),
                s.date.format("%Y-%m-%d").to_string(),
                notes,
            ]
        })
        .collect())
}

/// Shorten a cell to `max_chars` characters with a trailing ellipsis.
/// Counts characters, not bytes, so Devanagari text never splits
/// mid-character.
fn truncate_cell(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
