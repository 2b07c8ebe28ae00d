use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::TipCategory;
use crate::models::HealthTip;

pub fn insert_tip(conn: &Connection, tip: &HealthTip) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO health_tips (id, title, content, category, symptoms, created_at, created_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            tip.id.to_string(),
            tip.title,
            tip.content,
            tip.category.as_str(),
            tip.symptoms,
            tip.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            tip.created_by.map(|id| id.to_string()),
        ],
    )?;
    Ok(())
}

pub fn get_tip(conn: &Connection, id: &Uuid) -> Result<Option<HealthTip>, DatabaseError> {
    let result = conn.query_row(
        "SELECT id, title, content, category, symptoms, created_at, created_by
         FROM health_tips WHERE id = ?1",
        params![id.to_string()],
        |row| {
            Ok(TipRow {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                category: row.get(3)?,
                symptoms: row.get(4)?,
                created_at: row.get(5)?,
                created_by: row.get(6)?,
            })
        },
    );

    match result {
        Ok(row) => Ok(Some(tip_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List the whole tip library in insertion order. The matcher walks this
/// list as-is, so insertion order is also the order of matched advice.
pub fn list_tips(conn: &Connection) -> Result<Vec<HealthTip>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, content, category, symptoms, created_at, created_by
         FROM health_tips ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(TipRow {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            category: row.get(3)?,
            symptoms: row.get(4)?,
            created_at: row.get(5)?,
            created_by: row.get(6)?,
        })
    })?;

    let mut tips = Vec::new();
    for row in rows {
        tips.push(tip_from_row(row?)?);
    }
    Ok(tips)
}

pub fn update_tip(conn: &Connection, tip: &HealthTip) -> Result<(), DatabaseError> {
    let updated = conn.execute(
        "UPDATE health_tips SET title = ?2, content = ?3, category = ?4, symptoms = ?5
         WHERE id = ?1",
        params![
            tip.id.to_string(),
            tip.title,
            tip.content,
            tip.category.as_str(),
            tip.symptoms,
        ],
    )?;

    if updated == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "health_tip".into(),
            id: tip.id.to_string(),
        });
    }
    Ok(())
}

pub fn delete_tip(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    let deleted = conn.execute(
        "DELETE FROM health_tips WHERE id = ?1",
        params![id.to_string()],
    )?;

    if deleted == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "health_tip".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}

pub fn count_tips(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM health_tips", [], |row| row.get(0))?;
    Ok(count)
}

struct TipRow {
    id: String,
    title: String,
    content: String,
    category: String,
    symptoms: Option<String>,
    created_at: String,
    created_by: Option<String>,
}

fn tip_from_row(row: TipRow) -> Result<HealthTip, DatabaseError> {
    Ok(HealthTip {
        id: Uuid::parse_str(&row.id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        title: row.title,
        content: row.content,
        category: TipCategory::from_str(&row.category)?,
        symptoms: row.symptoms,
        created_at: NaiveDateTime::parse_from_str(&row.created_at, "%Y-%m-%d %H:%M:%S")
            .unwrap_or_default(),
        created_by: row
            .created_by
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
    })
}
