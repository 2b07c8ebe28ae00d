use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::Language;
use crate::models::UserAccount;

pub fn insert_user(conn: &Connection, user: &UserAccount) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO users (id, email, name, age, location, language, is_admin, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            user.id.to_string(),
            user.email,
            user.name,
            user.age,
            user.location,
            user.language.as_str(),
            user.is_admin,
            user.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_user(conn: &Connection, id: &Uuid) -> Result<Option<UserAccount>, DatabaseError> {
    query_one_user(
        conn,
        "SELECT id, email, name, age, location, language, is_admin, created_at
         FROM users WHERE id = ?1",
        &id.to_string(),
    )
}

pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<UserAccount>, DatabaseError> {
    query_one_user(
        conn,
        "SELECT id, email, name, age, location, language, is_admin, created_at
         FROM users WHERE email = ?1",
        email,
    )
}

/// Update the editable profile fields. Email and admin flag are fixed.
pub fn update_user_profile(
    conn: &Connection,
    id: &Uuid,
    name: &str,
    age: u32,
    location: &str,
    language: &Language,
) -> Result<(), DatabaseError> {
    let updated = conn.execute(
        "UPDATE users SET name = ?2, age = ?3, location = ?4, language = ?5 WHERE id = ?1",
        params![id.to_string(), name, age, location, language.as_str()],
    )?;

    if updated == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "user".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}

pub fn count_non_admin_users(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE is_admin = 0",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

pub fn list_non_admin_users(conn: &Connection) -> Result<Vec<UserAccount>, DatabaseError> {
    query_users(
        conn,
        "SELECT id, email, name, age, location, language, is_admin, created_at
         FROM users WHERE is_admin = 0 ORDER BY rowid ASC",
        None,
    )
}

/// Most recently registered non-admin accounts, newest first.
pub fn recent_users(conn: &Connection, limit: u32) -> Result<Vec<UserAccount>, DatabaseError> {
    query_users(
        conn,
        "SELECT id, email, name, age, location, language, is_admin, created_at
         FROM users WHERE is_admin = 0 ORDER BY created_at DESC, rowid DESC LIMIT ?1",
        Some(limit),
    )
}

fn query_one_user(
    conn: &Connection,
    sql: &str,
    key: &str,
) -> Result<Option<UserAccount>, DatabaseError> {
    let result = conn.query_row(sql, params![key], |row| {
        Ok(UserRow {
            id: row.get(0)?,
            email: row.get(1)?,
            name: row.get(2)?,
            age: row.get(3)?,
            location: row.get(4)?,
            language: row.get(5)?,
            is_admin: row.get(6)?,
            created_at: row.get(7)?,
        })
    });

    match result {
        Ok(row) => Ok(Some(user_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn query_users(
    conn: &Connection,
    sql: &str,
    limit: Option<u32>,
) -> Result<Vec<UserAccount>, DatabaseError> {
    let mut stmt = conn.prepare(sql)?;

    let map_row = |row: &rusqlite::Row<'_>| {
        Ok(UserRow {
            id: row.get(0)?,
            email: row.get(1)?,
            name: row.get(2)?,
            age: row.get(3)?,
            location: row.get(4)?,
            language: row.get(5)?,
            is_admin: row.get(6)?,
            created_at: row.get(7)?,
        })
    };

    let rows = match limit {
        Some(limit) => stmt.query_map(params![limit], map_row)?,
        None => stmt.query_map([], map_row)?,
    };

    let mut users = Vec::new();
    for row in rows {
        users.push(user_from_row(row?)?);
    }
    Ok(users)
}

struct UserRow {
    id: String,
    email: String,
    name: String,
    age: u32,
    location: String,
    language: String,
    is_admin: bool,
    created_at: String,
}

fn user_from_row(row: UserRow) -> Result<UserAccount, DatabaseError> {
    Ok(UserAccount {
        id: Uuid::parse_str(&row.id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        email: row.email,
        name: row.name,
        age: row.age,
        location: row.location,
        language: Language::from_str(&row.language)?,
        is_admin: row.is_admin,
        created_at: NaiveDateTime::parse_from_str(&row.created_at, "%Y-%m-%d %H:%M:%S")
            .unwrap_or_default(),
    })
}
