//! Chat service: answer a user message through the advice engine and
//! persist the exchange to the user's history.

use chrono::Local;
use rusqlite::Connection;
use thiserror::Error;
use uuid::Uuid;

use crate::db::{self, DatabaseError};
use crate::engine::translate::{BestEffort, Translate};
use crate::engine::{AdviceEngine, ChatTurn, EngineError, SqliteTipStore};
use crate::models::{ChatRecord, UserAccount};

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Answer one user message and record the exchange.
///
/// Translation is best-effort, so an unreachable translator never
/// loses the turn: the reply falls back to the stored English content
/// and is persisted all the same.
pub fn handle_message<T: Translate>(
    conn: &Connection,
    translator: &BestEffort<T>,
    user: &UserAccount,
    message: &str,
) -> Result<ChatTurn, ChatError> {
    let store = SqliteTipStore::new(conn);
    let engine = AdviceEngine::new(&store, translator);
    let turn = engine.respond(message, user)?;

    let record = ChatRecord {
        id: Uuid::new_v4(),
        user_id: user.id,
        message: message.to_string(),
        response: turn.response.clone(),
        timestamp: Local::now().naive_local(),
    };
    db::insert_chat_record(conn, &record)?;

    tracing::info!(
        user_id = %user.id,
        language = turn.language.as_str(),
        match_count = turn.matches.len(),
        "chat turn recorded"
    );

    Ok(turn)
}

/// The user's chat history, newest first.
pub fn chat_history(
    conn: &Connection,
    user: &UserAccount,
    limit: u32,
) -> Result<Vec<ChatRecord>, DatabaseError> {
    db::records_for_user(conn, &user.id, limit)
}

/// Delete one of the user's own chat records. Returns false when the
/// record does not exist or belongs to another user.
pub fn delete_chat(
    conn: &Connection,
    user: &UserAccount,
    record_id: &Uuid,
) -> Result<bool, DatabaseError> {
    db::delete_chat_record(conn, &user.id, record_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::engine::translate::MockTranslator;
    use crate::models::enums::{Language, TipCategory};
    use crate::models::HealthTip;

    fn test_user(conn: &Connection, name: &str) -> UserAccount {
        let user = UserAccount {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.into(),
            age: 30,
            location: "Pune".into(),
            language: Language::English,
            is_admin: false,
            created_at: Local::now().naive_local(),
        };
        db::insert_user(conn, &user).unwrap();
        user
    }

    fn no_translator() -> BestEffort<MockTranslator> {
        BestEffort::disabled()
    }

    #[test]
    fn handle_message_persists_the_exchange() {
        let conn = open_memory_database().unwrap();
        let user = test_user(&conn, "Asha");

        let turn = handle_message(&conn, &no_translator(), &user, "I have a fever").unwrap();

        let history = chat_history(&conn, &user, 10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].message, "I have a fever");
        assert_eq!(history[0].response, turn.response);
        assert_eq!(history[0].user_id, user.id);
    }

    #[test]
    fn history_is_newest_first() {
        let conn = open_memory_database().unwrap();
        let user = test_user(&conn, "Asha");

        handle_message(&conn, &no_translator(), &user, "hello").unwrap();
        handle_message(&conn, &no_translator(), &user, "I have a cough").unwrap();

        let history = chat_history(&conn, &user, 10).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].message, "I have a cough");
        assert_eq!(history[1].message, "hello");
    }

    #[test]
    fn history_respects_limit() {
        let conn = open_memory_database().unwrap();
        let user = test_user(&conn, "Asha");

        for i in 0..4 {
            handle_message(&conn, &no_translator(), &user, &format!("message {i}")).unwrap();
        }

        let history = chat_history(&conn, &user, 2).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].message, "message 3");
    }

    #[test]
    fn delete_is_scoped_to_the_owner() {
        let conn = open_memory_database().unwrap();
        let asha = test_user(&conn, "Asha");
        let ravi = test_user(&conn, "Ravi");

        handle_message(&conn, &no_translator(), &asha, "hello").unwrap();
        let record_id = chat_history(&conn, &asha, 1).unwrap()[0].id;

        assert!(!delete_chat(&conn, &ravi, &record_id).unwrap());
        assert_eq!(chat_history(&conn, &asha, 10).unwrap().len(), 1);

        assert!(delete_chat(&conn, &asha, &record_id).unwrap());
        assert!(chat_history(&conn, &asha, 10).unwrap().is_empty());
    }

    #[test]
    fn delete_of_unknown_record_returns_false() {
        let conn = open_memory_database().unwrap();
        let user = test_user(&conn, "Asha");

        assert!(!delete_chat(&conn, &user, &Uuid::new_v4()).unwrap());
    }

    #[test]
    fn failed_translation_still_persists_the_turn() {
        let conn = open_memory_database().unwrap();
        let user = test_user(&conn, "Asha");
        db::insert_tip(
            &conn,
            &HealthTip {
                id: Uuid::new_v4(),
                title: "Joint Pain Basics".into(),
                content: "Rest the joint. Apply ice.".into(),
                category: TipCategory::Other,
                symptoms: Some("joint pain,घुटने".into()),
                created_at: Local::now().naive_local(),
                created_by: None,
            },
        )
        .unwrap();
        let translator = BestEffort::new(MockTranslator::failing());

        let turn = handle_message(&conn, &translator, &user, "मेरे घुटने में दर्द है").unwrap();

        assert!(turn.response.contains("Rest the joint. Apply ice."));
        let history = chat_history(&conn, &user, 10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].response, turn.response);
    }

    #[test]
    fn hindi_exchange_round_trips_through_storage() {
        let conn = open_memory_database().unwrap();
        let user = test_user(&conn, "Asha");

        handle_message(&conn, &no_translator(), &user, "मुझे बुखार है").unwrap();

        let history = chat_history(&conn, &user, 10).unwrap();
        assert_eq!(history[0].message, "मुझे बुखार है");
        assert!(history[0].response.contains("बुखार के प्रबंधन के लिए"));
    }
}
