//! Mock emergency alerts: build the payload from the user's profile
//! and hand it to an outbound sink. The shipped sink only logs; real
//! dispatch integrations would implement [`AlertSink`].

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::UserAccount;

pub const EMERGENCY_TYPE_MEDICAL: &str = "medical";

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyAlert {
    pub user_name: String,
    pub user_age: u32,
    pub location: String,
    pub timestamp: NaiveDateTime,
    pub emergency_type: String,
}

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Alert serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Alert dispatch error: {0}")]
    Dispatch(String),
}

/// Outbound channel for alerts.
pub trait AlertSink {
    fn dispatch(&self, payload: &str) -> Result<(), AlertError>;
}

/// Sink that records alerts in the application log.
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn dispatch(&self, payload: &str) -> Result<(), AlertError> {
        tracing::warn!(payload, "EMERGENCY ALERT");
        Ok(())
    }
}

/// Build the alert payload from the profile. `location` overrides the
/// profile location when given.
pub fn build_alert(user: &UserAccount, location: Option<&str>) -> EmergencyAlert {
    EmergencyAlert {
        user_name: user.name.clone(),
        user_age: user.age,
        location: location.unwrap_or(&user.location).to_string(),
        timestamp: Utc::now().naive_utc(),
        emergency_type: EMERGENCY_TYPE_MEDICAL.to_string(),
    }
}

/// Serialize an alert for the user and push it through the sink.
pub fn raise_alert(
    sink: &dyn AlertSink,
    user: &UserAccount,
    location: Option<&str>,
) -> Result<EmergencyAlert, AlertError> {
    let alert = build_alert(user, location);
    let payload = serde_json::to_string(&alert)?;
    sink.dispatch(&payload)?;

    tracing::info!(user_name = %alert.user_name, "emergency alert raised");
    Ok(alert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Language;
    use std::cell::RefCell;
    use uuid::Uuid;

    struct RecordingSink {
        payloads: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self { payloads: RefCell::new(Vec::new()) }
        }
    }

    impl AlertSink for RecordingSink {
        fn dispatch(&self, payload: &str) -> Result<(), AlertError> {
            self.payloads.borrow_mut().push(payload.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl AlertSink for FailingSink {
        fn dispatch(&self, _payload: &str) -> Result<(), AlertError> {
            Err(AlertError::Dispatch("pager gateway unreachable".into()))
        }
    }

    fn test_user() -> UserAccount {
        UserAccount {
            id: Uuid::new_v4(),
            email: "asha@example.com".into(),
            name: "Asha".into(),
            age: 34,
            location: "Pune".into(),
            language: Language::English,
            is_admin: false,
            created_at: Default::default(),
        }
    }

    #[test]
    fn alert_copies_profile_fields() {
        let alert = build_alert(&test_user(), None);

        assert_eq!(alert.user_name, "Asha");
        assert_eq!(alert.user_age, 34);
        assert_eq!(alert.location, "Pune");
        assert_eq!(alert.emergency_type, "medical");
    }

    #[test]
    fn explicit_location_overrides_profile() {
        let alert = build_alert(&test_user(), Some("Mumbai Central"));
        assert_eq!(alert.location, "Mumbai Central");
    }

    #[test]
    fn raised_alert_reaches_the_sink_as_json() {
        let sink = RecordingSink::new();

        raise_alert(&sink, &test_user(), None).unwrap();

        let payloads = sink.payloads.borrow();
        assert_eq!(payloads.len(), 1);

        let value: serde_json::Value = serde_json::from_str(&payloads[0]).unwrap();
        assert_eq!(value["user_name"], "Asha");
        assert_eq!(value["user_age"], 34);
        assert_eq!(value["location"], "Pune");
        assert_eq!(value["emergency_type"], "medical");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn sink_failure_propagates() {
        let err = raise_alert(&FailingSink, &test_user(), None).unwrap_err();
        assert!(matches!(err, AlertError::Dispatch(_)));
    }
}
