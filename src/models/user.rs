use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub age: u32,
    pub location: String,
    pub language: Language,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

/// Validate profile measurements before they are stored. Weight is in kg,
/// height in cm; both are optional on the profile form. Returns one
/// human-readable message per failed field, empty when everything passes.
pub fn validate_health_data(age: u32, weight: Option<f64>, height: Option<f64>) -> Vec<String> {
    let mut errors = Vec::new();

    if !(1..150).contains(&age) {
        errors.push("Please enter a valid age".to_string());
    }

    if let Some(weight) = weight {
        if !(weight > 0.0 && weight < 500.0) {
            errors.push("Please enter a valid weight".to_string());
        }
    }

    if let Some(height) = height {
        if !(height > 0.0 && height < 300.0) {
            errors.push("Please enter a valid height".to_string());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_profile_passes() {
        assert!(validate_health_data(34, Some(72.5), Some(175.0)).is_empty());
    }

    #[test]
    fn missing_measurements_pass() {
        assert!(validate_health_data(34, None, None).is_empty());
    }

    #[test]
    fn zero_age_rejected() {
        let errors = validate_health_data(0, None, None);
        assert_eq!(errors, vec!["Please enter a valid age".to_string()]);
    }

    #[test]
    fn age_150_rejected() {
        assert_eq!(validate_health_data(150, None, None).len(), 1);
        assert!(validate_health_data(149, None, None).is_empty());
    }

    #[test]
    fn out_of_range_weight_and_height_rejected() {
        let errors = validate_health_data(34, Some(500.0), Some(300.0));
        assert_eq!(
            errors,
            vec![
                "Please enter a valid weight".to_string(),
                "Please enter a valid height".to_string(),
            ]
        );
    }

    #[test]
    fn all_fields_invalid_reports_all_errors() {
        let errors = validate_health_data(200, Some(0.0), Some(-5.0));
        assert_eq!(errors.len(), 3);
    }
}
