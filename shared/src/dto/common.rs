use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::ValidationError;

/// Weight classes offered by every select and bracket.
pub const WEIGHT_CLASSES: &[&str] = &[
    "Strawweight",
    "Flyweight",
    "Bantamweight",
    "Featherweight",
    "Lightweight",
    "Welterweight",
    "Middleweight",
    "Light Heavyweight",
    "Heavyweight",
];

pub fn validate_weight_class(value: &str) -> Result<(), ValidationError> {
    if WEIGHT_CLASSES.contains(&value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("unknown_weight_class");
        error.message = Some("Choose a weight class".into());
        Err(error)
    }
}

/// Error body returned by the API. `field_errors` carries per-field validation
/// messages keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub field_errors: BTreeMap<String, Vec<String>>,
}

/// Formats a cent amount as dollars.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_class_validation() {
        assert!(validate_weight_class("Lightweight").is_ok());
        assert!(validate_weight_class("lightweight").is_err());
    }

    #[test]
    fn test_error_response_field_errors_default() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(parsed.error, "boom");
        assert!(parsed.field_errors.is_empty());
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(2550), "$25.50");
        assert_eq!(format_cents(-5), "-$0.05");
    }
}
