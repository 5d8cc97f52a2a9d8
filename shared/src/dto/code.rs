use crate::dto::common::format_cents;
use crate::error::{Result, SharedError};
use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    static ref CODE_REGEX: Regex = Regex::new(r"^[0-9A-F]{5}-[0-9A-F]{5}$").unwrap();
}

/// Fresh `XXXXX-XXXXX` redemption code.
pub fn generate_code() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}-{}", &hex[..5], &hex[5..10])
}

/// Canonical form of a code typed at the door: uppercase, spaces dropped, one dash.
pub fn normalize_code(input: &str) -> String {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if compact.len() == 10 && compact.is_ascii() {
        format!("{}-{}", &compact[..5], &compact[5..])
    } else {
        compact
    }
}

pub fn is_valid_code_format(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Cash-payment code handed out at the box office
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCodeDto {
    #[serde(default)]
    pub id: String,
    #[validate(regex(path = "CODE_REGEX", message = "Code must look like ABCDE-12345"))]
    pub code: String,
    #[validate(length(min = 1, message = "Event is required"))]
    pub event_id: String,
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount_cents: i64,
    #[serde(default)]
    pub redeemed: bool,
    pub created_at: DateTime<Utc>,
    /// Base64 QR image rendered by the API, possibly wrapped or URL-safe
    #[serde(default)]
    pub qr_png: Option<String>,
}

impl PaymentCodeDto {
    pub fn issue(event_id: impl Into<String>, amount_cents: i64, now: DateTime<Utc>) -> Result<Self> {
        if amount_cents <= 0 {
            return Err(SharedError::Validation("Amount must be positive".to_string()));
        }
        let code = Self {
            id: String::new(),
            code: generate_code(),
            event_id: event_id.into(),
            amount_cents,
            redeemed: false,
            created_at: now,
            qr_png: None,
        };
        code.validate()?;
        Ok(code)
    }

    pub fn redeem(&mut self) -> Result<()> {
        if self.redeemed {
            return Err(SharedError::Conflict(format!("Code {} was already redeemed", self.code)));
        }
        self.redeemed = true;
        Ok(())
    }
}

impl TableRecord for PaymentCodeDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "code" => FieldValue::from(&self.code),
            "event_id" => FieldValue::from(&self.event_id),
            "amount_cents" => FieldValue::Int(self.amount_cents),
            "amount" => FieldValue::owned_text(format_cents(self.amount_cents)),
            "redeemed" => FieldValue::from(self.redeemed),
            "created_at" => FieldValue::owned_text(self.created_at.format("%Y-%m-%d %H:%M").to_string()),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("event_id", "Event", FieldKind::Text).required(),
    FormField::new("amount_cents", "Amount (cents)", FieldKind::Number).required(),
];

impl FormModel for PaymentCodeDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("event_id", self.event_id.clone()),
            ("amount_cents", self.amount_cents.to_string()),
        ])
    }

    /// A blank base issues a new code; an existing one keeps its code and state.
    fn from_form(form: &FormState, base: &Self) -> std::result::Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let event_id = reader.text("event_id");
        let amount_cents: i64 = reader.parse("amount_cents");
        let code = if base.code.is_empty() {
            Self {
                code: generate_code(),
                created_at: Utc::now(),
                ..base.clone()
            }
        } else {
            base.clone()
        };
        reader.finish(Self {
            event_id,
            amount_cents,
            ..code
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generated_codes_are_well_formed() {
        for _ in 0..50 {
            assert!(is_valid_code_format(&generate_code()));
        }
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" ab12c 3d4e5 "), "AB12C-3D4E5");
        assert_eq!(normalize_code("ab12c-3d4e5"), "AB12C-3D4E5");
        assert_eq!(normalize_code("short"), "SHORT");
    }

    #[test]
    fn test_issue_rejects_non_positive_amount() {
        assert!(matches!(
            PaymentCodeDto::issue("e1", 0, Utc::now()),
            Err(SharedError::Validation(_))
        ));
        let code = PaymentCodeDto::issue("e1", 2500, Utc::now()).unwrap();
        assert!(is_valid_code_format(&code.code));
        assert_eq!(code.field("amount").to_string(), "$25.00");
    }

    #[test]
    fn test_redeem_twice_conflicts() {
        let mut code = PaymentCodeDto::issue("e1", 2500, Utc::now()).unwrap();
        assert!(code.redeem().is_ok());
        assert!(matches!(code.redeem(), Err(SharedError::Conflict(_))));
    }

    #[test]
    fn test_form_issues_code_for_new_record_only() {
        let form = FormState::from_values([("event_id", "e1"), ("amount_cents", "1000")]);
        let created = PaymentCodeDto::from_form(&form, &PaymentCodeDto::default()).unwrap();
        assert!(is_valid_code_format(&created.code));

        let edited = PaymentCodeDto::from_form(&form, &created).unwrap();
        assert_eq!(edited.code, created.code);
    }
}
