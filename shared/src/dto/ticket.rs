use crate::dto::code::{generate_code, normalize_code};
use crate::error::{Result, SharedError};
use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

pub const TICKET_TIERS: &[&str] = &["General", "Floor", "Cageside", "VIP"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    #[serde(default)]
    pub id: String,
    pub code: String,
    #[validate(length(min = 1, message = "Event is required"))]
    pub event_id: String,
    #[validate(length(min = 1, max = 120, message = "Holder name is required"))]
    pub holder_name: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub redeemed_at: Option<DateTime<Utc>>,
}

impl TicketDto {
    pub fn is_redeemed(&self) -> bool {
        self.redeemed_at.is_some()
    }

    /// Admits the holder. A ticket only gets through the door once.
    pub fn redeem(&mut self, at: DateTime<Utc>) -> Result<()> {
        if let Some(previous) = self.redeemed_at {
            return Err(SharedError::Conflict(format!(
                "Ticket {} was already redeemed at {}",
                self.code,
                previous.format("%H:%M")
            )));
        }
        self.redeemed_at = Some(at);
        Ok(())
    }
}

/// Finds a ticket by the code read off a phone or printout.
pub fn find_ticket<'a>(tickets: &'a [TicketDto], code: &str) -> Option<&'a TicketDto> {
    let wanted = normalize_code(code);
    tickets.iter().find(|t| normalize_code(&t.code) == wanted)
}

impl TableRecord for TicketDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "code" => FieldValue::from(&self.code),
            "event_id" => FieldValue::from(&self.event_id),
            "holder_name" => FieldValue::from(&self.holder_name),
            "tier" => FieldValue::from(&self.tier),
            "redeemed" => FieldValue::from(self.is_redeemed()),
            "redeemed_at" => FieldValue::from(
                self.redeemed_at
                    .map(|at| FieldValue::owned_text(at.format("%Y-%m-%d %H:%M").to_string())),
            ),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("event_id", "Event", FieldKind::Text).required(),
    FormField::new("holder_name", "Holder", FieldKind::Text).required(),
    FormField::new("tier", "Tier", FieldKind::Select(TICKET_TIERS)).required(),
];

impl FormModel for TicketDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("event_id", self.event_id.clone()),
            ("holder_name", self.holder_name.clone()),
            ("tier", self.tier.clone()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> std::result::Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let ticket = Self {
            id: base.id.clone(),
            code: if base.code.is_empty() { generate_code() } else { base.code.clone() },
            event_id: reader.text("event_id"),
            holder_name: reader.text("holder_name"),
            tier: reader.text("tier"),
            redeemed_at: base.redeemed_at,
        };
        reader.finish(ticket)
    }
}
