use crate::dto::common::validate_weight_class;
use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [Self::Scheduled, Self::Live, Self::Completed, Self::Cancelled];
    pub const LABELS: &'static [&'static str] = &["Scheduled", "Live", "Completed", "Cancelled"];

    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Live => "Live",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label().eq_ignore_ascii_case(label))
    }

    /// Whether tickets may still be redeemed and fighters checked in.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Scheduled | Self::Live)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One matchup on a fight card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BoutDto {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Red corner is required"))]
    pub red_corner: String,
    #[validate(length(min = 1, message = "Blue corner is required"))]
    pub blue_corner: String,
    #[validate(custom = "validate_weight_class")]
    pub weight_class: String,
    /// Position on the card, 1 = main event
    #[serde(default)]
    pub card_position: u32,
    #[serde(default)]
    pub title_fight: bool,
}

impl BoutDto {
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.red_corner, self.blue_corner)
    }
}

/// Data Transfer Object for an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 120, message = "Event name is required"))]
    pub name: String,
    pub date: DateTime<Utc>,
    #[validate(length(min = 1, message = "Venue is required"))]
    pub venue_id: String,
    #[serde(default)]
    pub promoter_id: String,
    #[serde(default)]
    pub status: EventStatus,
    #[validate]
    #[serde(default)]
    pub bouts: Vec<BoutDto>,
}

impl EventDto {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == EventStatus::Scheduled && self.date >= now
    }

    pub fn main_event(&self) -> Option<&BoutDto> {
        self.bouts.iter().min_by_key(|b| b.card_position)
    }
}

impl TableRecord for EventDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::from(&self.name),
            // Zero-padded so text order is chronological order
            "date" => FieldValue::owned_text(self.date.format("%Y-%m-%d %H:%M").to_string()),
            "venue_id" => FieldValue::from(&self.venue_id),
            "promoter_id" => FieldValue::from(&self.promoter_id),
            "status" => FieldValue::text(self.status.label()),
            "bouts" => FieldValue::Int(self.bouts.len() as i64),
            "main_event" => FieldValue::from(self.main_event().map(|b| FieldValue::owned_text(b.matchup()))),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("name", "Event name", FieldKind::Text).required(),
    FormField::new("date", "Date and time", FieldKind::DateTime).required(),
    FormField::new("venue_id", "Venue", FieldKind::Text).required(),
    FormField::new("promoter_id", "Promoter", FieldKind::Text),
    FormField::new("status", "Status", FieldKind::Select(EventStatus::LABELS)).required(),
];

impl FormModel for EventDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("name", self.name.clone()),
            ("date", self.date.format("%Y-%m-%dT%H:%M").to_string()),
            ("venue_id", self.venue_id.clone()),
            ("promoter_id", self.promoter_id.clone()),
            ("status", self.status.label().to_string()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let status_label = reader.text("status");
        let event = Self {
            id: base.id.clone(),
            name: reader.text("name"),
            date: reader.datetime("date"),
            venue_id: reader.text("venue_id"),
            promoter_id: reader.text("promoter_id"),
            status: EventStatus::from_label(&status_label).unwrap_or_default(),
            bouts: base.bouts.clone(),
        };
        reader.finish(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn bout(position: u32, red: &str, blue: &str) -> BoutDto {
        BoutDto {
            id: format!("b{}", position),
            red_corner: red.into(),
            blue_corner: blue.into(),
            weight_class: "Lightweight".into(),
            card_position: position,
            title_fight: position == 1,
        }
    }

    #[test]
    fn test_main_event_is_lowest_card_position() {
        let event = EventDto {
            bouts: vec![bout(3, "A", "B"), bout(1, "C", "D"), bout(2, "E", "F")],
            ..Default::default()
        };
        assert_eq!(event.main_event().map(BoutDto::matchup), Some("C vs D".to_string()));
        assert_eq!(event.field("bouts"), FieldValue::Int(3));
    }

    #[test]
    fn test_nested_bouts_are_validated() {
        let event = EventDto {
            name: "Fight Night 12".into(),
            venue_id: "v1".into(),
            bouts: vec![BoutDto::default()],
            ..Default::default()
        };
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_form_keeps_bouts_and_parses_status() {
        let base = EventDto {
            id: "e1".into(),
            bouts: vec![bout(1, "A", "B")],
            ..Default::default()
        };
        let form = FormState::from_values([
            ("name", "Fight Night 12"),
            ("date", "2026-11-07T19:00"),
            ("venue_id", "v1"),
            ("status", "live"),
        ]);
        let event = EventDto::from_form(&form, &base).unwrap();
        assert_eq!(event.status, EventStatus::Live);
        assert_eq!(event.bouts.len(), 1);
        assert_eq!(event.date, Utc.with_ymd_and_hms(2026, 11, 7, 19, 0, 0).unwrap());
        assert_eq!(event.field("date"), FieldValue::owned_text("2026-11-07 19:00".into()));
    }

    #[test]
    fn test_upcoming() {
        let now = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        let mut event = EventDto {
            date: Utc.with_ymd_and_hms(2026, 11, 7, 19, 0, 0).unwrap(),
            ..Default::default()
        };
        assert!(event.is_upcoming(now));
        event.status = EventStatus::Cancelled;
        assert!(!event.is_upcoming(now));
    }
}
