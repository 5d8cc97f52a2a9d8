use crate::dto::common::{validate_weight_class, WEIGHT_CLASSES};
use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

/// Data Transfer Object for a fighter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FighterDto {
    /// Empty until the API assigns one
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 60, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 60, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Gym is required"))]
    pub gym: String,
    #[validate(custom = "validate_weight_class")]
    pub weight_class: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[validate(range(min = 18, max = 60, message = "Age must be between 18 and 60"))]
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub nationality: String,
    /// Weigh-in/check-in on fight night
    #[serde(default)]
    pub checked_in: bool,
    #[serde(default)]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl FighterDto {
    pub fn full_name(&self) -> String {
        match &self.nickname {
            Some(nick) if !nick.is_empty() => format!("{} \"{}\" {}", self.first_name, nick, self.last_name),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Professional record as wins-losses-draws.
    pub fn record_line(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.draws)
    }

    /// Marks the fighter as checked in. Checking in twice keeps the first timestamp.
    pub fn check_in(&mut self, at: DateTime<Utc>) {
        if !self.checked_in {
            self.checked_in = true;
            self.checked_in_at = Some(at);
        }
    }

    pub fn undo_check_in(&mut self) {
        self.checked_in = false;
        self.checked_in_at = None;
    }
}

impl TableRecord for FighterDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::owned_text(self.full_name()),
            "first_name" => FieldValue::from(&self.first_name),
            "last_name" => FieldValue::from(&self.last_name),
            "nickname" => FieldValue::from(self.nickname.as_deref()),
            "gym" => FieldValue::from(&self.gym),
            "weight_class" => FieldValue::from(&self.weight_class),
            "record" => FieldValue::owned_text(self.record_line()),
            "wins" => FieldValue::from(self.wins),
            "losses" => FieldValue::from(self.losses),
            "draws" => FieldValue::from(self.draws),
            "age" => FieldValue::from(self.age),
            "nationality" => FieldValue::from(&self.nationality),
            "checked_in" => FieldValue::from(self.checked_in),
            "checked_in_at" => FieldValue::from(
                self.checked_in_at
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .map(FieldValue::owned_text),
            ),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("first_name", "First name", FieldKind::Text).required(),
    FormField::new("last_name", "Last name", FieldKind::Text).required(),
    FormField::new("nickname", "Nickname", FieldKind::Text),
    FormField::new("gym", "Gym", FieldKind::Text).required(),
    FormField::new("weight_class", "Weight class", FieldKind::Select(WEIGHT_CLASSES)).required(),
    FormField::new("wins", "Wins", FieldKind::Number),
    FormField::new("losses", "Losses", FieldKind::Number),
    FormField::new("draws", "Draws", FieldKind::Number),
    FormField::new("age", "Age", FieldKind::Number),
    FormField::new("nationality", "Nationality", FieldKind::Text),
];

impl FormModel for FighterDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
            ("nickname", self.nickname.clone().unwrap_or_default()),
            ("gym", self.gym.clone()),
            ("weight_class", self.weight_class.clone()),
            ("wins", self.wins.to_string()),
            ("losses", self.losses.to_string()),
            ("draws", self.draws.to_string()),
            ("age", self.age.map(|a| a.to_string()).unwrap_or_default()),
            ("nationality", self.nationality.clone()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let fighter = Self {
            id: base.id.clone(),
            first_name: reader.text("first_name"),
            last_name: reader.text("last_name"),
            nickname: reader.optional_text("nickname"),
            gym: reader.text("gym"),
            weight_class: reader.text("weight_class"),
            wins: reader.parse("wins"),
            losses: reader.parse("losses"),
            draws: reader.parse("draws"),
            age: reader.optional_parse("age"),
            nationality: reader.text("nationality"),
            checked_in: base.checked_in,
            checked_in_at: base.checked_in_at,
        };
        reader.finish(fighter)
    }
}
