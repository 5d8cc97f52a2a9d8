use crate::dto::common::{validate_weight_class, WEIGHT_CLASSES};
use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

/// Official title holder of a division
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TitleHolderDto {
    #[serde(default)]
    pub id: String,
    #[validate(custom = "validate_weight_class")]
    pub weight_class: String,
    #[validate(length(min = 1, message = "Champion name is required"))]
    pub fighter_name: String,
    pub since: NaiveDate,
    #[serde(default)]
    pub defenses: u32,
}

impl TableRecord for TitleHolderDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "weight_class" => FieldValue::from(&self.weight_class),
            "fighter_name" => FieldValue::from(&self.fighter_name),
            "since" => FieldValue::owned_text(self.since.format("%Y-%m-%d").to_string()),
            "defenses" => FieldValue::from(self.defenses),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("weight_class", "Weight class", FieldKind::Select(WEIGHT_CLASSES)).required(),
    FormField::new("fighter_name", "Champion", FieldKind::Text).required(),
    FormField::new("since", "Champion since", FieldKind::Date).required(),
    FormField::new("defenses", "Title defenses", FieldKind::Number),
];

impl FormModel for TitleHolderDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("weight_class", self.weight_class.clone()),
            ("fighter_name", self.fighter_name.clone()),
            ("since", self.since.format("%Y-%m-%d").to_string()),
            ("defenses", self.defenses.to_string()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let holder = Self {
            id: base.id.clone(),
            weight_class: reader.text("weight_class"),
            fighter_name: reader.text("fighter_name"),
            since: reader.date("since"),
            defenses: reader.parse("defenses"),
        };
        reader.finish(holder)
    }
}
