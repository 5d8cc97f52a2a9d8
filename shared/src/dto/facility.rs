use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

/// A training facility listed on the public site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDto {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "Facility name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[serde(default)]
    pub disciplines: Vec<String>,
    #[validate(url(message = "Website must be a full URL"))]
    #[serde(default)]
    pub website: Option<String>,
}

impl TableRecord for FacilityDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::from(&self.name),
            "city" => FieldValue::from(&self.city),
            "disciplines" => FieldValue::owned_text(self.disciplines.join(", ")),
            "website" => FieldValue::from(self.website.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("name", "Name", FieldKind::Text).required(),
    FormField::new("city", "City", FieldKind::Text).required(),
    FormField::new("disciplines", "Disciplines (comma separated)", FieldKind::Text),
    FormField::new("website", "Website", FieldKind::Text),
];

impl FormModel for FacilityDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("name", self.name.clone()),
            ("city", self.city.clone()),
            ("disciplines", self.disciplines.join(", ")),
            ("website", self.website.clone().unwrap_or_default()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let facility = Self {
            id: base.id.clone(),
            name: reader.text("name"),
            city: reader.text("city"),
            disciplines: reader.list("disciplines"),
            website: reader.optional_text("website"),
        };
        reader.finish(facility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_disciplines_round_trip_through_form() {
        let form = FormState::from_values([("name", "Iron Den"), ("city", "Denver"), ("disciplines", "BJJ, Muay Thai")]);
        let facility = FacilityDto::from_form(&form, &FacilityDto::default()).unwrap();
        assert_eq!(facility.disciplines, vec!["BJJ".to_string(), "Muay Thai".to_string()]);
        assert_eq!(facility.website, None);
        assert_eq!(facility.field("disciplines").to_string(), "BJJ, Muay Thai");
    }

    #[test]
    fn test_bad_website_rejected() {
        let form = FormState::from_values([("name", "Iron Den"), ("city", "Denver"), ("website", "iron den")]);
        let errors = FacilityDto::from_form(&form, &FacilityDto::default()).unwrap_err();
        assert_eq!(errors.errors_for("website"), &["Website must be a full URL".to_string()]);
    }
}
