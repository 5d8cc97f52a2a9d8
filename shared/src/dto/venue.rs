use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

/// Data Transfer Object for Venue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VenueDto {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "Venue name is required and must be at most 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "Address is required and must be at most 200 characters"))]
    pub address: String,
    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,
    #[validate(range(min = 1, max = 200000, message = "Capacity must be between 1 and 200000"))]
    pub capacity: u32,
}

impl TableRecord for VenueDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::from(&self.name),
            "address" => FieldValue::from(&self.address),
            "city" => FieldValue::from(&self.city),
            "capacity" => FieldValue::from(self.capacity),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("name", "Venue name", FieldKind::Text).required(),
    FormField::new("address", "Address", FieldKind::Text).required(),
    FormField::new("city", "City", FieldKind::Text).required(),
    FormField::new("capacity", "Capacity", FieldKind::Number).required(),
];

impl FormModel for VenueDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("name", self.name.clone()),
            ("address", self.address.clone()),
            ("city", self.city.clone()),
            ("capacity", self.capacity.to_string()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let venue = Self {
            id: base.id.clone(),
            name: reader.text("name"),
            address: reader.text("address"),
            city: reader.text("city"),
            capacity: reader.parse("capacity"),
        };
        reader.finish(venue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_dto_validation_empty_name() {
        let dto = VenueDto {
            id: "v1".into(),
            name: "".into(),
            address: "1 Main St".into(),
            city: "Austin".into(),
            capacity: 500,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_venue_form_requires_capacity() {
        let form = FormState::from_values([("name", "Cage Arena"), ("address", "1 Main St"), ("city", "Austin")]);
        let errors = VenueDto::from_form(&form, &VenueDto::default()).unwrap_err();
        assert_eq!(errors.errors_for("capacity").len(), 1);
        assert!(errors.errors_for("name").is_empty());
    }
}
