use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PromoterDto {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "Promoter name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub contact_email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl TableRecord for PromoterDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "name" => FieldValue::from(&self.name),
            "contact_email" => FieldValue::from(&self.contact_email),
            "phone" => FieldValue::from(self.phone.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("name", "Name", FieldKind::Text).required(),
    FormField::new("contact_email", "Contact email", FieldKind::Email).required(),
    FormField::new("phone", "Phone", FieldKind::Text),
];

impl FormModel for PromoterDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("name", self.name.clone()),
            ("contact_email", self.contact_email.clone()),
            ("phone", self.phone.clone().unwrap_or_default()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let promoter = Self {
            id: base.id.clone(),
            name: reader.text("name"),
            contact_email: reader.text("contact_email"),
            phone: reader.optional_text("phone"),
        };
        reader.finish(promoter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_is_a_field_error() {
        let form = FormState::from_values([("name", "Apex Promotions"), ("contact_email", "not-an-email")]);
        let errors = PromoterDto::from_form(&form, &PromoterDto::default()).unwrap_err();
        assert_eq!(errors.errors_for("contact_email"), &["Invalid email format".to_string()]);
    }
}
