//! Immutable form state and the reducer that edits it.
//!
//! Forms hold every input as text; a [`FormModel`] turns that text back into a
//! typed record, collecting parse and validation problems as field messages.

use crate::dto::common::ErrorResponse;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::BTreeMap;
use std::str::FromStr;
use validator::{Validate, ValidationErrors};

/// Input widget to render for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Number,
    Date,
    DateTime,
    Checkbox,
    Select(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(self) -> Self {
        Self { required: true, ..self }
    }
}

/// Converts `camelCase` keys coming back from the API to the snake_case names forms use.
pub fn normalize_field_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
    field_errors: BTreeMap<String, Vec<String>>,
    form_errors: Vec<String>,
    dirty: bool,
}

impl FormState {
    pub fn from_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ..Self::default()
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn errors_for(&self, field: &str) -> &[String] {
        self.field_errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    pub fn has_errors(&self) -> bool {
        !self.form_errors.is_empty() || self.field_errors.values().any(|e| !e.is_empty())
    }

    /// Whether the user changed anything since the form was seeded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn with_field_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
        self
    }

    pub fn with_form_error(mut self, message: impl Into<String>) -> Self {
        self.form_errors.push(message.into());
        self
    }

    pub fn clear_errors(mut self) -> Self {
        self.field_errors.clear();
        self.form_errors.clear();
        self
    }

    /// Local, advisory required-field check.
    pub fn check_required(&self, fields: &[FormField]) -> Self {
        fields
            .iter()
            .filter(|f| f.required && f.kind != FieldKind::Checkbox)
            .filter(|f| self.value(f.name).trim().is_empty())
            .fold(self.clone(), |state, f| {
                state.with_field_error(f.name, format!("{} is required", f.label))
            })
    }

    /// Maps the API's authoritative validation response onto the form.
    pub fn with_server_errors(&self, response: &ErrorResponse) -> Self {
        let mut state = self.clone();
        for (key, messages) in &response.field_errors {
            let key = normalize_field_key(key);
            for message in messages {
                state = state.with_field_error(&key, message.clone());
            }
        }
        if response.field_errors.is_empty() && !response.error.is_empty() {
            state = state.with_form_error(response.error.clone());
        }
        state
    }

    pub fn with_validation_errors(mut self, errors: &ValidationErrors) -> Self {
        for (field, list) in errors.field_errors() {
            let key = normalize_field_key(field);
            for error in list {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", error.code));
                self = self.with_field_error(&key, message);
            }
        }
        self
    }
}

/// Pure reducer for a single input change. The field's previous errors are
/// dropped since they described the old value.
pub fn apply_field_change(state: &FormState, field: &str, value: impl Into<String>) -> FormState {
    let mut next = state.clone();
    next.values.insert(field.to_string(), value.into());
    next.field_errors.remove(field);
    next.form_errors.clear();
    next.dirty = true;
    next
}

/// Reads typed values out of a form, accumulating problems instead of stopping at the first.
pub struct FormReader<'a> {
    form: &'a FormState,
    errors: FormState,
}

impl<'a> FormReader<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self {
            form,
            errors: form.clone().clear_errors(),
        }
    }

    fn fail(&mut self, field: &str, message: String) {
        self.errors = std::mem::take(&mut self.errors).with_field_error(field, message);
    }

    pub fn text(&mut self, field: &str) -> String {
        self.form.value(field).trim().to_string()
    }

    pub fn optional_text(&mut self, field: &str) -> Option<String> {
        Some(self.text(field)).filter(|s| !s.is_empty())
    }

    pub fn parse<T>(&mut self, field: &str) -> T
    where
        T: FromStr + Default,
    {
        self.optional_parse(field).unwrap_or_default()
    }

    pub fn optional_parse<T>(&mut self, field: &str) -> Option<T>
    where
        T: FromStr,
    {
        let raw = self.text(field);
        if raw.is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.fail(field, format!("'{}' is not a valid number", raw));
                None
            }
        }
    }

    pub fn checkbox(&mut self, field: &str) -> bool {
        matches!(self.form.value(field), "true" | "on" | "1")
    }

    pub fn date(&mut self, field: &str) -> NaiveDate {
        let raw = self.text(field);
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d").unwrap_or_else(|_| {
            self.fail(field, "Enter a date as YYYY-MM-DD".to_string());
            NaiveDate::default()
        })
    }

    /// Accepts RFC 3339 or the `YYYY-MM-DDTHH:MM` a datetime-local input produces (taken as UTC).
    pub fn datetime(&mut self, field: &str) -> DateTime<Utc> {
        let raw = self.text(field);
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
            return parsed.with_timezone(&Utc);
        }
        match NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M") {
            Ok(naive) => naive.and_utc(),
            Err(_) => {
                self.fail(field, "Enter a date and time".to_string());
                DateTime::<Utc>::default()
            }
        }
    }

    /// Comma-separated list, blanks dropped.
    pub fn list(&mut self, field: &str) -> Vec<String> {
        self.form
            .value(field)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Runs the record's own validation and returns it, or the form annotated with every problem.
    pub fn finish<T: Validate>(self, value: T) -> Result<T, FormState> {
        let mut errors = self.errors;
        if let Err(validation) = value.validate() {
            errors = errors.with_validation_errors(&validation);
        }
        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(value)
        }
    }
}

/// A record that can be edited through a generic form.
pub trait FormModel: Sized {
    fn fields() -> &'static [FormField];

    /// Seeds a form from an existing record.
    fn to_form(&self) -> FormState;

    /// Builds a whole replacement record from `form`, keeping whatever the form does
    /// not cover (identity, server-managed flags) from `base`.
    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    const FIELDS: &[FormField] = &[
        FormField::new("name", "Name", FieldKind::Text).required(),
        FormField::new("capacity", "Capacity", FieldKind::Number),
        FormField::new("indoor", "Indoor", FieldKind::Checkbox).required(),
    ];

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "Name is too short"))]
        name: String,
        #[validate(range(min = 1))]
        capacity: u32,
    }

    #[test]
    fn test_apply_field_change_is_pure() {
        let original = FormState::from_values([("name", "Old")]).with_field_error("name", "bad");
        let next = apply_field_change(&original, "name", "New");

        assert_eq!(original.value("name"), "Old");
        assert_eq!(original.errors_for("name").len(), 1);
        assert!(!original.is_dirty());

        assert_eq!(next.value("name"), "New");
        assert!(next.errors_for("name").is_empty());
        assert!(next.is_dirty());
    }

    #[test]
    fn test_check_required_skips_checkboxes() {
        let state = FormState::default().check_required(FIELDS);
        assert_eq!(state.errors_for("name"), &["Name is required".to_string()]);
        assert!(state.errors_for("indoor").is_empty());
        assert!(state.errors_for("capacity").is_empty());
    }

    #[test]
    fn test_server_errors_map_to_fields() {
        let response = ErrorResponse {
            error: "Validation failed".into(),
            field_errors: [("displayName".to_string(), vec!["taken".to_string()])].into(),
        };
        let state = FormState::default().with_server_errors(&response);
        assert_eq!(state.errors_for("display_name"), &["taken".to_string()]);
        assert!(state.form_errors().is_empty());
    }

    #[test]
    fn test_server_error_without_fields_is_form_level() {
        let response = ErrorResponse {
            error: "Event is locked".into(),
            field_errors: Default::default(),
        };
        let state = FormState::default().with_server_errors(&response);
        assert_eq!(state.form_errors(), &["Event is locked".to_string()]);
    }

    #[test]
    fn test_reader_collects_parse_and_validation_errors() {
        let form = FormState::from_values([("name", "ab"), ("capacity", "lots")]);
        let mut reader = FormReader::new(&form);
        let sample = Sample {
            name: reader.text("name"),
            capacity: reader.parse("capacity"),
        };
        let errors = reader.finish(sample).unwrap_err();
        assert_eq!(errors.errors_for("name"), &["Name is too short".to_string()]);
        assert_eq!(errors.errors_for("capacity").len(), 2);
    }

    #[test]
    fn test_reader_parses_datetime_local() {
        let form = FormState::from_values([("date", "2026-11-07T19:30"), ("day", "2026-11-07"), ("tags", "a, ,b")]);
        let mut reader = FormReader::new(&form);
        assert_eq!(reader.datetime("date").to_rfc3339(), "2026-11-07T19:30:00+00:00");
        assert_eq!(reader.date("day"), NaiveDate::from_ymd_opt(2026, 11, 7).unwrap());
        assert_eq!(reader.list("tags"), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_normalize_field_key() {
        assert_eq!(normalize_field_key("weightClass"), "weight_class");
        assert_eq!(normalize_field_key("first_name"), "first_name");
    }
}
