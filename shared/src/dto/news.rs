use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleDto {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 160, message = "Title is required"))]
    pub title: String,
    #[validate(length(max = 1000, message = "Summary must be at most 1000 characters"))]
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub author: String,
    pub published_at: DateTime<Utc>,
}

impl TableRecord for NewsArticleDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "title" => FieldValue::from(&self.title),
            "summary" => FieldValue::from(&self.summary),
            "author" => FieldValue::from(&self.author),
            "published_at" => FieldValue::owned_text(self.published_at.format("%Y-%m-%d").to_string()),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("title", "Title", FieldKind::Text).required(),
    FormField::new("summary", "Summary", FieldKind::TextArea),
    FormField::new("author", "Author", FieldKind::Text),
    FormField::new("published_at", "Published", FieldKind::DateTime).required(),
];

impl FormModel for NewsArticleDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("title", self.title.clone()),
            ("summary", self.summary.clone()),
            ("author", self.author.clone()),
            ("published_at", self.published_at.format("%Y-%m-%dT%H:%M").to_string()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let article = Self {
            id: base.id.clone(),
            title: reader.text("title"),
            summary: reader.text("summary"),
            author: reader.text("author"),
            published_at: reader.datetime("published_at"),
        };
        reader.finish(article)
    }
}
