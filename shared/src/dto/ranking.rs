use crate::dto::common::{validate_weight_class, WEIGHT_CLASSES};
use crate::form::{FieldKind, FormField, FormModel, FormReader, FormState};
use crate::table::{FieldValue, TableRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

/// One row of a divisional ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankingDto {
    #[serde(default)]
    pub id: String,
    #[validate(custom = "validate_weight_class")]
    pub weight_class: String,
    /// 0 is the champion
    pub rank: u32,
    #[serde(default)]
    pub fighter_id: String,
    #[validate(length(min = 1, message = "Fighter name is required"))]
    pub fighter_name: String,
    #[serde(default)]
    pub points: f64,
}

impl RankingDto {
    pub fn rank_label(&self) -> String {
        if self.rank == 0 {
            "C".to_string()
        } else {
            self.rank.to_string()
        }
    }
}

impl TableRecord for RankingDto {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> FieldValue<'_> {
        match key {
            "id" => FieldValue::from(&self.id),
            "weight_class" => FieldValue::from(&self.weight_class),
            "rank" => FieldValue::from(self.rank),
            "fighter_id" => FieldValue::from(&self.fighter_id),
            "fighter_name" => FieldValue::from(&self.fighter_name),
            "points" => FieldValue::from(self.points),
            _ => FieldValue::Missing,
        }
    }
}

const FIELDS: &[FormField] = &[
    FormField::new("weight_class", "Weight class", FieldKind::Select(WEIGHT_CLASSES)).required(),
    FormField::new("rank", "Rank", FieldKind::Number).required(),
    FormField::new("fighter_name", "Fighter", FieldKind::Text).required(),
    FormField::new("points", "Points", FieldKind::Number),
];

impl FormModel for RankingDto {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::from_values([
            ("weight_class", self.weight_class.clone()),
            ("rank", self.rank.to_string()),
            ("fighter_name", self.fighter_name.clone()),
            ("points", self.points.to_string()),
        ])
    }

    fn from_form(form: &FormState, base: &Self) -> Result<Self, FormState> {
        let mut reader = FormReader::new(form);
        let ranking = Self {
            id: base.id.clone(),
            weight_class: reader.text("weight_class"),
            rank: reader.parse("rank"),
            fighter_id: base.fighter_id.clone(),
            fighter_name: reader.text("fighter_name"),
            points: reader.parse("points"),
        };
        reader.finish(ranking)
    }
}

/// Splits rankings into per-division tables, divisions in [`WEIGHT_CLASSES`] order.
pub fn by_division(rankings: &[RankingDto]) -> Vec<(&'static str, Vec<RankingDto>)> {
    WEIGHT_CLASSES
        .iter()
        .map(|class| {
            let rows: Vec<RankingDto> = rankings
                .iter()
                .filter(|r| r.weight_class == *class)
                .cloned()
                .collect();
            (*class, rows)
        })
        .filter(|(_, rows)| !rows.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ranking(class: &str, rank: u32, name: &str) -> RankingDto {
        RankingDto {
            id: format!("{}-{}", class, rank),
            weight_class: class.into(),
            rank,
            fighter_name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_by_division_uses_weight_class_order() {
        let rows = vec![
            ranking("Heavyweight", 1, "Big"),
            ranking("Flyweight", 0, "Small"),
            ranking("Heavyweight", 0, "Bigger"),
        ];
        let divisions = by_division(&rows);
        let names: Vec<_> = divisions.iter().map(|(class, rows)| (*class, rows.len())).collect();
        assert_eq!(names, vec![("Flyweight", 1), ("Heavyweight", 2)]);
    }

    #[test]
    fn test_champion_label() {
        assert_eq!(ranking("Flyweight", 0, "x").rank_label(), "C");
        assert_eq!(ranking("Flyweight", 4, "x").rank_label(), "4");
    }
}
