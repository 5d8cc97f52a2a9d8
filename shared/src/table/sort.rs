use super::record::{Column, FieldValue, TableRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Applies the direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key and direction owned by one table instance.
///
/// With no key the table keeps insertion order whatever the direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// Direction shown for `key`'s header, if it is the active sort column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match &self.key {
            Some(active) if active == key => Some(self.direction),
            _ => None,
        }
    }

    pub fn toggled(&self, key: &str) -> Self {
        toggle_sort(self, key)
    }
}

/// Header activation rule: the active key flips direction, any other key
/// becomes active in ascending order.
pub fn toggle_sort(current: &SortState, key: &str) -> SortState {
    match &current.key {
        Some(active) if active == key => SortState {
            key: current.key.clone(),
            direction: current.direction.flipped(),
        },
        _ => SortState::by(key, SortDirection::Asc),
    }
}

/// Case-insensitive ordering with lowercase sorting ahead of uppercase on ties,
/// so `"amy" < "Amy" < "bob"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

fn type_rank(value: &FieldValue<'_>) -> u8 {
    match value {
        FieldValue::Missing => 3,
        FieldValue::Bool(_) => 0,
        FieldValue::Int(_) | FieldValue::Float(_) => 1,
        FieldValue::Text(_) => 2,
    }
}

/// Numeric order with `-0.0 == 0.0`; NaNs fall back to `total_cmp`, which puts
/// positive NaN above and negative NaN below every number.
fn compare_floats(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

/// Exact comparison of an integer against a float. Converting the integer to
/// `f64` would round above 2^53 and break transitivity.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        return if f.is_sign_negative() { Ordering::Greater } else { Ordering::Less };
    }
    if f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }
    // In range, so the truncated value is an exact i64
    let whole = f.trunc();
    i.cmp(&(whole as i64)).then_with(|| compare_floats(whole, f))
}

/// Ascending order between two present values.
fn compare_present(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => locale_compare(x, y),
        (FieldValue::Int(x), FieldValue::Int(y)) => x.cmp(y),
        (FieldValue::Float(x), FieldValue::Float(y)) => compare_floats(*x, *y),
        (FieldValue::Int(x), FieldValue::Float(y)) => compare_int_float(*x, *y),
        (FieldValue::Float(x), FieldValue::Int(y)) => compare_int_float(*y, *x).reverse(),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Orders two field values. Missing values go last in both directions.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>, direction: SortDirection) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(compare_present(a, b)),
    }
}

pub fn compare_records<R: TableRecord>(a: &R, b: &R, key: &str, direction: SortDirection) -> Ordering {
    compare_values(&a.field(key), &b.field(key), direction)
}

/// Stable-sorts a vector of borrowed records in place under `sort`.
pub fn sort_refs<R: TableRecord>(rows: &mut [&R], sort: &SortState) {
    if let Some(key) = &sort.key {
        rows.sort_by(|a, b| compare_records(*a, *b, key, sort.direction));
    }
}

/// Borrowed, reordered view of `collection`; the collection itself is left untouched.
pub fn sorted_view<'a, R: TableRecord>(collection: &'a [R], sort: &SortState) -> Vec<&'a R> {
    let mut rows: Vec<&R> = collection.iter().collect();
    sort_refs(&mut rows, sort);
    rows
}

/// One displayed row: the record plus the text of each column.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow<'a, R> {
    pub record: &'a R,
    pub cells: Vec<String>,
}

pub fn render_row<'a, R: TableRecord>(record: &'a R, columns: &[Column]) -> RenderedRow<'a, R> {
    RenderedRow {
        record,
        cells: columns
            .iter()
            .map(|column| record.field(&column.key).to_string())
            .collect(),
    }
}

/// Produces the rows a table displays for `collection` under `sort`.
pub fn render<'a, R: TableRecord>(
    collection: &'a [R],
    columns: &[Column],
    sort: &SortState,
) -> Vec<RenderedRow<'a, R>> {
    sorted_view(collection, sort)
        .into_iter()
        .map(|record| render_row(record, columns))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};
    use serde_json::{json, Value};

    #[fixture]
    fn people() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Bob", "age": 40}),
            json!({"id": 2, "name": "Amy", "age": 25}),
            json!({"id": 3, "name": "Amy", "age": 30}),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![Column::new("Name", "name"), Column::new("Age", "age")]
    }

    fn ids(rows: &[RenderedRow<'_, Value>]) -> Vec<i64> {
        rows.iter().map(|r| r.record["id"].as_i64().unwrap()).collect()
    }

    #[rstest]
    fn test_sort_by_name_asc_keeps_equal_names_in_input_order(people: Vec<Value>) {
        let rows = render(&people, &columns(), &SortState::by("name", SortDirection::Asc));
        assert_eq!(ids(&rows), vec![2, 3, 1]);
        assert_eq!(rows[0].cells, vec!["Amy".to_string(), "25".to_string()]);
    }

    #[rstest]
    fn test_sort_by_age_desc(people: Vec<Value>) {
        let rows = render(&people, &columns(), &SortState::by("age", SortDirection::Desc));
        assert_eq!(ids(&rows), vec![1, 3, 2]);
    }

    #[rstest]
    fn test_no_key_is_pass_through(people: Vec<Value>) {
        let unsorted = SortState {
            key: None,
            direction: SortDirection::Desc,
        };
        let rows = render(&people, &columns(), &unsorted);
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_render_does_not_touch_collection(people: Vec<Value>) {
        let before = people.clone();
        let _ = render(&people, &columns(), &SortState::by("name", SortDirection::Asc));
        assert_eq!(people, before);
    }

    #[test]
    fn test_toggle_sort_rules() {
        let name_asc = SortState::by("name", SortDirection::Asc);
        assert_eq!(toggle_sort(&name_asc, "name"), SortState::by("name", SortDirection::Desc));

        let name_desc = SortState::by("name", SortDirection::Desc);
        assert_eq!(toggle_sort(&name_desc, "age"), SortState::by("age", SortDirection::Asc));
        assert_eq!(toggle_sort(&SortState::default(), "age"), SortState::by("age", SortDirection::Asc));
    }

    #[test]
    fn test_missing_values_last_in_both_directions() {
        let rows = vec![
            json!({"id": "a", "rank": null}),
            json!({"id": "b", "rank": 2}),
            json!({"id": "c"}),
            json!({"id": "d", "rank": 1}),
        ];
        let asc: Vec<_> = sorted_view(&rows, &SortState::by("rank", SortDirection::Asc))
            .into_iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        let desc: Vec<_> = sorted_view(&rows, &SortState::by("rank", SortDirection::Desc))
            .into_iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(asc, vec!["d", "b", "a", "c"]);
        assert_eq!(desc, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_heterogeneous_values_do_not_panic() {
        let rows = vec![
            json!({"id": 1, "v": "ten"}),
            json!({"id": 2, "v": 10}),
            json!({"id": 3, "v": true}),
            json!({"id": 4, "v": 2.5}),
        ];
        let order: Vec<_> = sorted_view(&rows, &SortState::by("v", SortDirection::Asc))
            .into_iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect();
        assert_eq!(order, vec![3, 4, 2, 1]);
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("amy", "Bob"), Ordering::Less);
        assert_eq!(locale_compare("amy", "Amy"), Ordering::Less);
        assert_eq!(locale_compare("Amy", "amy"), Ordering::Greater);
        assert_eq!(locale_compare("Zed", "zed"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_large_ints_and_floats_sort_exactly() {
        let big = 1i64 << 53;
        let rows = vec![
            json!({"id": 1, "n": big + 1}),
            json!({"id": 2, "n": big as f64}),
            json!({"id": 3, "n": big}),
        ];
        let order = |direction| -> Vec<i64> {
            sorted_view(&rows, &SortState::by("n", direction))
                .into_iter()
                .map(|r| r["id"].as_i64().unwrap())
                .collect()
        };
        assert_eq!(order(SortDirection::Asc), vec![2, 3, 1]);
        assert_eq!(order(SortDirection::Desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_int_against_float_edges() {
        let cmp = |a: FieldValue<'static>, b: FieldValue<'static>| compare_values(&a, &b, SortDirection::Asc);
        assert_eq!(cmp(FieldValue::Int(2), FieldValue::Float(2.5)), Ordering::Less);
        assert_eq!(cmp(FieldValue::Int(-2), FieldValue::Float(-2.5)), Ordering::Greater);
        assert_eq!(cmp(FieldValue::Int(0), FieldValue::Float(-0.0)), Ordering::Equal);
        assert_eq!(cmp(FieldValue::Float(0.0), FieldValue::Float(-0.0)), Ordering::Equal);
        assert_eq!(cmp(FieldValue::Int(i64::MAX), FieldValue::Float(9.223372036854775807e18)), Ordering::Less);
        assert_eq!(cmp(FieldValue::Int(i64::MIN), FieldValue::Float(-9.223372036854775808e18)), Ordering::Equal);
        assert_eq!(cmp(FieldValue::Int(i64::MIN), FieldValue::Float(f64::NEG_INFINITY)), Ordering::Greater);
        assert_eq!(cmp(FieldValue::Int(i64::MAX), FieldValue::Float(f64::NAN)), Ordering::Less);
        assert_eq!(cmp(FieldValue::Float(f64::NAN), FieldValue::Float(f64::INFINITY)), Ordering::Greater);
    }

    fn mixed_number() -> impl Strategy<Value = FieldValue<'static>> {
        let big = 1i64 << 53;
        prop_oneof![
            (-6i64..6).prop_map(move |d| FieldValue::Int(big + d)),
            (-6i64..6).prop_map(move |d| FieldValue::Float((big + d) as f64)),
            (-3i64..3).prop_map(FieldValue::Int),
            (-12i64..12).prop_map(|q| FieldValue::Float(q as f64 * 0.25)),
            Just(FieldValue::Int(i64::MAX)),
            Just(FieldValue::Float(9.223372036854775807e18)),
            Just(FieldValue::Float(f64::INFINITY)),
        ]
    }

    fn distinct_ages() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::hash_set(-1000i64..1000, 0..40).prop_map(|s| s.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_desc_reverses_asc_for_distinct_keys(ages in distinct_ages()) {
            let rows: Vec<Value> = ages.iter().enumerate().map(|(i, a)| json!({"id": i, "age": a})).collect();
            let asc = sorted_view(&rows, &SortState::by("age", SortDirection::Asc));
            let mut desc = sorted_view(&rows, &SortState::by("age", SortDirection::Desc));
            desc.reverse();
            prop_assert_eq!(asc, desc);
        }

        #[test]
        fn prop_sorting_is_idempotent(ages in proptest::collection::vec(0i64..5, 0..40), desc in any::<bool>()) {
            let rows: Vec<Value> = ages.iter().enumerate().map(|(i, a)| json!({"id": i, "age": a})).collect();
            let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
            let state = SortState::by("age", direction);
            prop_assert_eq!(render(&rows, &[], &state), render(&rows, &[], &state));
        }

        #[test]
        fn prop_null_key_passes_through(ages in proptest::collection::vec(any::<i64>(), 0..40)) {
            let rows: Vec<Value> = ages.iter().map(|a| json!({"age": a})).collect();
            let view = sorted_view(&rows, &SortState::default());
            prop_assert!(view.iter().zip(rows.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
        }

        #[test]
        fn prop_mixed_numbers_are_totally_ordered(
            a in mixed_number(),
            b in mixed_number(),
            c in mixed_number(),
        ) {
            let cmp = |x: &FieldValue<'_>, y: &FieldValue<'_>| compare_values(x, y, SortDirection::Asc);
            prop_assert_eq!(cmp(&a, &b), cmp(&b, &a).reverse());
            if cmp(&a, &b) != Ordering::Greater && cmp(&b, &c) != Ordering::Greater {
                prop_assert_ne!(cmp(&a, &c), Ordering::Greater);
            }
        }

        #[test]
        fn prop_mixed_number_sort_is_ordered(values in proptest::collection::vec(mixed_number(), 0..40), desc in any::<bool>()) {
            let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
            let mut sorted = values.clone();
            sorted.sort_by(|x, y| compare_values(x, y, direction));
            for (i, x) in sorted.iter().enumerate() {
                for y in &sorted[i + 1..] {
                    prop_assert_ne!(compare_values(x, y, direction), Ordering::Greater);
                }
            }
        }

        #[test]
        fn prop_equal_keys_keep_input_order(ages in proptest::collection::vec(0i64..3, 0..40), desc in any::<bool>()) {
            let rows: Vec<Value> = ages.iter().enumerate().map(|(i, a)| json!({"id": i, "age": a})).collect();
            let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
            let view = sorted_view(&rows, &SortState::by("age", direction));
            for pair in view.windows(2) {
                if pair[0]["age"] == pair[1]["age"] {
                    prop_assert!(pair[0]["id"].as_u64() < pair[1]["id"].as_u64());
                }
            }
        }
    }
}
