use super::record::{Column, TableRecord};

/// Whether any of `columns` of `record` contains `needle` (already lowercased).
fn matches<R: TableRecord>(record: &R, columns: &[Column], needle: &str) -> bool {
    columns.iter().any(|column| {
        record
            .field(&column.key)
            .to_string()
            .to_lowercase()
            .contains(needle)
    })
}

/// Case-insensitive substring search across the displayed columns.
/// A blank query keeps every record, in order.
pub fn filter_records<'a, R: TableRecord>(collection: &'a [R], columns: &[Column], query: &str) -> Vec<&'a R> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return collection.iter().collect();
    }
    collection
        .iter()
        .filter(|record| matches(*record, columns, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn venues() -> Vec<Value> {
        vec![
            json!({"id": "v1", "name": "Cage Arena", "city": "Austin"}),
            json!({"id": "v2", "name": "The Pit", "city": "Boston"}),
            json!({"id": "v3", "name": "Octagon Hall", "city": "Houston", "secret": "arena"}),
        ]
    }

    fn columns() -> Vec<Column> {
        vec![Column::new("Name", "name"), Column::new("City", "city")]
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let data = venues();
        assert_eq!(filter_records(&data, &columns(), "   ").len(), 3);
    }

    #[test]
    fn test_matches_any_column_case_insensitively() {
        let data = venues();
        let hits: Vec<_> = filter_records(&data, &columns(), " STON ")
            .into_iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(hits, vec!["v2", "v3"]);
    }

    #[test]
    fn test_only_listed_columns_are_searched() {
        let data = venues();
        let hits: Vec<_> = filter_records(&data, &columns(), "arena")
            .into_iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(hits, vec!["v1"]);
    }
}
