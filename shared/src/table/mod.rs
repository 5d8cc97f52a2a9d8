//! Generic sortable/searchable/paginated table core.
//!
//! Every list in the application (fighters, events, venues, codes, rankings, ...)
//! goes through the same pipeline: filter by the search box, stable-sort by the
//! active [`SortState`], then slice to the requested page.

pub mod pagination;
pub mod record;
pub mod search;
pub mod sort;

pub use pagination::{page_window, paginate, Page, PageRequest};
pub use record::{Column, FieldValue, TableRecord};
pub use search::filter_records;
pub use sort::{
    compare_records, compare_values, locale_compare, render, render_row, sorted_view, toggle_sort, RenderedRow,
    SortDirection, SortState,
};

use serde::{Deserialize, Serialize};

/// Everything the user controls about one table instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    pub search: String,
    pub sort: SortState,
    pub page: PageRequest,
}

impl TableQuery {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page: PageRequest::new(1, page_size),
            ..Self::default()
        }
    }

    /// New search text; the result set changes so the pager restarts.
    pub fn searched(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            sort: self.sort.clone(),
            page: self.page.first(),
        }
    }

    pub fn sorted_by(&self, key: &str) -> Self {
        Self {
            sort: toggle_sort(&self.sort, key),
            ..self.clone()
        }
    }

    pub fn on_page(&self, page: u32) -> Self {
        Self {
            page: PageRequest::new(page, self.page.page_size),
            ..self.clone()
        }
    }

    /// Filter, sort and paginate `collection` for display.
    pub fn apply<'a, R: TableRecord>(&self, collection: &'a [R], columns: &[Column]) -> Page<RenderedRow<'a, R>> {
        let mut rows = filter_records(collection, columns, &self.search);
        sort::sort_refs(&mut rows, &self.sort);
        let page = paginate(rows, self.page);
        Page {
            items: page
                .items
                .into_iter()
                .map(|record| render_row(record, columns))
                .collect(),
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn fighters() -> Vec<Value> {
        (1..=25)
            .map(|i| json!({"id": i, "name": format!("Fighter {:02}", i), "gym": if i % 2 == 0 { "Even Gym" } else { "Odd Gym" }}))
            .collect()
    }

    fn columns() -> Vec<Column> {
        vec![Column::new("Name", "name"), Column::new("Gym", "gym")]
    }

    #[test]
    fn test_pipeline_filters_then_sorts_then_pages() {
        let data = fighters();
        let query = TableQuery::with_page_size(5).searched("even").sorted_by("name").sorted_by("name");
        let page = query.apply(&data, &columns());
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].cells[0], "Fighter 24");
        assert_eq!(page.items[4].cells[0], "Fighter 16");
    }

    #[test]
    fn test_new_search_resets_page() {
        let query = TableQuery::with_page_size(5).on_page(3).searched("odd");
        assert_eq!(query.page, PageRequest::new(1, 5));
    }

    #[test]
    fn test_sort_survives_search_changes() {
        let query = TableQuery::default().sorted_by("gym").searched("x");
        assert_eq!(query.sort, SortState::by("gym", SortDirection::Asc));
    }
}
