//! The one table every list in the app is drawn with.
//!
//! Records arrive by value from the owning page; the table keeps only its own
//! [`TableQuery`] (search text, sort, page) and hands activations back through
//! `on_activate`.

use crate::components::pager::Pager;
use crate::components::search_box::SearchBox;
use crate::config::Config;
use shared::{Column, SortDirection, TableQuery, TableRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SortableTableProps<R: TableRecord + Clone + PartialEq + 'static> {
    pub records: Vec<R>,
    pub columns: Vec<Column>,
    /// Fired when the user clicks the activation link in a row's first cell.
    pub on_activate: Callback<R>,
    /// Extra per-row controls rendered in a trailing cell.
    #[prop_or_default]
    pub row_actions: Option<Callback<R, Html>>,
    #[prop_or(Config::DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
    #[prop_or(true)]
    pub searchable: bool,
    #[prop_or(AttrValue::Static("Nothing to show yet."))]
    pub empty_message: AttrValue,
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

#[function_component(SortableTable)]
pub fn sortable_table<R>(props: &SortableTableProps<R>) -> Html
where
    R: TableRecord + Clone + PartialEq + 'static,
{
    let page_size = props.page_size;
    let query = use_state(move || TableQuery::with_page_size(page_size));

    let on_search = {
        let query = query.clone();
        Callback::from(move |text: String| query.set(query.searched(text)))
    };

    let on_page = {
        let query = query.clone();
        Callback::from(move |page: u32| query.set(query.on_page(page)))
    };

    let page = query.apply(&props.records, &props.columns);
    let first_index = page.first_index();
    let last_index = page.last_index();
    let has_actions = props.row_actions.is_some();

    let header = props.columns.iter().map(|column| {
        let onclick = {
            let query = query.clone();
            let key = column.key.clone();
            Callback::from(move |_: MouseEvent| query.set(query.sorted_by(&key)))
        };
        let direction = query.sort.direction_for(&column.key);
        let aria_sort = match direction {
            Some(SortDirection::Asc) => "ascending",
            Some(SortDirection::Desc) => "descending",
            None => "none",
        };
        html! {
            <th key={column.key.clone()} aria-sort={aria_sort} class="px-4 py-2 text-left text-sm font-semibold text-gray-700">
                <button type="button" {onclick} class="hover:text-blue-600">
                    {format!("{}{}", column.label, sort_indicator(direction))}
                </button>
            </th>
        }
    });

    let rows = page.items.iter().map(|row| {
        let record = row.record.clone();
        let activate = {
            let on_activate = props.on_activate.clone();
            let record = record.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_activate.emit(record.clone());
            })
        };
        let cells = row.cells.iter().enumerate().map(|(i, cell)| {
            if i == 0 {
                html! {
                    <td class="px-4 py-2">
                        <a href="#" onclick={activate.clone()} class="text-blue-600 hover:underline font-medium">
                            {if cell.is_empty() { "(open)".to_string() } else { cell.clone() }}
                        </a>
                    </td>
                }
            } else {
                html! { <td class="px-4 py-2 text-gray-800">{cell.clone()}</td> }
            }
        });
        html! {
            <tr key={row.record.record_id().into_owned()} class="border-t border-gray-100 hover:bg-gray-50">
                {for cells}
                if let Some(actions) = &props.row_actions {
                    <td class="px-4 py-2 text-right">{actions.emit(record.clone())}</td>
                }
            </tr>
        }
    });

    html! {
        <div class="bg-white rounded-lg shadow-sm p-4">
            if props.searchable {
                <SearchBox value={query.search.clone()} {on_search} />
            }
            if page.total == 0 {
                <p class="text-gray-500 py-6 text-center">
                    {if query.search.is_empty() { props.empty_message.to_string() } else { format!("No matches for \"{}\".", query.search) }}
                </p>
            } else {
                <div class="overflow-x-auto">
                    <table class="min-w-full">
                        <thead class="bg-gray-50">
                            <tr>
                                {for header}
                                if has_actions {
                                    <th class="px-4 py-2"></th>
                                }
                            </tr>
                        </thead>
                        <tbody>{for rows}</tbody>
                    </table>
                </div>
            }
            <Pager
                page={page.page}
                total_pages={page.total_pages}
                total={page.total}
                {first_index}
                {last_index}
                {on_page}
            />
        </div>
    }
}
