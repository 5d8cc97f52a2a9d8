use shared::{Column, TableRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RecordDetailsProps<R: TableRecord + PartialEq + 'static> {
    pub record: R,
    pub columns: Vec<Column>,
}

/// Read-only label/value listing of a record.
#[function_component(RecordDetails)]
pub fn record_details<R>(props: &RecordDetailsProps<R>) -> Html
where
    R: TableRecord + PartialEq + 'static,
{
    html! {
        <dl class="grid grid-cols-1 sm:grid-cols-3 gap-x-6 gap-y-3">
            {props.columns.iter().map(|column| {
                let value = props.record.field(&column.key).to_string();
                html! {
                    <>
                        <dt class="text-sm font-medium text-gray-500">{column.label.clone()}</dt>
                        <dd class="sm:col-span-2 text-gray-900">{if value.is_empty() { "-".to_string() } else { value }}</dd>
                    </>
                }
            }).collect::<Html>()}
        </dl>
    }
}
