use crate::components::error_banner::ErrorBanner;
use crate::components::sortable_table::SortableTable;
use crate::hooks::use_master_detail;
use crate::Route;
use shared::{Column, EventDto, ListStatus, RefreshPolicy};
use yew::prelude::*;
use yew_router::prelude::*;

pub fn event_columns() -> Vec<Column> {
    vec![
        Column::new("Event", "name"),
        Column::new("Date", "date"),
        Column::new("Main event", "main_event"),
        Column::new("Bouts", "bouts"),
        Column::new("Status", "status"),
    ]
}

#[function_component(Events)]
pub fn events() -> Html {
    let navigator = use_navigator();
    let events = use_master_detail::<EventDto>(RefreshPolicy::Refetch);
    let view = events.view();

    let on_activate = Callback::from(move |event: EventDto| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::EventDetails { event_id: event.id });
        }
    });

    html! {
        <div class="container mx-auto px-4 py-6">
            <h1 class="text-xl font-medium mb-4">{"Events"}</h1>
            {match &view.status {
                ListStatus::Failed(message) => html! {
                    <ErrorBanner message={message.clone()} on_retry={events.refetch.clone()} />
                },
                status if status.is_busy() && view.items.is_empty() => html! {
                    <p class="text-gray-500">{"Loading events..."}</p>
                },
                _ => html! {
                    <SortableTable<EventDto> records={view.items.clone()} columns={event_columns()} {on_activate} />
                },
            }}
        </div>
    }
}
