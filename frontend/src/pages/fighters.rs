use crate::components::error_banner::ErrorBanner;
use crate::components::sortable_table::SortableTable;
use crate::hooks::use_master_detail;
use crate::Route;
use shared::{Column, FighterDto, ListStatus, RefreshPolicy};
use yew::prelude::*;
use yew_router::prelude::*;

pub fn fighter_columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name"),
        Column::new("Nickname", "nickname"),
        Column::new("Division", "weight_class"),
        Column::new("Record", "record"),
        Column::new("Gym", "gym"),
        Column::new("Age", "age"),
    ]
}

#[function_component(Fighters)]
pub fn fighters() -> Html {
    let navigator = use_navigator();
    let fighters = use_master_detail::<FighterDto>(RefreshPolicy::Refetch);
    let view = fighters.view();

    let on_activate = Callback::from(move |fighter: FighterDto| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::FighterDetails { fighter_id: fighter.id });
        }
    });

    html! {
        <div class="container mx-auto px-4 py-6">
            <h1 class="text-xl font-medium mb-4">{"Fighters"}</h1>
            if let ListStatus::Failed(message) = &view.status {
                <ErrorBanner message={message.clone()} on_retry={fighters.refetch.clone()} />
            } else {
                <SortableTable<FighterDto>
                    records={view.items.clone()}
                    columns={fighter_columns()}
                    {on_activate}
                    empty_message={if view.status.is_busy() { "Loading fighters..." } else { "No fighters yet." }}
                />
            }
        </div>
    }
}
