use crate::components::error_banner::ErrorBanner;
use crate::components::sortable_table::SortableTable;
use crate::hooks::use_master_detail;
use crate::Route;
use shared::dto::ranking::by_division;
use shared::{Column, ListStatus, RankingDto, RefreshPolicy};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Rankings)]
pub fn rankings() -> Html {
    let navigator = use_navigator();
    let rankings = use_master_detail::<RankingDto>(RefreshPolicy::Refetch);
    let view = rankings.view();

    // Rank 0 is the champion
    let columns = vec![
        Column::new("Rank", "rank"),
        Column::new("Fighter", "fighter_name"),
        Column::new("Points", "points"),
    ];

    let on_activate = Callback::from(move |ranking: RankingDto| {
        if ranking.fighter_id.is_empty() {
            return;
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::FighterDetails { fighter_id: ranking.fighter_id });
        }
    });

    let body = match &view.status {
        ListStatus::Failed(message) => html! {
            <ErrorBanner message={message.clone()} on_retry={rankings.refetch.clone()} />
        },
        status if status.is_busy() && view.items.is_empty() => html! {
            <p class="text-gray-500">{"Loading rankings..."}</p>
        },
        _ => by_division(&view.items)
            .into_iter()
            .map(|(division, mut rows)| {
                rows.sort_by_key(|r| r.rank);
                html! {
                    <section key={division} class="mb-8">
                        <h2 class="text-lg font-semibold mb-2">{division}</h2>
                        <SortableTable<RankingDto>
                            records={rows}
                            columns={columns.clone()}
                            on_activate={on_activate.clone()}
                            searchable={false}
                        />
                    </section>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <div class="container mx-auto px-4 py-6">
            <h1 class="text-xl font-medium mb-4">{"Rankings"}</h1>
            {body}
        </div>
    }
}
