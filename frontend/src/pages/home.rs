use crate::hooks::use_master_detail;
use crate::Route;
use chrono::Utc;
use shared::{EventDto, NewsArticleDto, RefreshPolicy};
use yew::prelude::*;
use yew_router::prelude::*;

const UPCOMING_SHOWN: usize = 3;
const HEADLINES_SHOWN: usize = 5;

#[function_component(Home)]
pub fn home() -> Html {
    let events = use_master_detail::<EventDto>(RefreshPolicy::Refetch);
    let news = use_master_detail::<NewsArticleDto>(RefreshPolicy::Refetch);

    let now = Utc::now();
    let mut upcoming: Vec<&EventDto> = events.view().items.iter().filter(|e| e.is_upcoming(now)).collect();
    upcoming.sort_by_key(|e| e.date);

    let mut headlines: Vec<&NewsArticleDto> = news.view().items.iter().collect();
    headlines.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    html! {
        <div class="container mx-auto px-4 py-6 grid gap-8 md:grid-cols-3">
            <section class="md:col-span-2">
                <h2 class="text-lg font-semibold mb-3">{"Upcoming fight nights"}</h2>
                if upcoming.is_empty() {
                    <p class="text-gray-500">{"No events scheduled."}</p>
                }
                <div class="space-y-3">
                    {upcoming.iter().take(UPCOMING_SHOWN).map(|event| html! {
                        <Link<Route>
                            key={event.id.clone()}
                            to={Route::EventDetails { event_id: event.id.clone() }}
                            classes="block bg-white rounded-lg shadow-sm p-4 hover:shadow-md"
                        >
                            <p class="font-medium">{event.name.clone()}</p>
                            <p class="text-sm text-gray-600">{event.date.format("%a %e %b %Y, %H:%M").to_string()}</p>
                            if let Some(main) = event.main_event() {
                                <p class="text-sm mt-1">{main.matchup()}</p>
                            }
                        </Link<Route>>
                    }).collect::<Html>()}
                </div>
            </section>
            <section>
                <h2 class="text-lg font-semibold mb-3">{"Latest news"}</h2>
                <ul class="space-y-2">
                    {headlines.iter().take(HEADLINES_SHOWN).map(|article| html! {
                        <li key={article.id.clone()} class="bg-white rounded-lg shadow-sm p-3">
                            <p class="font-medium">{article.title.clone()}</p>
                            <p class="text-xs text-gray-500">{article.published_at.format("%e %b %Y").to_string()}</p>
                        </li>
                    }).collect::<Html>()}
                </ul>
                <Link<Route> to={Route::News} classes="text-sm text-blue-600 hover:underline">{"All news"}</Link<Route>>
            </section>
        </div>
    }
}
