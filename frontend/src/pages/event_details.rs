use crate::components::error_banner::ErrorBanner;
use crate::hooks::{use_record, RecordLoad};
use crate::Route;
use shared::bracket::{group_into_brackets, Bracket};
use shared::EventDto;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventDetailsProps {
    pub event_id: String,
}

#[derive(Properties, PartialEq)]
pub struct BracketListProps {
    pub event: EventDto,
}

/// The fight card grouped by weight class.
#[function_component(BracketList)]
pub fn bracket_list(props: &BracketListProps) -> Html {
    let brackets = group_into_brackets(&props.event.bouts);
    if brackets.is_empty() {
        return html! { <p class="text-gray-500">{"The card has not been announced yet."}</p> };
    }

    html! {
        <div class="grid gap-4 md:grid-cols-2">
            {brackets.iter().map(|bracket: &Bracket| html! {
                <section key={bracket.weight_class.clone()} class="bg-white rounded-lg shadow-sm p-4">
                    <h3 class="font-semibold mb-2">
                        {bracket.weight_class.clone()}
                        if bracket.has_title_fight {
                            <span class="ml-2 text-xs px-2 py-0.5 rounded-full bg-yellow-100 text-yellow-800">{"Title"}</span>
                        }
                    </h3>
                    <ol class="space-y-1">
                        {bracket.bouts.iter().map(|bout| html! {
                            <li key={bout.id.clone()} class="text-sm">
                                <span class="text-gray-400 mr-2">{format!("#{}", bout.card_position)}</span>
                                {bout.matchup()}
                            </li>
                        }).collect::<Html>()}
                    </ol>
                </section>
            }).collect::<Html>()}
        </div>
    }
}

#[function_component(EventDetails)]
pub fn event_details(props: &EventDetailsProps) -> Html {
    let load = use_record::<EventDto>(props.event_id.clone());

    let body = match load {
        RecordLoad::Loading => html! { <p class="text-gray-500">{"Loading event..."}</p> },
        RecordLoad::Failed(e) => html! {
            <ErrorBanner message={format!("This event is not available: {}", e)} />
        },
        RecordLoad::Loaded(event) => html! {
            <>
                <header class="mb-6">
                    <h1 class="text-2xl font-semibold">{event.name.clone()}</h1>
                    <p class="text-gray-600">
                        {format!("{} · {}", event.date.format("%A %e %B %Y, %H:%M"), event.status)}
                    </p>
                    if let Some(main) = event.main_event() {
                        <p class="mt-2 font-medium">{format!("Main event: {}", main.matchup())}</p>
                    }
                </header>
                <BracketList event={event.clone()} />
            </>
        },
    };

    html! {
        <div class="container mx-auto px-4 py-6">
            <Link<Route> to={Route::Events} classes="text-sm text-blue-600 hover:underline">{"← All events"}</Link<Route>>
            <div class="mt-4">{body}</div>
        </div>
    }
}
