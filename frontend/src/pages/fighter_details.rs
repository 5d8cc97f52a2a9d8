use crate::components::error_banner::ErrorBanner;
use crate::components::record_details::RecordDetails;
use crate::hooks::{use_record, RecordLoad};
use crate::pages::fighters::fighter_columns;
use crate::Route;
use shared::{Column, FighterDto};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FighterDetailsProps {
    pub fighter_id: String,
}

#[function_component(FighterDetails)]
pub fn fighter_details(props: &FighterDetailsProps) -> Html {
    let load = use_record::<FighterDto>(props.fighter_id.clone());

    let body = match load {
        RecordLoad::Loading => html! { <p class="text-gray-500">{"Loading fighter..."}</p> },
        RecordLoad::Failed(e) => html! {
            <ErrorBanner message={format!("This fighter is not available: {}", e)} />
        },
        RecordLoad::Loaded(fighter) => {
            let mut columns = fighter_columns();
            columns.push(Column::new("Nationality", "nationality"));
            html! {
                <div class="bg-white rounded-lg shadow-sm p-6">
                    <h1 class="text-2xl font-semibold">{fighter.full_name()}</h1>
                    <p class="text-gray-600 mb-4">{format!("{} · {}", fighter.weight_class, fighter.record_line())}</p>
                    <RecordDetails<FighterDto> record={fighter} {columns} />
                </div>
            }
        }
    };

    html! {
        <div class="container mx-auto px-4 py-6">
            <Link<Route> to={Route::Fighters} classes="text-sm text-blue-600 hover:underline">{"← All fighters"}</Link<Route>>
            <div class="mt-4">{body}</div>
        </div>
    }
}
