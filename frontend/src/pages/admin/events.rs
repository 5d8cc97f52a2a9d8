use crate::components::master_detail::MasterDetailContainer;
use crate::hooks::use_master_detail;
use crate::pages::event_details::BracketList;
use crate::pages::events::event_columns;
use shared::{Column, EventDto, RefreshPolicy};
use yew::prelude::*;

#[function_component(AdminEvents)]
pub fn admin_events() -> Html {
    let handle = use_master_detail::<EventDto>(RefreshPolicy::Refetch);
    let detail_columns = vec![
        Column::new("Event", "name"),
        Column::new("Date", "date"),
        Column::new("Venue", "venue_id"),
        Column::new("Promoter", "promoter_id"),
        Column::new("Status", "status"),
    ];
    let detail_extra = Callback::from(|event: EventDto| html! { <BracketList {event} /> });

    html! {
        <MasterDetailContainer<EventDto>
            {handle}
            title="Events"
            columns={event_columns()}
            {detail_columns}
            detail_extra={Some(detail_extra)}
        />
    }
}
