use crate::components::master_detail::MasterDetailContainer;
use crate::hooks::use_master_detail;
use shared::{Column, RefreshPolicy, VenueDto};
use yew::prelude::*;

#[function_component(AdminVenues)]
pub fn admin_venues() -> Html {
    let handle = use_master_detail::<VenueDto>(RefreshPolicy::Refetch);
    let columns = vec![
        Column::new("Venue", "name"),
        Column::new("City", "city"),
        Column::new("Address", "address"),
        Column::new("Capacity", "capacity"),
    ];

    html! {
        <MasterDetailContainer<VenueDto> {handle} title="Venues" {columns} />
    }
}
