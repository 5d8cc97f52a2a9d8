use crate::components::master_detail::MasterDetailContainer;
use crate::hooks::use_master_detail;
use shared::{Column, FacilityDto, RefreshPolicy};
use yew::prelude::*;

/// Training gyms directory.
#[function_component(Facilities)]
pub fn facilities() -> Html {
    let handle = use_master_detail::<FacilityDto>(RefreshPolicy::Refetch);
    let columns = vec![
        Column::new("Gym", "name"),
        Column::new("City", "city"),
        Column::new("Disciplines", "disciplines"),
    ];

    let detail_extra = Callback::from(|facility: FacilityDto| match facility.website {
        Some(url) => html! {
            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">{url}</a>
        },
        None => html! {},
    });

    html! {
        <MasterDetailContainer<FacilityDto>
            {handle}
            title="Training facilities"
            {columns}
            editable={false}
            detail_extra={Some(detail_extra)}
        />
    }
}
