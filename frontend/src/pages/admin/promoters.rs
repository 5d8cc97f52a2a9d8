use crate::components::master_detail::MasterDetailContainer;
use crate::hooks::use_master_detail;
use shared::{Column, PromoterDto, RefreshPolicy};
use yew::prelude::*;

#[function_component(AdminPromoters)]
pub fn admin_promoters() -> Html {
    // Small list, cheaper to patch in place than to reload
    let handle = use_master_detail::<PromoterDto>(RefreshPolicy::MergeLocal);
    let columns = vec![
        Column::new("Promoter", "name"),
        Column::new("Email", "contact_email"),
        Column::new("Phone", "phone"),
    ];

    html! {
        <MasterDetailContainer<PromoterDto> {handle} title="Promoters" {columns} />
    }
}
