use crate::components::master_detail::MasterDetailContainer;
use crate::hooks::use_master_detail;
use shared::{Column, RefreshPolicy, TitleHolderDto};
use yew::prelude::*;

/// Official title holders per division.
#[function_component(AdminTitles)]
pub fn admin_titles() -> Html {
    let handle = use_master_detail::<TitleHolderDto>(RefreshPolicy::Refetch);
    let columns = vec![
        Column::new("Division", "weight_class"),
        Column::new("Champion", "fighter_name"),
        Column::new("Since", "since"),
        Column::new("Defenses", "defenses"),
    ];

    html! {
        <MasterDetailContainer<TitleHolderDto> {handle} title="Title holders" {columns} />
    }
}
