use crate::api::fighters::set_check_in;
use crate::components::master_detail::MasterDetailContainer;
use crate::components::notice::{use_notices, Notice};
use crate::hooks::use_master_detail;
use crate::pages::fighters::fighter_columns;
use log::warn;
use shared::{Column, FighterDto, RefreshPolicy};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Fighter roster with fight-night check-in.
#[function_component(AdminFighters)]
pub fn admin_fighters() -> Html {
    let handle = use_master_detail::<FighterDto>(RefreshPolicy::Refetch);
    let notify = use_notices();

    let view = handle.view();
    let checked_in = view.items.iter().filter(|f| f.checked_in).count();
    let total = view.items.len();

    let mut columns = fighter_columns();
    columns.truncate(4);
    columns.push(Column::new("Checked in", "checked_in"));
    columns.push(Column::new("At", "checked_in_at"));

    let row_actions = {
        let refetch = handle.refetch.clone();
        Callback::from(move |fighter: FighterDto| {
            let toggle = {
                let refetch = refetch.clone();
                let notify = notify.clone();
                let fighter = fighter.clone();
                Callback::from(move |_: MouseEvent| {
                    let refetch = refetch.clone();
                    let notify = notify.clone();
                    let id = fighter.id.clone();
                    let name = fighter.full_name();
                    let check_in = !fighter.checked_in;
                    spawn_local(async move {
                        match set_check_in(&id, check_in).await {
                            Ok(_) => {
                                let verb = if check_in { "checked in" } else { "check-in undone" };
                                notify.emit(Notice::success(format!("{} {}", name, verb)));
                                refetch.emit(());
                            }
                            Err(e) => {
                                warn!("Check-in for {} failed: {}", id, e);
                                notify.emit(Notice::error(format!("Could not update {}: {}", name, e)));
                            }
                        }
                    });
                })
            };
            html! {
                <button
                    onclick={toggle}
                    class={classes!(
                        "px-3", "py-1", "rounded", "text-sm",
                        if fighter.checked_in { "border border-gray-300 hover:bg-gray-50" } else { "bg-green-600 text-white hover:bg-green-700" }
                    )}
                >
                    {if fighter.checked_in { "Undo" } else { "Check in" }}
                </button>
            }
        })
    };

    html! {
        <>
            <div class="container mx-auto px-4 pt-6">
                <p class="text-sm text-gray-600">{format!("{} of {} fighters checked in", checked_in, total)}</p>
            </div>
            <MasterDetailContainer<FighterDto>
                handle={handle.clone()}
                title="Fighters"
                {columns}
                row_actions={Some(row_actions)}
            />
        </>
    }
}
