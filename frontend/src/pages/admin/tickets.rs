use crate::api::tickets::redeem_ticket;
use crate::components::master_detail::MasterDetailContainer;
use crate::components::notice::{use_notices, Notice};
use crate::hooks::use_master_detail;
use chrono::Utc;
use log::debug;
use shared::dto::ticket::find_ticket;
use shared::{Column, RefreshPolicy, TicketDto};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Door scanning: look a ticket up by code and admit its holder once.
#[function_component(AdminTickets)]
pub fn admin_tickets() -> Html {
    let handle = use_master_detail::<TicketDto>(RefreshPolicy::Refetch);
    let notify = use_notices();
    let code = use_state(String::new);
    let message = use_state(|| None::<(bool, String)>);
    let busy = use_state(|| false);

    let columns = vec![
        Column::new("Code", "code"),
        Column::new("Holder", "holder_name"),
        Column::new("Tier", "tier"),
        Column::new("Event", "event_id"),
        Column::new("Redeemed", "redeemed"),
        Column::new("At", "redeemed_at"),
    ];

    let known = find_ticket(&handle.view().items, &code).cloned();

    let on_code_input = {
        let code = code.clone();
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
            message.set(None);
        })
    };

    let onsubmit = {
        let code = code.clone();
        let message = message.clone();
        let busy = busy.clone();
        let refetch = handle.refetch.clone();
        let known = known.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Already-used tickets are refused without a round trip
            if let Some(mut ticket) = known.clone() {
                if let Err(e) = ticket.redeem(Utc::now()) {
                    message.set(Some((false, e.to_string())));
                    return;
                }
            }
            let entered = (*code).clone();
            let code = code.clone();
            let message = message.clone();
            let busy = busy.clone();
            let refetch = refetch.clone();
            let notify = notify.clone();
            busy.set(true);
            spawn_local(async move {
                match redeem_ticket(&entered).await {
                    Ok(ticket) => {
                        debug!("Admitted ticket {}", ticket.code);
                        notify.emit(Notice::success(format!("Admitted {} ({})", ticket.holder_name, ticket.tier)));
                        message.set(Some((true, format!("Welcome, {}", ticket.holder_name))));
                        code.set(String::new());
                        refetch.emit(());
                    }
                    Err(e) => message.set(Some((false, e.to_string()))),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <>
            <div class="container mx-auto px-4 pt-6">
                <form {onsubmit} class="bg-white rounded-lg shadow-sm p-4 flex flex-col md:flex-row gap-3 items-start md:items-center">
                    <input
                        type="text"
                        placeholder="Ticket code"
                        value={(*code).clone()}
                        oninput={on_code_input}
                        class="flex-1 px-4 py-2 border border-gray-300 rounded-lg font-mono uppercase"
                    />
                    <button type="submit" disabled={*busy || code.trim().is_empty()} class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50">
                        {if *busy { "Checking..." } else { "Redeem" }}
                    </button>
                    if let Some(ticket) = &known {
                        <span class="text-sm text-gray-600">
                            {format!("{} · {}{}", ticket.holder_name, ticket.tier, if ticket.is_redeemed() { " · already used" } else { "" })}
                        </span>
                    }
                </form>
                if let Some((ok, text)) = &*message {
                    <p class={classes!("mt-2", "text-sm", if *ok { "text-green-700" } else { "text-red-700" })}>{text.clone()}</p>
                }
            </div>
            <MasterDetailContainer<TicketDto> {handle} title="Tickets" {columns} />
        </>
    }
}
