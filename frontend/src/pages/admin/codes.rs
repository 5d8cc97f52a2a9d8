use crate::api::resource::RestSource;
use crate::components::error_banner::ErrorBanner;
use crate::components::master_detail::MasterDetailContainer;
use crate::components::notice::{use_notices, Notice};
use crate::hooks::use_master_detail;
use log::warn;
use shared::qr::reconstruct_data_url;
use shared::{Column, PaymentCodeDto, RecordSource, RefreshPolicy};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct QrImageProps {
    code: PaymentCodeDto,
}

#[function_component(QrImage)]
fn qr_image(props: &QrImageProps) -> Html {
    let Some(raw) = props.code.qr_png.as_deref() else {
        return html! { <p class="text-sm text-gray-500">{"No QR code issued for this payment code."}</p> };
    };
    match reconstruct_data_url(raw) {
        Ok(src) => html! {
            <figure class="inline-block text-center">
                <img {src} alt={format!("QR code for {}", props.code.code)} class="w-48 h-48" />
                <figcaption class="font-mono mt-2">{props.code.code.clone()}</figcaption>
            </figure>
        },
        Err(e) => {
            warn!("Unreadable QR payload for {}: {}", props.code.code, e);
            html! { <ErrorBanner message={format!("The QR image for this code could not be read: {}", e)} /> }
        }
    }
}

/// Cash-payment codes sold at the box office.
#[function_component(AdminCodes)]
pub fn admin_codes() -> Html {
    let handle = use_master_detail::<PaymentCodeDto>(RefreshPolicy::Refetch);
    let notify = use_notices();

    let columns = vec![
        Column::new("Code", "code"),
        Column::new("Event", "event_id"),
        Column::new("Amount", "amount"),
        Column::new("Redeemed", "redeemed"),
        Column::new("Issued", "created_at"),
    ];

    let row_actions = {
        let refetch = handle.refetch.clone();
        Callback::from(move |code: PaymentCodeDto| {
            if code.redeemed {
                return html! { <span class="text-sm text-gray-400">{"Used"}</span> };
            }
            let onclick = {
                let refetch = refetch.clone();
                let notify = notify.clone();
                let code = code.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut updated = code.clone();
                    if let Err(e) = updated.redeem() {
                        notify.emit(Notice::error(e.to_string()));
                        return;
                    }
                    let refetch = refetch.clone();
                    let notify = notify.clone();
                    spawn_local(async move {
                        match RestSource::<PaymentCodeDto>::new().submit_record(&updated).await {
                            Ok(saved) => {
                                notify.emit(Notice::success(format!("Code {} redeemed", saved.code)));
                                refetch.emit(());
                            }
                            Err(e) => notify.emit(Notice::error(format!("Could not redeem {}: {}", updated.code, e))),
                        }
                    });
                })
            };
            html! {
                <button {onclick} class="px-3 py-1 rounded text-sm bg-green-600 text-white hover:bg-green-700">
                    {"Redeem"}
                </button>
            }
        })
    };

    let detail_extra = Callback::from(|code: PaymentCodeDto| html! { <QrImage {code} /> });

    html! {
        <MasterDetailContainer<PaymentCodeDto>
            {handle}
            title="Payment codes"
            {columns}
            row_actions={Some(row_actions)}
            detail_extra={Some(detail_extra)}
        />
    }
}
