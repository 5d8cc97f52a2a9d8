//! Generic list ↔ create/detail/edit container.
//!
//! The page owns the [`MasterDetailHandle`] (so row actions can reach the
//! same reducer); this component only draws whichever view mode is active
//! and runs submissions.

use crate::api::resource::{ApiResource, RestSource};
use crate::components::entity_form::EntityForm;
use crate::components::error_banner::ErrorBanner;
use crate::components::notice::{use_notices, Notice};
use crate::components::record_details::RecordDetails;
use crate::components::sortable_table::SortableTable;
use crate::hooks::MasterDetailHandle;
use crate::session::SessionContext;
use log::{debug, warn};
use shared::{Column, DetailError, FormModel, ListStatus, MasterDetailAction, RecordSource, SharedError, ViewMode};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MasterDetailProps<R: ApiResource + FormModel + Default> {
    pub handle: MasterDetailHandle<R>,
    pub title: AttrValue,
    pub columns: Vec<Column>,
    /// Fields listed on the detail view; the table columns when empty.
    #[prop_or_default]
    pub detail_columns: Vec<Column>,
    #[prop_or(true)]
    pub editable: bool,
    #[prop_or_default]
    pub row_actions: Option<Callback<R, Html>>,
    /// Extra content under the detail listing.
    #[prop_or_default]
    pub detail_extra: Option<Callback<R, Html>>,
}

#[function_component(MasterDetailContainer)]
pub fn master_detail_container<R>(props: &MasterDetailProps<R>) -> Html
where
    R: ApiResource + FormModel + Default,
{
    let session = use_context::<SessionContext>();
    let notify = use_notices();
    let saving = use_state(|| false);
    let server_error = use_state(|| None::<SharedError>);
    let handle = props.handle.clone();
    let view = handle.view();

    let dispatch = {
        let handle = handle.clone();
        let server_error = server_error.clone();
        move |action: MasterDetailAction<R>| {
            let handle = handle.clone();
            let server_error = server_error.clone();
            Callback::from(move |_: MouseEvent| {
                server_error.set(None);
                handle.dispatch(action.clone());
            })
        }
    };

    let on_submit = {
        let handle = handle.clone();
        let saving = saving.clone();
        let server_error = server_error.clone();
        let expire = session.map(|s| s.expire).unwrap_or_default();
        Callback::from(move |record: R| {
            let handle = handle.clone();
            let saving = saving.clone();
            let server_error = server_error.clone();
            let notify = notify.clone();
            let expire = expire.clone();
            saving.set(true);
            server_error.set(None);
            spawn_local(async move {
                match RestSource::<R>::new().submit_record(&record).await {
                    Ok(saved) => {
                        debug!("Saved {} {}", R::NAME, saved.record_id());
                        notify.emit(Notice::success(format!("Saved {}", R::NAME)));
                        handle.dispatch(MasterDetailAction::SubmitSucceeded(saved));
                    }
                    Err(e) => {
                        warn!("Failed to save {}: {}", R::NAME, e);
                        if e.is_unauthorized() {
                            expire.emit(());
                        }
                        server_error.set(Some(e));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_cancel = {
        let handle = handle.clone();
        let server_error = server_error.clone();
        Callback::from(move |_: ()| {
            server_error.set(None);
            handle.dispatch(MasterDetailAction::Cancel);
        })
    };

    let body = match view.mode {
        ViewMode::List => {
            let on_activate = {
                let open = handle.open.clone();
                Callback::from(move |record: R| open.emit(record.record_id().into_owned()))
            };
            let list = match &view.status {
                ListStatus::Failed(message) => html! {
                    <ErrorBanner message={format!("Could not load {} list: {}", R::NAME, message)} on_retry={handle.refetch.clone()} />
                },
                ListStatus::Loading | ListStatus::Idle => html! {
                    <p class="text-gray-500 py-6 text-center">{"Loading..."}</p>
                },
                ListStatus::Refreshing | ListStatus::Ready => html! {
                    <>
                        if view.status == ListStatus::Refreshing {
                            <p class="text-sm text-gray-500 mb-2">{"Refreshing..."}</p>
                        }
                        <SortableTable<R>
                            records={view.items.clone()}
                            columns={props.columns.clone()}
                            {on_activate}
                            row_actions={props.row_actions.clone()}
                        />
                    </>
                },
            };
            html! {
                <>
                    <div class="flex justify-between items-center mb-4">
                        <h1 class="text-xl font-medium">{props.title.clone()}</h1>
                        if props.editable {
                            <button onclick={dispatch(MasterDetailAction::ShowCreate)} class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                                {format!("New {}", R::NAME)}
                            </button>
                        }
                    </div>
                    {list}
                </>
            }
        }
        ViewMode::Create => html! {
            <EntityForm<R>
                title={format!("New {}", R::NAME)}
                base={R::default()}
                {on_submit}
                {on_cancel}
                server_error={(*server_error).clone()}
                saving={*saving}
            />
        },
        ViewMode::Edit => match &view.selected {
            Some(record) => html! {
                <EntityForm<R>
                    key={record.record_id().into_owned()}
                    title={format!("Edit {}", R::NAME)}
                    base={record.clone()}
                    {on_submit}
                    {on_cancel}
                    server_error={(*server_error).clone()}
                    saving={*saving}
                />
            },
            None => html! { <ErrorBanner message={format!("No {} selected", R::NAME)} /> },
        },
        ViewMode::Detail => {
            let back = html! {
                <button onclick={dispatch(MasterDetailAction::ShowList)} class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50">
                    {"Back to list"}
                </button>
            };
            match (&view.selected, &view.detail_error) {
                (Some(record), _) => {
                    let columns = if props.detail_columns.is_empty() {
                        props.columns.clone()
                    } else {
                        props.detail_columns.clone()
                    };
                    html! {
                        <div class="bg-white rounded-lg shadow-sm p-6">
                            <RecordDetails<R> record={record.clone()} {columns} />
                            if let Some(extra) = &props.detail_extra {
                                <div class="mt-6">{extra.emit(record.clone())}</div>
                            }
                            <div class="flex gap-2 mt-6">
                                if props.editable {
                                    <button onclick={dispatch(MasterDetailAction::ShowEdit(record.clone()))} class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                                        {"Edit"}
                                    </button>
                                }
                                {back}
                            </div>
                        </div>
                    }
                }
                (None, Some(DetailError::Failed(message))) => html! {
                    <div class="space-y-4">
                        <ErrorBanner message={format!("Could not load this {}. {}", R::NAME, message)} />
                        {back}
                    </div>
                },
                (None, error) => html! {
                    <div class="space-y-4">
                        <ErrorBanner message={format!(
                            "This {} is no longer available. {}",
                            R::NAME,
                            error.as_ref().map(DetailError::message).unwrap_or_default()
                        )} />
                        {back}
                    </div>
                },
            }
        }
    };

    html! {
        <div class="container mx-auto px-4 py-6">
            {body}
        </div>
    }
}
