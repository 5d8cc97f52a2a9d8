use crate::api::resource::{ApiResource, RestSource};
use crate::session::SessionContext;
use log::debug;
use shared::source::{load_collection, load_detail};
use shared::{FetchTicket, MasterDetail, MasterDetailAction, RecordSource, RefreshPolicy, SharedError};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Yew wrapper around the shared container reducer.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerState<R>(pub MasterDetail<R>);

impl<R: ApiResource> Reducible for ContainerState<R> {
    type Action = MasterDetailAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.clone().apply(action)))
    }
}

pub struct MasterDetailHandle<R: ApiResource> {
    pub state: UseReducerHandle<ContainerState<R>>,
    /// Starts a collection fetch; older in-flight fetches lose.
    pub refetch: Callback<()>,
    /// Loads one record by id into the detail view.
    pub open: Callback<String>,
}

impl<R: ApiResource> Clone for MasterDetailHandle<R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            refetch: self.refetch.clone(),
            open: self.open.clone(),
        }
    }
}

/// Equal while the container state is; the callbacks always target the same reducer.
impl<R: ApiResource> PartialEq for MasterDetailHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<R: ApiResource> MasterDetailHandle<R> {
    pub fn view(&self) -> &MasterDetail<R> {
        &self.state.0
    }

    pub fn dispatch(&self, action: MasterDetailAction<R>) {
        self.state.dispatch(action);
    }
}

/// Owns one collection of `R`: loads it on mount and again whenever a save
/// asks for a refresh.
#[hook]
pub fn use_master_detail<R: ApiResource>(policy: RefreshPolicy) -> MasterDetailHandle<R> {
    let session = use_context::<SessionContext>();
    let state = use_reducer(move || ContainerState(MasterDetail::<R>::new(policy)));
    let expire = session.map(|s| s.expire).unwrap_or_default();

    let refetch = {
        let state = state.clone();
        let expire = expire.clone();
        Callback::from(move |_: ()| {
            let ticket = FetchTicket::next();
            debug!("Loading {} list with {:?}", R::NAME, ticket);
            state.dispatch(MasterDetailAction::FetchStarted(ticket));
            let state = state.clone();
            let expire = expire.clone();
            spawn_local(async move {
                let action = load_collection(&RestSource::<R>::new(), ticket).await;
                if let MasterDetailAction::FetchResolved { result: Err(e), .. } = &action {
                    if e.is_unauthorized() {
                        expire.emit(());
                    }
                }
                state.dispatch(action);
            });
        })
    };

    let open = {
        let state = state.clone();
        let expire = expire.clone();
        Callback::from(move |id: String| {
            let ticket = FetchTicket::next();
            debug!("Loading {} {} with {:?}", R::NAME, id, ticket);
            state.dispatch(MasterDetailAction::DetailStarted(ticket));
            let state = state.clone();
            let expire = expire.clone();
            spawn_local(async move {
                let action = load_detail(&RestSource::<R>::new(), ticket, &id).await;
                if let MasterDetailAction::DetailResolved { result: Err(e), .. } = &action {
                    if e.is_unauthorized() {
                        expire.emit(());
                    }
                }
                state.dispatch(action);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    {
        let refetch = refetch.clone();
        use_effect_with(state.0.needs_refetch(), move |needs_refetch| {
            if *needs_refetch {
                refetch.emit(());
            }
            || ()
        });
    }

    MasterDetailHandle { state, refetch, open }
}

/// One record fetched by id for a standalone details page.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordLoad<R> {
    Loading,
    Loaded(R),
    Failed(SharedError),
}

#[hook]
pub fn use_record<R: ApiResource>(id: String) -> RecordLoad<R> {
    let load = use_state(|| RecordLoad::<R>::Loading);
    let latest_id = use_mut_ref(String::new);

    {
        let load = load.clone();
        use_effect_with(id, move |id| {
            *latest_id.borrow_mut() = id.clone();
            load.set(RecordLoad::Loading);
            let id = id.clone();
            spawn_local(async move {
                let result = RestSource::<R>::new().fetch_record(&id).await;
                // A newer id may have been requested meanwhile
                if *latest_id.borrow() != id {
                    debug!("Dropping stale {} response for {}", R::NAME, id);
                    return;
                }
                load.set(match result {
                    Ok(record) => RecordLoad::Loaded(record),
                    Err(e) => RecordLoad::Failed(e),
                });
            });
            || ()
        });
    }

    (*load).clone()
}
