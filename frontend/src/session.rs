use crate::api::auth;
use crate::api::utils::{TOKEN_KEY, USER_KEY};
use gloo_storage::{LocalStorage, Storage};
use log::{error, info};
use shared::session::{SessionAction, SessionState};
use shared::UserDto;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

/// Yew wrapper around the shared session reducer. Storage side effects live
/// here so the reducer itself stays pure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session(pub SessionState);

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match &action {
            SessionAction::LoginSucceeded(response) => {
                if let Err(e) = LocalStorage::set(USER_KEY, &response.user) {
                    error!("Failed to store user in local storage: {}", e);
                }
                if let Err(e) = LocalStorage::set(TOKEN_KEY, &response.token) {
                    error!("Failed to store token in local storage: {}", e);
                }
            }
            SessionAction::Logout | SessionAction::Expired => {
                LocalStorage::delete(USER_KEY);
                LocalStorage::delete(TOKEN_KEY);
            }
            _ => {}
        }
        Rc::new(Self(self.0.apply(action)))
    }
}

fn restore_from_storage() -> Session {
    let user = LocalStorage::get::<UserDto>(USER_KEY).ok();
    let token = LocalStorage::get::<String>(TOKEN_KEY).ok();
    match (user, token) {
        (Some(user), Some(token)) => {
            info!("Restored session for {}", user.email);
            Session(SessionState::default().apply(SessionAction::Restore { user, token }))
        }
        _ => Session::default(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    /// Called by data views when the API answers 401/403.
    pub expire: Callback<()>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer_eq(restore_from_storage);

    let login = {
        let session = session.clone();
        Callback::from(move |(email, password): (String, String)| {
            let session = session.clone();
            session.dispatch(SessionAction::LoginStarted);
            spawn_local(async move {
                match auth::login(email, password).await {
                    Ok(response) => {
                        info!("Signed in as {}", response.user.email);
                        session.dispatch(SessionAction::LoginSucceeded(response));
                    }
                    Err(e) => session.dispatch(SessionAction::LoginFailed(e.to_string())),
                }
            });
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            let session = session.clone();
            spawn_local(async move {
                auth::logout().await;
                session.dispatch(SessionAction::Logout);
            });
        })
    };

    let expire = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::Expired))
    };

    let context = SessionContext {
        state: session.0.clone(),
        login,
        logout,
        expire,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
