use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::notice::{Notice, NoticeKind, NoticeProvider, use_notices};
use crate::session::{SessionContext, SessionProvider};

pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod session;
pub mod pages {
    pub mod admin;
    pub mod event_details;
    pub mod events;
    pub mod facilities;
    pub mod fighter_details;
    pub mod fighters;
    pub mod home;
    pub mod login;
    pub mod news;
    pub mod not_found;
    pub mod rankings;
}

use pages::admin::{
    codes::AdminCodes, dashboard::AdminDashboard, events::AdminEvents, fighters::AdminFighters,
    promoters::AdminPromoters, tickets::AdminTickets, titles::AdminTitles, venues::AdminVenues,
};
use pages::{
    event_details::EventDetails, events::Events, facilities::Facilities, fighter_details::FighterDetails,
    fighters::Fighters, home::Home, login::Login, news::News, not_found::NotFound, rankings::Rankings,
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/events")]
    Events,
    #[at("/events/:event_id")]
    EventDetails { event_id: String },
    #[at("/fighters")]
    Fighters,
    #[at("/fighters/:fighter_id")]
    FighterDetails { fighter_id: String },
    #[at("/rankings")]
    Rankings,
    #[at("/news")]
    News,
    #[at("/facilities")]
    Facilities,
    #[at("/admin")]
    AdminDashboard,
    #[at("/admin/events")]
    AdminEvents,
    #[at("/admin/venues")]
    AdminVenues,
    #[at("/admin/promoters")]
    AdminPromoters,
    #[at("/admin/fighters")]
    AdminFighters,
    #[at("/admin/tickets")]
    AdminTickets,
    #[at("/admin/codes")]
    AdminCodes,
    #[at("/admin/titles")]
    AdminTitles,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Back office pages; only admins get past [`AdminRoute`].
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminDashboard
                | Route::AdminEvents
                | Route::AdminVenues
                | Route::AdminPromoters
                | Route::AdminFighters
                | Route::AdminTickets
                | Route::AdminCodes
                | Route::AdminTitles
        )
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <NoticeProvider>
            <SessionProvider>
                <BrowserRouter>
                    <div class="app-container min-h-screen flex flex-col bg-gray-50">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </BrowserRouter>
            </SessionProvider>
        </NoticeProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Renders its children for admins and sends everyone else to the login page.
#[function_component(AdminRoute)]
pub fn admin_route(props: &Props) -> Html {
    let session = use_context::<SessionContext>();
    let notify = use_notices();
    let navigator = use_navigator();
    let (allowed, expired) = session
        .as_ref()
        .map(|s| (s.state.is_admin(), s.state.is_expired()))
        .unwrap_or((false, false));

    // Show a notice when the session expires
    use_effect_with(expired, move |expired| {
        if *expired {
            notify.emit(Notice::new("Your session has expired. Please log in again.", NoticeKind::Warning).with_duration(8000));
        }
        || ()
    });

    use_effect_with(allowed, move |allowed| {
        if !*allowed {
            if let Some(navigator) = navigator {
                navigator.push(&Route::Login);
            }
        }
        || ()
    });

    if allowed {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {}
    }
}

fn switch(route: Route) -> Html {
    debug!("Route switch: {:?}", route);
    let page = match route.clone() {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Events => html! { <Events /> },
        Route::EventDetails { event_id } => html! { <EventDetails {event_id} /> },
        Route::Fighters => html! { <Fighters /> },
        Route::FighterDetails { fighter_id } => html! { <FighterDetails {fighter_id} /> },
        Route::Rankings => html! { <Rankings /> },
        Route::News => html! { <News /> },
        Route::Facilities => html! { <Facilities /> },
        Route::AdminDashboard => html! { <AdminDashboard /> },
        Route::AdminEvents => html! { <AdminEvents /> },
        Route::AdminVenues => html! { <AdminVenues /> },
        Route::AdminPromoters => html! { <AdminPromoters /> },
        Route::AdminFighters => html! { <AdminFighters /> },
        Route::AdminTickets => html! { <AdminTickets /> },
        Route::AdminCodes => html! { <AdminCodes /> },
        Route::AdminTitles => html! { <AdminTitles /> },
        Route::NotFound => html! { <NotFound /> },
    };

    if route.is_admin() {
        html! { <AdminRoute>{page}</AdminRoute> }
    } else {
        page
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
