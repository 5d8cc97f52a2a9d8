use crate::session::SessionContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn public_links() -> Vec<(Route, &'static str)> {
    vec![
        (Route::Events, "Events"),
        (Route::Fighters, "Fighters"),
        (Route::Rankings, "Rankings"),
        (Route::News, "News"),
        (Route::Facilities, "Gyms"),
    ]
}

fn admin_links() -> Vec<(Route, &'static str)> {
    vec![
        (Route::AdminDashboard, "Dashboard"),
        (Route::AdminEvents, "Events"),
        (Route::AdminVenues, "Venues"),
        (Route::AdminPromoters, "Promoters"),
        (Route::AdminFighters, "Check-in"),
        (Route::AdminTickets, "Tickets"),
        (Route::AdminCodes, "Codes"),
        (Route::AdminTitles, "Titles"),
    ]
}

fn nav_link(route: &Route, label: &str, current: &Route) -> Html {
    html! {
        <Link<Route>
            to={route.clone()}
            classes={classes!(
                "px-3", "py-2", "rounded-md", "text-sm", "font-medium", "transition-colors", "duration-200",
                if route == current {
                    classes!("bg-white/20", "text-white")
                } else {
                    classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                }
            )}
        >
            {label.to_string()}
        </Link<Route>>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let session = use_context::<SessionContext>();
    let navigator = use_navigator();
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let (user, is_admin) = session
        .as_ref()
        .map(|s| (s.state.user.clone(), s.state.is_admin()))
        .unwrap_or((None, false));

    let on_logout_click = {
        let logout = session.as_ref().map(|s| s.logout.clone());
        Callback::from(move |_: MouseEvent| {
            if let Some(logout) = &logout {
                logout.emit(());
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let links = if current_route.is_admin() { admin_links() } else { public_links() };

    html! {
        <nav class={classes!("sticky", "top-0", "z-40", "bg-gradient-to-r", "from-slate-800", "to-red-700", "text-white", "shadow-lg")}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="flex items-center space-x-6">
                        <Link<Route> to={Route::Home} classes="text-lg font-bold tracking-tight">
                            {"Cageside"}
                        </Link<Route>>
                        <div class="hidden md:flex space-x-2">
                            {links.iter().map(|(route, label)| nav_link(route, label, &current_route)).collect::<Html>()}
                        </div>
                    </div>
                    <div class="flex items-center space-x-3">
                        if is_admin {
                            if current_route.is_admin() {
                                {nav_link(&Route::Home, "Public site", &current_route)}
                            } else {
                                {nav_link(&Route::AdminDashboard, "Back office", &current_route)}
                            }
                        }
                        if let Some(user) = user {
                            <span class="hidden sm:inline text-sm text-white/80">
                                {if user.display_name.is_empty() { user.email.clone() } else { user.display_name.clone() }}
                            </span>
                            <button onclick={on_logout_click} class="px-3 py-2 rounded-md text-sm bg-white/10 hover:bg-white/20">
                                {"Log out"}
                            </button>
                        } else {
                            {nav_link(&Route::Login, "Log in", &current_route)}
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
