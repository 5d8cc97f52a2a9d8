use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-red-700 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8 flex flex-col md:flex-row justify-between gap-4">
                <div>
                    <span class="text-2xl font-bold tracking-tight">{"Cageside"}</span>
                    <p class="text-white/70 text-sm mt-1">{"Fight cards, fighters and rankings."}</p>
                </div>
                <div class="flex gap-4 text-sm text-white/80">
                    <Link<Route> to={Route::Events}>{"Events"}</Link<Route>>
                    <Link<Route> to={Route::Rankings}>{"Rankings"}</Link<Route>>
                    <Link<Route> to={Route::Facilities}>{"Gyms"}</Link<Route>>
                </div>
                <p class="text-xs text-white/60">{format!("v{}", env!("CARGO_PKG_VERSION"))}</p>
            </div>
        </footer>
    }
}
