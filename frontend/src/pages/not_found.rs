use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container mx-auto px-4 py-12 text-center">
            <h1 class="text-2xl font-semibold mb-2">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600 mb-4">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">{"Back to the home page"}</Link<Route>>
        </div>
    }
}
