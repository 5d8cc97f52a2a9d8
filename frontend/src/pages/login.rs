use log::debug;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::SessionContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let local_error = use_state(String::new);

    let session = use_context::<SessionContext>();
    let navigator = use_navigator();
    let state = session.as_ref().map(|s| s.state.clone()).unwrap_or_default();

    // Leave once signed in: admins go to the back office
    {
        let navigator = navigator.clone();
        use_effect_with((state.is_authenticated(), state.is_admin()), move |(authenticated, admin)| {
            if *authenticated {
                debug!("User authenticated, leaving login page");
                if let Some(navigator) = navigator {
                    navigator.push(if *admin { &Route::AdminDashboard } else { &Route::Home });
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let local_error = local_error.clone();
        let login = session.as_ref().map(|s| s.login.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email.trim().to_string();
            let password = password.to_string();

            if email.is_empty() || password.is_empty() {
                local_error.set("Please enter both email and password".to_string());
                return;
            }
            local_error.set(String::new());
            if let Some(login) = &login {
                login.emit((email, password));
            }
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let error = if local_error.is_empty() { state.error.clone() } else { Some((*local_error).clone()) };

    html! {
        <div class="min-h-[70vh] flex items-center justify-center px-4">
            <form {onsubmit} class="bg-white rounded-lg shadow-sm p-8 w-full max-w-sm space-y-4">
                <h1 class="text-xl font-semibold">{"Staff login"}</h1>
                if let Some(error) = error {
                    <div role="alert" class="p-3 rounded bg-red-50 text-red-700 text-sm">{error}</div>
                }
                <div>
                    <label for="email" class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        value={(*email).clone()}
                        onchange={onemailchange}
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        value={(*password).clone()}
                        onchange={onpasswordchange}
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                    />
                </div>
                <button
                    type="submit"
                    disabled={state.loading}
                    class="w-full px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                >
                    {if state.loading { "Logging in..." } else { "Log in" }}
                </button>
            </form>
        </div>
    }
}
