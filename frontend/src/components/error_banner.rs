use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div role="alert" class="bg-red-50 border border-red-200 text-red-700 rounded-lg p-4 flex items-center justify-between">
            <p>{props.message.clone()}</p>
            if let Some(on_retry) = &props.on_retry {
                <button
                    onclick={on_retry.reform(|_: MouseEvent| ())}
                    class="px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700"
                >
                    {"Retry"}
                </button>
            }
        </div>
    }
}
