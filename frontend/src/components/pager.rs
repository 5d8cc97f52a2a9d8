use crate::config::Config;
use shared::table::page_window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page: u32,
    pub total_pages: u32,
    pub total: usize,
    pub first_index: usize,
    pub last_index: usize,
    pub on_page: Callback<u32>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    if props.total_pages <= 1 {
        return html! {
            <p class="text-sm text-gray-500 mt-3">{format!("{} result(s)", props.total)}</p>
        };
    }

    let go = |page: u32| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(page))
    };

    html! {
        <div class="flex items-center justify-between mt-4">
            <p class="text-sm text-gray-600">
                {format!("Showing {}-{} of {}", props.first_index, props.last_index, props.total)}
            </p>
            <nav class="flex gap-1" aria-label="Pagination">
                <button
                    onclick={go(props.page.saturating_sub(1))}
                    disabled={props.page <= 1}
                    class="px-3 py-1 border border-gray-300 rounded hover:bg-gray-50 disabled:opacity-50"
                >
                    {"Previous"}
                </button>
                {page_window(props.page, props.total_pages, Config::PAGER_RADIUS).into_iter().map(|n| {
                    let current = n == props.page;
                    html! {
                        <button
                            key={n}
                            onclick={go(n)}
                            aria-current={if current { Some("page") } else { None }}
                            class={classes!(
                                "px-3", "py-1", "border", "rounded",
                                if current { "bg-blue-600 text-white border-blue-600" } else { "border-gray-300 hover:bg-gray-50" }
                            )}
                        >
                            {n.to_string()}
                        </button>
                    }
                }).collect::<Html>()}
                <button
                    onclick={go(props.page + 1)}
                    disabled={props.page >= props.total_pages}
                    class="px-3 py-1 border border-gray-300 rounded hover:bg-gray-50 disabled:opacity-50"
                >
                    {"Next"}
                </button>
            </nav>
        </div>
    }
}
