use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: AttrValue,
    pub on_search: Callback<String>,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
}

/// Filters as the user types; "Clear" resets the query.
#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let on_clear = {
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit(String::new()))
    };

    html! {
        <div class="flex gap-2 mb-4">
            <input
                type="search"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_input}
                class="flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
            />
            if !props.value.is_empty() {
                <button onclick={on_clear} class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50">
                    {"Clear"}
                </button>
            }
        </div>
    }
}
