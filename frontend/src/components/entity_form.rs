use shared::form::{FieldKind, FormField};
use shared::{apply_field_change, FormModel, FormState, SharedError};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntityFormProps<R: FormModel + Clone + PartialEq + 'static> {
    pub title: AttrValue,
    /// Record being edited, or a blank one when creating.
    pub base: R,
    pub on_submit: Callback<R>,
    pub on_cancel: Callback<()>,
    /// Last submit failure reported by the API.
    #[prop_or_default]
    pub server_error: Option<SharedError>,
    #[prop_or_default]
    pub saving: bool,
}

#[derive(Properties, PartialEq)]
struct FieldInputProps {
    field: FormField,
    value: AttrValue,
    errors: Vec<String>,
    on_change: Callback<(&'static str, String)>,
}

#[function_component(FieldInput)]
fn field_input(props: &FieldInputProps) -> Html {
    let name = props.field.name;
    let input_class = classes!(
        "w-full", "px-3", "py-2", "border", "rounded-lg", "focus:ring-2", "focus:ring-blue-500",
        if props.errors.is_empty() { "border-gray-300" } else { "border-red-500" }
    );

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((name, input.value()));
        })
    };

    let control = match props.field.kind {
        FieldKind::TextArea => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit((name, input.value()));
            });
            html! { <textarea id={name} {name} rows="4" class={input_class} value={props.value.clone()} {oninput} /> }
        }
        FieldKind::Checkbox => {
            let on_change = props.on_change.clone();
            let onchange = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((name, input.checked().to_string()));
            });
            html! {
                <input type="checkbox" id={name} {name} checked={props.value.as_str() == "true"} {onchange} class="h-4 w-4" />
            }
        }
        FieldKind::Select(options) => {
            let on_change = props.on_change.clone();
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit((name, select.value()));
            });
            html! {
                <select id={name} {name} class={input_class} {onchange}>
                    <option value="" selected={props.value.is_empty()}>{"Select..."}</option>
                    {options.iter().map(|option| html! {
                        <option value={*option} selected={props.value.as_str() == *option}>{*option}</option>
                    }).collect::<Html>()}
                </select>
            }
        }
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                FieldKind::DateTime => "datetime-local",
                _ => "text",
            };
            html! {
                <input type={input_type} id={name} {name} class={input_class} value={props.value.clone()} oninput={on_input} />
            }
        }
    };

    html! {
        <div class="mb-4">
            <label for={name} class="block text-sm font-medium text-gray-700 mb-1">
                {props.field.label}
                if props.field.required {
                    <span class="text-red-500">{" *"}</span>
                }
            </label>
            {control}
            {props.errors.iter().map(|message| html! {
                <p class="text-sm text-red-600 mt-1">{message.clone()}</p>
            }).collect::<Html>()}
        </div>
    }
}

/// Create/edit form for any [`FormModel`]. Submitting builds a whole new
/// record from the inputs; nothing is written back into `base`.
#[function_component(EntityForm)]
pub fn entity_form<R>(props: &EntityFormProps<R>) -> Html
where
    R: FormModel + Clone + PartialEq + 'static,
{
    let form = {
        let base = props.base.clone();
        use_state(move || base.to_form())
    };

    // Authoritative API validation replaces whatever the local checks said.
    {
        let form = form.clone();
        use_effect_with(props.server_error.clone(), move |server_error| {
            if let Some(error) = server_error {
                let cleared = (*form).clone().clear_errors();
                let next = match error {
                    SharedError::Rejected(response) => cleared.with_server_errors(response),
                    other => cleared.with_form_error(other.to_string()),
                };
                form.set(next);
            }
            || ()
        });
    }

    let on_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            form.set(apply_field_change(&form, field, value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let base = props.base.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let checked = (*form).clone().clear_errors().check_required(R::fields());
            if checked.has_errors() {
                form.set(checked);
                return;
            }
            match R::from_form(&checked, &base) {
                Ok(record) => on_submit.emit(record),
                Err(annotated) => form.set(annotated),
            }
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <form {onsubmit} class="bg-white rounded-lg shadow-sm p-6 max-w-2xl" novalidate={true}>
            <h2 class="text-lg font-semibold mb-4">{props.title.clone()}</h2>
            {form.form_errors().iter().map(|message| html! {
                <div class="mb-4 p-3 rounded bg-red-50 text-red-700 text-sm">{message.clone()}</div>
            }).collect::<Html>()}
            {R::fields().iter().map(|field| html! {
                <FieldInput
                    key={field.name}
                    field={*field}
                    value={AttrValue::from(form.value(field.name).to_string())}
                    errors={form.errors_for(field.name).to_vec()}
                    on_change={on_change.clone()}
                />
            }).collect::<Html>()}
            <div class="flex gap-2 mt-6">
                <button type="submit" disabled={props.saving} class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50">
                    {if props.saving { "Saving..." } else { "Save" }}
                </button>
                <button type="button" onclick={on_cancel} class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50">
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}
