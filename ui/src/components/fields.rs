//! Labelled inputs shared by the dashboard forms.
//!
//! Every field is controlled: it shows `value` and reports edits through
//! `on_change`. An `error` renders under the input.

use yew::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md shadow-sm \
    bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500 \
    disabled:opacity-50 disabled:cursor-not-allowed";

fn border(error: &Option<AttrValue>) -> &'static str {
    if error.is_some() {
        "border-red-400 dark:border-red-600"
    } else {
        "border-neutral-300 dark:border-neutral-600"
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub error: Option<AttrValue>,
}

#[function_component]
pub fn FieldError(props: &FieldErrorProps) -> Html {
    match &props.error {
        Some(error) => html! {
            <p class="mt-1 text-xs text-red-600 dark:text-red-400">{error}</p>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                {&props.label}
                if props.required {
                    {" *"}
                }
            </label>
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                oninput={on_input}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                class={format!("{INPUT_CLASS} {}", border(&props.error))}
            />
            <FieldError error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn TextArea(props: &TextAreaProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                {&props.label}
            </label>
            <textarea
                value={props.value.clone()}
                oninput={on_input}
                rows={props.rows.to_string()}
                disabled={props.disabled}
                class={format!("{INPUT_CLASS} {}", border(&None))}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs.
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
    /// Label of a leading empty option, e.g. "All statuses".
    #[prop_or_default]
    pub empty_label: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn SelectField(props: &SelectFieldProps) -> Html {
    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div>
            <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                {&props.label}
            </label>
            <select
                onchange={on_select}
                disabled={props.disabled}
                class={format!("{INPUT_CLASS} {}", border(&props.error))}
            >
                if let Some(empty) = &props.empty_label {
                    <option value="" selected={props.value.is_empty()}>{empty}</option>
                }
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>
                        {label}
                    </option>
                })}
            </select>
            <FieldError error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_change: Callback<bool>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn Checkbox(props: &CheckboxProps) -> Html {
    let on_click = {
        let on_change = props.on_change.clone();
        let checked = props.checked;
        Callback::from(move |_: MouseEvent| on_change.emit(!checked))
    };

    html! {
        <label class="inline-flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
            <input
                type="checkbox"
                checked={props.checked}
                onclick={on_click}
                disabled={props.disabled}
                class="h-4 w-4 rounded border-neutral-300 dark:border-neutral-600"
            />
            {&props.label}
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormBannerProps {
    pub message: Option<AttrValue>,
    pub on_dismiss: Callback<()>,
}

/// Submission error shown at the top of a form until dismissed.
#[function_component]
pub fn FormBanner(props: &FormBannerProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };
    let on_dismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class="flex items-start justify-between gap-3 p-4 mb-4 rounded-md \
                    bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
            <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
            <button
                type="button"
                onclick={on_dismiss}
                class="text-red-500 hover:text-red-700 leading-none"
                title="Dismiss"
            >
                {"×"}
            </button>
        </div>
    }
}

/// Options for a `<select>` over an enum with `key`/`label` pairs.
pub fn enum_options<T: Copy>(
    all: &[T],
    key: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<(AttrValue, AttrValue)> {
    all.iter()
        .map(|item| (AttrValue::from(key(item)), AttrValue::from(label(item))))
        .collect()
}

/// The message for `field`, ready to pass as an `error` prop.
pub fn error_for(errors: &payloads::forms::FieldErrors, field: &str) -> Option<AttrValue> {
    errors.get(field).map(|m| AttrValue::from(m.to_string()))
}

#[derive(Properties, PartialEq)]
pub struct FormActionsProps {
    pub submit_label: AttrValue,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub pending: bool,
}

/// Cancel and submit buttons closing a modal form.
#[function_component]
pub fn FormActions(props: &FormActionsProps) -> Html {
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="flex justify-end gap-3 pt-4 border-t border-neutral-200 dark:border-neutral-700">
            <button
                type="button"
                onclick={on_cancel}
                disabled={props.pending}
                class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 \
                       bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 \
                       rounded-md hover:bg-neutral-50 disabled:opacity-50"
            >
                {"Cancel"}
            </button>
            <button
                type="submit"
                disabled={props.pending}
                class="px-4 py-2 text-sm font-medium text-white bg-neutral-900 dark:bg-neutral-100 \
                       dark:text-neutral-900 rounded-md hover:bg-neutral-700 disabled:opacity-50"
            >
                {if props.pending { "Saving..." } else { props.submit_label.as_str() }}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub title: AttrValue,
    pub children: Html,
}

/// Titled group of fields inside a form.
#[function_component]
pub fn FormSection(props: &SectionProps) -> Html {
    html! {
        <fieldset class="space-y-3">
            <legend class="text-sm font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                {&props.title}
            </legend>
            {props.children.clone()}
        </fieldset>
    }
}

/// Store a modified copy of a form held in `use_state`.
pub fn update_state<T: Clone>(state: &UseStateHandle<T>, apply: impl FnOnce(&mut T)) {
    let mut next = (**state).clone();
    apply(&mut next);
    state.set(next);
}
