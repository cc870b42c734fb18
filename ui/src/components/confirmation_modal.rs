use yew::prelude::*;

use super::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// e.g. "Delete location"
    pub title: AttrValue,
    /// What will happen, shown after "This action cannot be undone."
    pub message: AttrValue,
    pub confirm_text: AttrValue,
    /// When set, the user must type this value before confirming.
    #[prop_or_default]
    pub confirmation_value: Option<AttrValue>,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
}

#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let typed = use_state(String::new);

    let can_confirm = match &props.confirmation_value {
        Some(expected) => typed.as_str() == expected.as_str(),
        None => true,
    };

    let on_input = {
        let typed = typed.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            typed.set(input.value());
        })
    };

    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal
            on_close={props.on_close.clone()}
            title={props.title.clone()}
            close_on_backdrop={!props.is_loading}
        >
            <div class="space-y-4">
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"This action "}
                    <span class="font-semibold text-red-600 dark:text-red-400">
                        {"cannot be undone"}
                    </span>
                    {". "}{&props.message}
                </p>

                if let Some(expected) = &props.confirmation_value {
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {"Type "}
                        <span class="font-mono font-semibold text-neutral-900 dark:text-neutral-100">
                            {expected}
                        </span>
                        {" to confirm."}
                    </p>
                    <input
                        type="text"
                        value={(*typed).clone()}
                        oninput={on_input}
                        disabled={props.is_loading}
                        class="w-full px-3 py-2 text-sm border border-neutral-300 dark:border-neutral-600 \
                               rounded-md bg-white dark:bg-neutral-700 \
                               focus:outline-none focus:ring-2 focus:ring-red-500"
                    />
                }

                if let Some(error) = &props.error_message {
                    <div class="text-sm text-red-600 dark:text-red-400">{error}</div>
                }
            </div>

            <div class="flex justify-end gap-3 mt-6">
                <button
                    type="button"
                    onclick={on_cancel}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300 \
                           bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600 \
                           rounded-md hover:bg-neutral-50 disabled:opacity-50"
                >
                    {"Cancel"}
                </button>
                <button
                    type="button"
                    onclick={on_confirm}
                    disabled={!can_confirm || props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-white bg-red-600 hover:bg-red-700 \
                           rounded-md disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if props.is_loading { "Working..." } else { props.confirm_text.as_str() }}
                </button>
            </div>
        </Modal>
    }
}
