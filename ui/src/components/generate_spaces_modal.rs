use payloads::{
    forms::parse_count,
    query::Mutation,
    requests::GenerateSpaces,
    responses,
};
use yew::prelude::*;

use super::{
    Modal,
    fields::{FormActions, FormBanner, TextField},
};
use crate::{contexts::toast::use_toast, get_api_client, hooks::use_mutation};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub product_type: responses::ProductType,
    pub on_close: Callback<()>,
}

/// Bulk-create spaces from a space type's naming rule.
#[function_component]
pub fn GenerateSpacesModal(props: &Props) -> Html {
    let rule = &props.product_type.details.auto_generation;
    let count = use_state(|| rule.count.max(1).to_string());
    let error = use_state(|| None::<AttrValue>);
    let banner = use_state(|| None::<AttrValue>);
    let mutation = use_mutation();
    let toasts = use_toast();
    let pending = mutation.is_pending();

    let product_type_id = props.product_type.id;
    let already = props.product_type.space_count;

    let parsed = parse_count(&count);
    let preview = match parsed {
        Ok(n) if n > 0 => {
            let names = rule.next_names(already, n);
            match (names.first(), names.last()) {
                (Some(first), Some(last)) if names.len() > 1 => {
                    format!("Creates {first} to {last}")
                }
                (Some(first), _) => format!("Creates {first}"),
                _ => String::new(),
            }
        }
        _ => String::new(),
    };

    let on_count = {
        let count = count.clone();
        let error = error.clone();
        Callback::from(move |value: String| {
            error.set(None);
            count.set(value);
        })
    };

    let on_submit = {
        let error = error.clone();
        let banner = banner.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let n = match parsed {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    error.set(Some(payloads::forms::AT_LEAST_ONE.into()));
                    return;
                }
                Err(message) => {
                    error.set(Some(message.into()));
                    return;
                }
            };

            let request = async move {
                let body = GenerateSpaces { count: Some(n) };
                get_api_client().generate_spaces(&product_type_id, &body).await
            };
            let on_success = {
                let toasts = toasts.clone();
                let on_close = on_close.clone();
                Callback::from(move |spaces: Vec<responses::Space>| {
                    toasts.success(format!("Created {} spaces", spaces.len()));
                    on_close.emit(());
                })
            };
            let on_error = {
                let banner = banner.clone();
                Callback::from(move |e: payloads::ClientError| {
                    banner.set(Some(e.to_string().into()))
                })
            };

            mutation.run(
                Mutation::GenerateSpaces(product_type_id),
                request,
                on_success,
                on_error,
            );
        })
    };

    let on_dismiss_banner = {
        let banner = banner.clone();
        Callback::from(move |_| banner.set(None))
    };

    html! {
        <Modal
            on_close={props.on_close.clone()}
            title={format!("Generate {} spaces", props.product_type.details.name)}
            close_on_backdrop={!pending}
        >
            <form onsubmit={on_submit} class="space-y-4">
                <FormBanner message={(*banner).clone()} on_dismiss={on_dismiss_banner} />
                <TextField
                    label="Number of spaces"
                    input_type="number"
                    value={(*count).clone()}
                    on_change={on_count}
                    error={(*error).clone()}
                    required=true
                    disabled={pending}
                />
                <p class="text-sm text-neutral-600 dark:text-neutral-400">{preview}</p>
                <FormActions submit_label="Generate" on_cancel={props.on_close.clone()} {pending} />
            </form>
        </Modal>
    }
}
