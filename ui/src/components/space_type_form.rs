use payloads::{
    Amenity, LocationId, SpaceCategory,
    forms::{FieldErrors, RatesInput, SpaceTypeForm, SubmitError},
    responses,
};
use yew::prelude::*;

use super::{
    AmenityPicker, LocationSelect, Modal, RatesEditor,
    fields::{
        Checkbox, FormActions, FormBanner, FormSection, SelectField, TextArea,
        TextField, enum_options, error_for, update_state,
    },
};
use crate::{contexts::toast::use_toast, get_api_client, hooks::use_mutation};

const PREVIEW_COUNT: u32 = 3;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub editing: Option<responses::ProductType>,
    #[prop_or_default]
    pub default_location: Option<LocationId>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_saved: Callback<responses::ProductType>,
}

#[function_component]
pub fn SpaceTypeFormModal(props: &Props) -> Html {
    let form = use_state(|| match (&props.editing, props.default_location) {
        (Some(product_type), _) => SpaceTypeForm::from_existing(&product_type.details),
        (None, Some(location_id)) => SpaceTypeForm::for_location(location_id),
        (None, None) => SpaceTypeForm::default(),
    });
    let errors = use_state(FieldErrors::new);
    let banner = use_state(|| None::<AttrValue>);
    let mutation = use_mutation();
    let toasts = use_toast();

    let editing_id = props.editing.as_ref().map(|p| p.id);
    let pending = mutation.is_pending();

    let edit = |apply: fn(&mut SpaceTypeForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| update_state(&form, |f| apply(f, value)))
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let banner = banner.clone();
        let mutation = mutation.clone();
        let on_close = props.on_close.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            banner.set(None);

            let submitted = (*form).clone();
            let request = async move {
                let client = get_api_client();
                submitted.submit(&client, editing_id).await
            };

            let on_success = {
                let toasts = toasts.clone();
                let on_close = on_close.clone();
                let on_saved = on_saved.clone();
                Callback::from(move |saved: responses::ProductType| {
                    let name = &saved.details.name;
                    toasts.success(match (editing_id, saved.space_count) {
                        (Some(_), _) => format!("Updated {name}"),
                        (None, 0) => format!("Created {name}"),
                        (None, n) => format!("Created {name} with {n} spaces"),
                    });
                    on_saved.emit(saved);
                    on_close.emit(());
                })
            };

            let on_error = {
                let errors = errors.clone();
                let banner = banner.clone();
                Callback::from(move |error: SubmitError| match error {
                    SubmitError::Invalid(field_errors) => errors.set(field_errors),
                    SubmitError::Client(e) => {
                        banner.set(Some(e.to_string().into()))
                    }
                })
            };

            mutation.run(
                SpaceTypeForm::mutation(editing_id),
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

    let on_category = {
        let form = form.clone();
        Callback::from(move |key: String| {
            if let Some(category) = SpaceCategory::from_key(&key) {
                update_state(&form, |f| f.category = category);
            }
        })
    };

    let on_pricing = {
        let form = form.clone();
        Callback::from(move |pricing: RatesInput| update_state(&form, |f| f.pricing = pricing))
    };

    let on_amenity = {
        let form = form.clone();
        Callback::from(move |amenity: Amenity| update_state(&form, |f| f.toggle_amenity(amenity)))
    };

    let on_active = {
        let form = form.clone();
        Callback::from(move |checked: bool| update_state(&form, |f| f.is_active = checked))
    };

    let on_auto_generate = {
        let form = form.clone();
        Callback::from(move |checked: bool| update_state(&form, |f| f.auto_generate = checked))
    };

    let preview = form.preview_names(PREVIEW_COUNT).join(", ");
    let title = if editing_id.is_some() { "Edit space type" } else { "New space type" };
    let submit_label = if editing_id.is_some() { "Save changes" } else { "Create space type" };

    html! {
        <Modal
            on_close={props.on_close.clone()}
            {title}
            max_width="max-w-2xl"
            close_on_backdrop={!pending}
        >
            <form onsubmit={on_submit} class="space-y-6">
                <FormBanner message={(*banner).clone()} on_dismiss={on_dismiss_banner} />

                <FormSection title="Basics">
                    <LocationSelect
                        value={form.location_id.clone()}
                        on_change={edit(|f, v| f.location_id = v)}
                        empty_label="Select a location"
                        error={error_for(&errors, "location")}
                        disabled={pending || editing_id.is_some()}
                    />
                    <TextField
                        label="Name"
                        value={form.name.clone()}
                        on_change={edit(|f, v| f.name = v)}
                        error={error_for(&errors, "name")}
                        required=true
                        disabled={pending}
                    />
                    <SelectField
                        label="Category"
                        value={form.category.key()}
                        options={enum_options(&SpaceCategory::ALL, SpaceCategory::key, SpaceCategory::label)}
                        on_change={on_category}
                        disabled={pending}
                    />
                    <TextArea
                        label="Description"
                        value={form.description.clone()}
                        on_change={edit(|f, v| f.description = v)}
                        disabled={pending}
                    />
                    <div class="grid grid-cols-2 gap-3">
                        <TextField
                            label="Minimum capacity"
                            input_type="number"
                            value={form.min_capacity.clone()}
                            on_change={edit(|f, v| f.min_capacity = v)}
                            error={error_for(&errors, "capacity.min")}
                            required=true
                            disabled={pending}
                        />
                        <TextField
                            label="Maximum capacity"
                            input_type="number"
                            value={form.max_capacity.clone()}
                            on_change={edit(|f, v| f.max_capacity = v)}
                            error={error_for(&errors, "capacity.max")}
                            required=true
                            disabled={pending}
                        />
                    </div>
                    <Checkbox
                        label="Active"
                        checked={form.is_active}
                        on_change={on_active}
                        disabled={pending}
                    />
                </FormSection>

                <FormSection title="Pricing">
                    <RatesEditor
                        rates={form.pricing.clone()}
                        prefix="pricing"
                        errors={(*errors).clone()}
                        on_change={on_pricing}
                        disabled={pending}
                    />
                </FormSection>

                <FormSection title="Amenities">
                    <AmenityPicker
                        selected={form.amenities.clone()}
                        on_toggle={on_amenity}
                        disabled={pending}
                    />
                </FormSection>

                <FormSection title="Space generation">
                    <Checkbox
                        label="Generate spaces from this type"
                        checked={form.auto_generate}
                        on_change={on_auto_generate}
                        disabled={pending}
                    />
                    if form.auto_generate {
                        <div class="grid grid-cols-2 gap-3">
                            <TextField
                                label="Name prefix"
                                value={form.prefix.clone()}
                                on_change={edit(|f, v| f.prefix = v)}
                                placeholder="HD-"
                                disabled={pending}
                            />
                            <TextField
                                label="Start number"
                                input_type="number"
                                value={form.start_number.clone()}
                                on_change={edit(|f, v| f.start_number = v)}
                                disabled={pending}
                            />
                            <TextField
                                label="Number of spaces"
                                input_type="number"
                                value={form.count.clone()}
                                on_change={edit(|f, v| f.count = v)}
                                error={error_for(&errors, "autoGeneration.count")}
                                disabled={pending}
                            />
                            <TextField
                                label="Digits"
                                input_type="number"
                                value={form.padding.clone()}
                                on_change={edit(|f, v| f.padding = v)}
                                disabled={pending}
                            />
                        </div>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {format!("Names: {preview}, ...")}
                        </p>
                    }
                </FormSection>

                <FormActions {submit_label} on_cancel={props.on_close.clone()} {pending} />
            </form>
        </Modal>
    }
}
