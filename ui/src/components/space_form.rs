use payloads::{
    Amenity, LocationId, SpaceCategory, SpaceStatus,
    forms::{DayHoursInput, FieldErrors, RatesInput, SpaceForm, SubmitError},
    responses,
};
use yew::prelude::*;

use super::{
    AmenityPicker, HoursEditor, LocationSelect, Modal, RatesEditor,
    fields::{
        Checkbox, FormActions, FormBanner, FormSection, SelectField, TextArea,
        TextField, enum_options, error_for, update_state,
    },
};
use crate::{contexts::toast::use_toast, get_api_client, hooks::use_mutation};

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub editing: Option<responses::Space>,
    /// Preselected location for a new space.
    #[prop_or_default]
    pub default_location: Option<LocationId>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_saved: Callback<responses::Space>,
}

#[function_component]
pub fn SpaceFormModal(props: &Props) -> Html {
    let form = use_state(|| match (&props.editing, props.default_location) {
        (Some(space), _) => SpaceForm::from_existing(&space.details),
        (None, Some(location_id)) => SpaceForm::for_location(location_id),
        (None, None) => SpaceForm::default(),
    });
    let errors = use_state(FieldErrors::new);
    let banner = use_state(|| None::<AttrValue>);
    let mutation = use_mutation();
    let toasts = use_toast();

    let editing_id = props.editing.as_ref().map(|s| s.id);
    let pending = mutation.is_pending();

    let edit = |apply: fn(&mut SpaceForm, String)| {
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
                Callback::from(move |saved: responses::Space| {
                    toasts.success(match editing_id {
                        Some(_) => format!("Updated {}", saved.details.name),
                        None => format!("Created {}", saved.details.name),
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

            mutation.run(SpaceForm::mutation(editing_id), request, on_success, on_error);
        })
    };

    let on_dismiss_banner = {
        let banner = banner.clone();
        Callback::from(move |_| banner.set(None))
    };

    let on_space_type = {
        let form = form.clone();
        Callback::from(move |key: String| {
            if let Some(category) = SpaceCategory::from_key(&key) {
                update_state(&form, |f| f.space_type = category);
            }
        })
    };

    let on_status = {
        let form = form.clone();
        Callback::from(move |key: String| {
            if let Some(status) = SpaceStatus::from_key(&key) {
                update_state(&form, |f| f.status = status);
            }
        })
    };

    let on_rates = {
        let form = form.clone();
        Callback::from(move |rates: RatesInput| update_state(&form, |f| f.rates = rates))
    };

    let on_custom_hours = {
        let form = form.clone();
        Callback::from(move |checked: bool| update_state(&form, |f| f.custom_hours = checked))
    };

    let on_hours = {
        let form = form.clone();
        Callback::from(move |hours: Vec<DayHoursInput>| update_state(&form, |f| f.hours = hours))
    };

    let on_amenity = {
        let form = form.clone();
        Callback::from(move |amenity: Amenity| update_state(&form, |f| f.toggle_amenity(amenity)))
    };

    let title = if editing_id.is_some() { "Edit space" } else { "New space" };
    let submit_label = if editing_id.is_some() { "Save changes" } else { "Create space" };

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
                    <div class="grid grid-cols-2 gap-3">
                        <SelectField
                            label="Type"
                            value={form.space_type.key()}
                            options={enum_options(&SpaceCategory::ALL, SpaceCategory::key, SpaceCategory::label)}
                            on_change={on_space_type}
                            disabled={pending}
                        />
                        <SelectField
                            label="Status"
                            value={form.status.key()}
                            options={enum_options(&SpaceStatus::ALL, SpaceStatus::key, SpaceStatus::label)}
                            on_change={on_status}
                            disabled={pending}
                        />
                        <TextField
                            label="Capacity"
                            input_type="number"
                            value={form.capacity.clone()}
                            on_change={edit(|f, v| f.capacity = v)}
                            error={error_for(&errors, "capacity")}
                            required=true
                            disabled={pending}
                        />
                        <TextField
                            label="Floor"
                            value={form.floor.clone()}
                            on_change={edit(|f, v| f.floor = v)}
                            disabled={pending}
                        />
                    </div>
                    <TextArea
                        label="Description"
                        value={form.description.clone()}
                        on_change={edit(|f, v| f.description = v)}
                        disabled={pending}
                    />
                </FormSection>

                <FormSection title="Rates">
                    <RatesEditor
                        rates={form.rates.clone()}
                        prefix="rates"
                        errors={(*errors).clone()}
                        on_change={on_rates}
                        disabled={pending}
                    />
                </FormSection>

                <FormSection title="Working hours">
                    <Checkbox
                        label="Use custom hours instead of the location's"
                        checked={form.custom_hours}
                        on_change={on_custom_hours}
                        disabled={pending}
                    />
                    if form.custom_hours {
                        <HoursEditor
                            hours={form.hours.clone()}
                            prefix="workingHours"
                            errors={(*errors).clone()}
                            on_change={on_hours}
                            disabled={pending}
                        />
                    }
                </FormSection>

                <FormSection title="Amenities and equipment">
                    <AmenityPicker
                        selected={form.amenities.clone()}
                        on_toggle={on_amenity}
                        disabled={pending}
                    />
                    <TextField
                        label="Equipment"
                        value={form.equipment.clone()}
                        on_change={edit(|f, v| f.equipment = v)}
                        placeholder="Monitor, Whiteboard, Projector"
                        disabled={pending}
                    />
                </FormSection>

                <FormActions {submit_label} on_cancel={props.on_close.clone()} {pending} />
            </form>
        </Modal>
    }
}
