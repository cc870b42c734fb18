use payloads::{
    Amenity, ContactType, LocationStatus,
    forms::{ContactInput, DayHoursInput, FieldErrors, LocationForm, SubmitError},
    responses,
};
use yew::prelude::*;

use super::{
    AmenityPicker, HoursEditor, Modal,
    fields::{
        Checkbox, FieldError, FormActions, FormBanner, FormSection,
        SelectField, TextArea, TextField, enum_options, error_for,
        update_state,
    },
};
use crate::{contexts::toast::use_toast, get_api_client, hooks::use_mutation};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The location being edited, or `None` to create one.
    #[prop_or_default]
    pub editing: Option<responses::Location>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_saved: Callback<responses::Location>,
}

#[function_component]
pub fn LocationFormModal(props: &Props) -> Html {
    let form = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|l| LocationForm::from_existing(&l.details))
            .unwrap_or_default()
    });
    let errors = use_state(FieldErrors::new);
    let banner = use_state(|| None::<AttrValue>);
    let mutation = use_mutation();
    let toasts = use_toast();

    let editing_id = props.editing.as_ref().map(|l| l.id);
    let pending = mutation.is_pending();

    let edit = |apply: fn(&mut LocationForm, String)| {
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
                let errors = errors.clone();
                let toasts = toasts.clone();
                let on_close = on_close.clone();
                let on_saved = on_saved.clone();
                Callback::from(move |saved: responses::Location| {
                    errors.set(FieldErrors::new());
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

            mutation.run(
                LocationForm::mutation(editing_id),
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

    let status_options =
        enum_options(&LocationStatus::ALL, LocationStatus::key, LocationStatus::label);
    let contact_options =
        enum_options(&ContactType::ALL, ContactType::key, ContactType::label);

    let contact_rows = form.contacts.iter().enumerate().map(|(index, contact)| {
        let on_type = {
            let form = form.clone();
            Callback::from(move |key: String| {
                if let Some(contact_type) = ContactType::from_key(&key) {
                    update_state(&form, |f| {
                        if let Some(c) = f.contacts.get_mut(index) {
                            c.contact_type = contact_type;
                        }
                    });
                }
            })
        };
        let on_value = {
            let form = form.clone();
            Callback::from(move |value: String| {
                update_state(&form, |f| {
                    if let Some(c) = f.contacts.get_mut(index) {
                        c.value = value;
                    }
                });
            })
        };
        let on_primary = {
            let form = form.clone();
            Callback::from(move |_: bool| update_state(&form, |f| f.set_primary(index)))
        };
        let on_remove = {
            let form = form.clone();
            Callback::from(move |_: MouseEvent| {
                update_state(&form, |f| {
                    if index < f.contacts.len() {
                        f.contacts.remove(index);
                    }
                })
            })
        };

        html! {
            <div key={index} class="grid grid-cols-12 gap-2 items-end">
                <div class="col-span-3">
                    <SelectField
                        label="Type"
                        value={contact.contact_type.key()}
                        options={contact_options.clone()}
                        on_change={on_type}
                        disabled={pending}
                    />
                </div>
                <div class="col-span-6">
                    <TextField
                        label="Value"
                        value={contact.value.clone()}
                        on_change={on_value}
                        error={error_for(&errors, &format!("contacts.{index}"))}
                        disabled={pending}
                    />
                </div>
                <div class="col-span-2 pb-2">
                    <Checkbox
                        label="Primary"
                        checked={contact.is_primary}
                        on_change={on_primary}
                        disabled={pending}
                    />
                </div>
                <div class="col-span-1 pb-2">
                    <button
                        type="button"
                        onclick={on_remove}
                        disabled={pending}
                        class="text-neutral-500 hover:text-red-600 text-lg leading-none"
                        title="Remove contact"
                    >
                        {"×"}
                    </button>
                </div>
            </div>
        }
    });

    let on_add_contact = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            update_state(&form, |f| f.contacts.push(ContactInput::blank(ContactType::Phone)))
        })
    };

    let on_hours = {
        let form = form.clone();
        Callback::from(move |hours: Vec<DayHoursInput>| update_state(&form, |f| f.hours = hours))
    };

    let on_amenity = {
        let form = form.clone();
        Callback::from(move |amenity: Amenity| update_state(&form, |f| f.toggle_amenity(amenity)))
    };

    let on_status = {
        let form = form.clone();
        Callback::from(move |key: String| {
            if let Some(status) = LocationStatus::from_key(&key) {
                update_state(&form, |f| f.status = status);
            }
        })
    };

    let on_approval = {
        let form = form.clone();
        Callback::from(move |checked: bool| update_state(&form, |f| f.requires_approval = checked))
    };

    let title = if editing_id.is_some() { "Edit location" } else { "New location" };
    let submit_label = if editing_id.is_some() { "Save changes" } else { "Create location" };

    html! {
        <Modal
            on_close={props.on_close.clone()}
            {title}
            max_width="max-w-3xl"
            close_on_backdrop={!pending}
        >
            <form onsubmit={on_submit} class="space-y-6">
                <FormBanner message={(*banner).clone()} on_dismiss={on_dismiss_banner} />

                <FormSection title="Basics">
                    <TextField
                        label="Name"
                        value={form.name.clone()}
                        on_change={edit(|f, v| f.name = v)}
                        error={error_for(&errors, "name")}
                        required=true
                        disabled={pending}
                    />
                    <TextArea
                        label="Description"
                        value={form.description.clone()}
                        on_change={edit(|f, v| f.description = v)}
                        disabled={pending}
                    />
                    <SelectField
                        label="Status"
                        value={form.status.key()}
                        options={status_options}
                        on_change={on_status}
                        disabled={pending}
                    />
                </FormSection>

                <FormSection title="Address">
                    <TextField
                        label="Street"
                        value={form.street.clone()}
                        on_change={edit(|f, v| f.street = v)}
                        error={error_for(&errors, "address.street")}
                        required=true
                        disabled={pending}
                    />
                    <div class="grid grid-cols-2 gap-3">
                        <TextField
                            label="City"
                            value={form.city.clone()}
                            on_change={edit(|f, v| f.city = v)}
                            error={error_for(&errors, "address.city")}
                            required=true
                            disabled={pending}
                        />
                        <TextField
                            label="State"
                            value={form.state.clone()}
                            on_change={edit(|f, v| f.state = v)}
                            disabled={pending}
                        />
                        <TextField
                            label="Postal code"
                            value={form.postal_code.clone()}
                            on_change={edit(|f, v| f.postal_code = v)}
                            disabled={pending}
                        />
                        <TextField
                            label="Country"
                            value={form.country.clone()}
                            on_change={edit(|f, v| f.country = v)}
                            error={error_for(&errors, "address.country")}
                            required=true
                            disabled={pending}
                        />
                    </div>
                </FormSection>

                <FormSection title="Contacts">
                    {for contact_rows}
                    <FieldError error={error_for(&errors, "contacts")} />
                    <button
                        type="button"
                        onclick={on_add_contact}
                        disabled={pending}
                        class="text-sm font-medium text-neutral-700 dark:text-neutral-300 hover:underline"
                    >
                        {"+ Add contact"}
                    </button>
                </FormSection>

                <FormSection title="Opening hours">
                    <HoursEditor
                        hours={form.hours.clone()}
                        prefix="operatingHours"
                        errors={(*errors).clone()}
                        on_change={on_hours}
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

                <FormSection title="Booking rules">
                    <div class="grid grid-cols-2 gap-3">
                        <TextField
                            label="Minimum booking (minutes)"
                            input_type="number"
                            value={form.min_booking_minutes.clone()}
                            on_change={edit(|f, v| f.min_booking_minutes = v)}
                            disabled={pending}
                        />
                        <TextField
                            label="Maximum booking (hours)"
                            input_type="number"
                            value={form.max_booking_hours.clone()}
                            on_change={edit(|f, v| f.max_booking_hours = v)}
                            disabled={pending}
                        />
                        <TextField
                            label="Book ahead (days)"
                            input_type="number"
                            value={form.advance_booking_days.clone()}
                            on_change={edit(|f, v| f.advance_booking_days = v)}
                            disabled={pending}
                        />
                        <TextField
                            label="Free cancellation (hours before)"
                            input_type="number"
                            value={form.cancellation_hours.clone()}
                            on_change={edit(|f, v| f.cancellation_hours = v)}
                            disabled={pending}
                        />
                    </div>
                    <Checkbox
                        label="Bookings require approval"
                        checked={form.requires_approval}
                        on_change={on_approval}
                        disabled={pending}
                    />
                </FormSection>

                <FormActions
                    {submit_label}
                    on_cancel={props.on_close.clone()}
                    {pending}
                />
            </form>
        </Modal>
    }
}
