use jiff::civil::Date;
use payloads::{
    ProductTypeId, SpaceId, forms::format_time, query::Mutation, responses,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    components::{
        AmenityList, ConfirmationModal, SpaceFormModal, StatusBadge,
        status_badge::{booking_tone, space_tone},
    },
    contexts::toast::use_toast,
    get_api_client,
    hooks::{
        use_mutation, use_product_type, use_push_route, use_space,
        use_space_availability, use_title,
    },
    utils::{
        format::{rate_lines, starting_rate},
        time::{format_period, today},
    },
};
use super::NotFoundPage;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub space_id: SpaceId,
}

#[function_component]
pub fn SpaceDetailPage(props: &Props) -> Html {
    let space_id = props.space_id;
    let space = use_space(space_id);
    let date = use_state(today);
    let availability = use_space_availability(space_id, *date);

    let editing = use_state(|| false);
    let deleting = use_state(|| false);
    let mutation = use_mutation();
    let toasts = use_toast();
    let push_route = use_push_route();

    use_title(
        space
            .data
            .as_ref()
            .map(|s| s.details.name.as_str())
            .unwrap_or("Space"),
    );

    let set_flag = |flag: &UseStateHandle<bool>, value: bool| {
        let flag = flag.clone();
        Callback::from(move |_: ()| flag.set(value))
    };

    let on_date = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            match input.value().parse::<Date>() {
                Ok(picked) => date.set(picked),
                Err(e) => tracing::debug!("ignoring date input: {e}"),
            }
        })
    };

    let on_delete = {
        let deleting = deleting.clone();
        let mutation = mutation.clone();
        Callback::from(move |_: ()| {
            let request =
                async move { get_api_client().delete_space(&space_id).await };
            let on_success = {
                let toasts = toasts.clone();
                let push_route = push_route.clone();
                Callback::from(move |_: ()| {
                    toasts.success("Space deleted");
                    push_route.emit(Route::Spaces);
                })
            };
            let on_error = {
                let toasts = toasts.clone();
                let deleting = deleting.clone();
                Callback::from(move |e: payloads::ClientError| {
                    deleting.set(false);
                    toasts.error(format!("Could not delete space: {e}"));
                })
            };
            mutation.run(Mutation::DeleteSpace(space_id), request, on_success, on_error);
        })
    };

    if space.not_found {
        return html! { <NotFoundPage /> };
    }

    html! {
        <div class="space-y-8">
            <Link<Route> to={Route::Spaces} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:underline">
                {"← All spaces"}
            </Link<Route>>

            {space.render("space", |space, _, error| {
                let details = &space.details;
                html! {
                    <>
                        if let Some(error) = error {
                            <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                        }
                        <div>
                            <div class="flex items-center gap-3">
                                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                    {&details.name}
                                </h1>
                                <StatusBadge label={details.status.label()} tone={space_tone(details.status)} />
                            </div>
                            <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                                {format!("{} · {} seats", details.space_type.label(), details.capacity)}
                                if let Some(floor) = &details.floor {
                                    {format!(" · Floor {floor}")}
                                }
                                {" · "}
                                <Link<Route>
                                    to={Route::LocationDetail { id: details.location.id().to_string() }}
                                    classes="hover:underline"
                                >
                                    {details.location.name().unwrap_or("View location")}
                                </Link<Route>>
                            </p>
                            if let Some(description) = &details.description {
                                <p class="mt-3 text-neutral-700 dark:text-neutral-300">{description}</p>
                            }
                        </div>

                        <div class="flex gap-2">
                            <button
                                onclick={set_flag(&editing, true).reform(|_: MouseEvent| ())}
                                class="px-4 py-2 rounded-md text-sm font-medium bg-neutral-900 text-white \
                                       dark:bg-neutral-100 dark:text-neutral-900"
                            >
                                {"Edit"}
                            </button>
                            <button
                                onclick={set_flag(&deleting, true).reform(|_: MouseEvent| ())}
                                class="px-4 py-2 rounded-md text-sm font-medium text-red-600 \
                                       border border-red-300 hover:bg-red-50"
                            >
                                {"Delete"}
                            </button>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            <section>
                                <h2 class="font-semibold mb-2">{"Rates"}</h2>
                                <ul class="text-sm space-y-1">
                                    {for rate_lines(&details.rates).into_iter().map(|line| html! { <li>{line}</li> })}
                                </ul>
                            </section>
                            <section>
                                <h2 class="font-semibold mb-2">{"Working hours"}</h2>
                                if details.working_hours.is_empty() {
                                    <p class="text-sm text-neutral-500">{"Follows the location's opening hours"}</p>
                                } else {
                                    <ul class="text-sm space-y-1">
                                        {for details.working_hours.iter().map(|hours| {
                                            let times = match (hours.is_open, hours.open_time, hours.close_time) {
                                                (true, Some(open), Some(close)) => {
                                                    format!("{} - {}", format_time(open), format_time(close))
                                                }
                                                _ => "Closed".to_string(),
                                            };
                                            html! { <li key={hours.day.key()}>{format!("{}: {times}", hours.day.label())}</li> }
                                        })}
                                    </ul>
                                }
                            </section>
                            <section>
                                <h2 class="font-semibold mb-2">{"Equipment"}</h2>
                                if details.equipment.is_empty() {
                                    <p class="text-sm text-neutral-500">{"None listed"}</p>
                                } else {
                                    <p class="text-sm">{details.equipment.join(", ")}</p>
                                }
                            </section>
                        </div>

                        <section>
                            <h2 class="font-semibold mb-2">{"Amenities"}</h2>
                            <AmenityList amenities={details.amenities.clone()} />
                        </section>

                        if let Some(product_type_id) = details.product_type_id {
                            <ProductTypeSummary {product_type_id} />
                        }

                        if *editing {
                            <SpaceFormModal editing={space.clone()} on_close={set_flag(&editing, false)} />
                        }
                        if *deleting {
                            <ConfirmationModal
                                title="Delete space"
                                message={format!("{} will be removed.", details.name)}
                                confirm_text="Delete space"
                                on_confirm={on_delete.clone()}
                                on_close={set_flag(&deleting, false)}
                                is_loading={mutation.is_pending()}
                            />
                        }
                    </>
                }
            })}

            <section class="space-y-3">
                <div class="flex items-center gap-3">
                    <h2 class="text-xl font-semibold">{"Availability"}</h2>
                    <input
                        type="date"
                        value={date.to_string()}
                        onchange={on_date}
                        class="px-2 py-1 text-sm border rounded-md border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-700"
                    />
                </div>
                {availability.render("availability", |day, _, _| availability_view(day))}
            </section>
        </div>
    }
}

fn availability_view(day: &responses::SpaceAvailability) -> Html {
    if !day.is_open {
        return html! { <p class="text-sm text-neutral-500">{"Closed on this day"}</p> };
    }

    let hours = match (day.open_time, day.close_time) {
        (Some(open), Some(close)) => format!("Open {} - {}", format_time(open), format_time(close)),
        _ => "Open".to_string(),
    };

    html! {
        <div class="space-y-2">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{hours}</p>
            if day.is_fully_free() {
                <p class="text-sm text-green-700 dark:text-green-400">{"No bookings, free all day"}</p>
            } else {
                <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for day.booked_slots.iter().map(|slot| html! {
                        <li key={slot.booking_id.to_string()} class="py-2 flex justify-between text-sm">
                            <span>{format_period(slot.start_at, slot.end_at)}</span>
                            <StatusBadge label={slot.status.label()} tone={booking_tone(slot.status)} />
                        </li>
                    })}
                </ul>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SummaryProps {
    product_type_id: ProductTypeId,
}

/// The space type a space was generated from.
#[function_component]
fn ProductTypeSummary(props: &SummaryProps) -> Html {
    let product_type = use_product_type(props.product_type_id);

    html! {
        <section>
            <h2 class="font-semibold mb-2">{"Space type"}</h2>
            {product_type.render("space type", |product_type, _, _| {
                let details = &product_type.details;
                html! {
                    <p class="text-sm">
                        <span class="font-medium">{&details.name}</span>
                        {format!(
                            " · {} · {}-{} seats · {}",
                            details.category.label(),
                            details.capacity.min,
                            details.capacity.max,
                            starting_rate(&details.pricing)
                        )}
                    </p>
                }
            })}
        </section>
    }
}
