use payloads::{
    LocationId,
    forms::format_time,
    query::Mutation,
    requests::{ProductTypeListParams, SpaceListParams},
    responses,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    Route,
    components::{
        AmenityList, ConfirmationModal, LocationFormModal, StatCard,
        StatGroup, StatusBadge,
        status_badge::{location_tone, space_tone},
    },
    contexts::toast::use_toast,
    get_api_client,
    hooks::{
        use_location, use_mutation, use_product_types, use_push_route,
        use_spaces, use_title,
    },
    utils::format::{percent, starting_rate},
};
use super::NotFoundPage;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub location_id: LocationId,
}

#[function_component]
pub fn LocationDetailPage(props: &Props) -> Html {
    let location_id = props.location_id;
    let location = use_location(location_id);
    let spaces = use_spaces(SpaceListParams::for_location(location_id));
    let product_types =
        use_product_types(ProductTypeListParams::for_location(location_id));

    let editing = use_state(|| false);
    let deleting = use_state(|| false);
    let mutation = use_mutation();
    let toasts = use_toast();
    let push_route = use_push_route();

    use_title(
        location
            .data
            .as_ref()
            .map(|l| l.details.name.as_str())
            .unwrap_or("Location"),
    );

    let set_flag = |flag: &UseStateHandle<bool>, value: bool| {
        let flag = flag.clone();
        Callback::from(move |_: ()| flag.set(value))
    };

    let on_delete = {
        let deleting = deleting.clone();
        let mutation = mutation.clone();
        let name = location
            .data
            .as_ref()
            .map(|l| l.details.name.clone())
            .unwrap_or_default();

        Callback::from(move |_: ()| {
            let request = async move {
                get_api_client().delete_location(&location_id).await
            };
            let on_success = {
                let toasts = toasts.clone();
                let push_route = push_route.clone();
                let name = name.clone();
                Callback::from(move |_: ()| {
                    toasts.success(format!("Deleted {name}"));
                    push_route.emit(Route::Locations);
                })
            };
            let on_error = {
                let toasts = toasts.clone();
                let deleting = deleting.clone();
                Callback::from(move |e: payloads::ClientError| {
                    deleting.set(false);
                    toasts.error(format!("Could not delete location: {e}"));
                })
            };
            mutation.run(
                Mutation::DeleteLocation(location_id),
                request,
                on_success,
                on_error,
            );
        })
    };

    let spaces_section = spaces.render("spaces", |page, _, _| {
        if page.items.is_empty() {
            return html! {
                <p class="text-sm text-neutral-500">{"No spaces at this location yet."}</p>
            };
        }
        html! {
            <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                {for page.items.iter().map(|space| html! {
                    <li key={space.id.to_string()} class="py-2 flex justify-between items-center">
                        <Link<Route>
                            to={Route::SpaceDetail { id: space.id.to_string() }}
                            classes="font-medium hover:underline"
                        >
                            {&space.details.name}
                        </Link<Route>>
                        <span class="text-sm text-neutral-500">
                            {format!(
                                "{} · {} seats",
                                space.details.space_type.label(),
                                space.details.capacity
                            )}
                        </span>
                        <StatusBadge
                            label={space.details.status.label()}
                            tone={space_tone(space.details.status)}
                        />
                    </li>
                })}
            </ul>
        }
    });

    let types_section = product_types.render("space types", |page, _, _| {
        if page.items.is_empty() {
            return html! {
                <p class="text-sm text-neutral-500">{"No space types at this location yet."}</p>
            };
        }
        html! {
            <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                {for page.items.iter().map(|product_type| html! {
                    <li key={product_type.id.to_string()} class="py-2 flex justify-between">
                        <span class="font-medium">{&product_type.details.name}</span>
                        <span class="text-sm text-neutral-500">
                            {format!(
                                "{} spaces · {}",
                                product_type.space_count,
                                starting_rate(&product_type.details.pricing)
                            )}
                        </span>
                    </li>
                })}
            </ul>
        }
    });

    if location.not_found {
        return html! { <NotFoundPage /> };
    }

    html! {
        <div class="space-y-8">
            <Link<Route> to={Route::Locations} classes="text-sm text-neutral-600 dark:text-neutral-400 hover:underline">
                {"← All locations"}
            </Link<Route>>

            {location.render("location", |location, _, error| html! {
                <>
                    if let Some(error) = error {
                        <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                    }
                    <LocationOverview location={location.clone()} />
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

                    if *editing {
                        <LocationFormModal
                            editing={location.clone()}
                            on_close={set_flag(&editing, false)}
                        />
                    }
                    if *deleting {
                        <ConfirmationModal
                            title="Delete location"
                            message="Locations that still have spaces cannot be deleted."
                            confirm_text="Delete location"
                            confirmation_value={location.details.name.clone()}
                            on_confirm={on_delete.clone()}
                            on_close={set_flag(&deleting, false)}
                            is_loading={mutation.is_pending()}
                        />
                    }
                </>
            })}

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <section>
                    <h2 class="text-xl font-semibold mb-3">{"Spaces"}</h2>
                    {spaces_section}
                </section>
                <section>
                    <h2 class="text-xl font-semibold mb-3">{"Space types"}</h2>
                    {types_section}
                </section>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct OverviewProps {
    location: responses::Location,
}

#[function_component]
fn LocationOverview(props: &OverviewProps) -> Html {
    let details = &props.location.details;
    let stats = &props.location.stats;
    let rules = &details.booking_rules;

    html! {
        <div class="space-y-6">
            <div>
                <div class="flex items-center gap-3">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {&details.name}
                    </h1>
                    <StatusBadge label={details.status.label()} tone={location_tone(details.status)} />
                </div>
                <p class="text-neutral-600 dark:text-neutral-400 mt-1">{details.address.one_line()}</p>
                if let Some(description) = &details.description {
                    <p class="mt-3 text-neutral-700 dark:text-neutral-300">{description}</p>
                }
            </div>

            <StatGroup heading="Right now">
                <StatCard label="Spaces" value={stats.total_spaces.to_string()}
                    hint={format!("{} available", stats.available_spaces)} />
                <StatCard label="Capacity" value={stats.total_capacity.to_string()} />
                <StatCard label="Active bookings" value={stats.active_bookings.to_string()} />
                <StatCard label="Occupancy" value={percent(stats.occupancy_rate)} />
            </StatGroup>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <section>
                    <h2 class="font-semibold mb-2">{"Opening hours"}</h2>
                    <table class="text-sm w-full">
                        <tbody>
                            {for details.operating_hours.iter().map(|hours| {
                                let times = match (hours.is_open, hours.open_time, hours.close_time) {
                                    (true, Some(open), Some(close)) => {
                                        format!("{} - {}", format_time(open), format_time(close))
                                    }
                                    _ => "Closed".to_string(),
                                };
                                html! {
                                    <tr key={hours.day.key()}>
                                        <td class="pr-4 py-0.5 text-neutral-600 dark:text-neutral-400">{hours.day.label()}</td>
                                        <td>{times}</td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </section>

                <section>
                    <h2 class="font-semibold mb-2">{"Contacts"}</h2>
                    <ul class="text-sm space-y-1">
                        {for details.contacts.iter().map(|contact| html! {
                            <li>
                                <span class="text-neutral-500">{contact.contact_type.label()}{": "}</span>
                                {&contact.value}
                                if contact.is_primary {
                                    <span class="ml-1 text-xs text-neutral-500">{"(primary)"}</span>
                                }
                            </li>
                        })}
                    </ul>
                </section>

                <section>
                    <h2 class="font-semibold mb-2">{"Booking rules"}</h2>
                    <ul class="text-sm space-y-1 text-neutral-700 dark:text-neutral-300">
                        <li>{format!("Minimum booking: {} minutes", rules.min_booking_minutes)}</li>
                        <li>{format!("Maximum booking: {} hours", rules.max_booking_hours)}</li>
                        <li>{format!("Book up to {} days ahead", rules.advance_booking_days)}</li>
                        <li>{format!("Free cancellation until {} hours before", rules.cancellation_hours)}</li>
                        if rules.requires_approval {
                            <li>{"Bookings require approval"}</li>
                        }
                    </ul>
                </section>
            </div>

            <section>
                <h2 class="font-semibold mb-2">{"Amenities"}</h2>
                <AmenityList amenities={details.amenities.clone()} />
            </section>
        </div>
    }
}
