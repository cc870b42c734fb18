use payloads::{
    LocationStatus,
    requests::{LocationListParams, filter_text},
    responses,
    stats::summarize_locations,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{PageHeader, filter_setter};
use crate::{
    Route,
    components::{
        LocationFormModal, PaginationControls, StatCard, StatGroup,
        StatusBadge,
        fields::{SelectField, TextField, enum_options},
        status_badge::location_tone,
    },
    hooks::{use_locations, use_title},
    utils::format::percent,
};

#[function_component]
pub fn LocationsPage() -> Html {
    use_title("Locations");

    let search = use_state(String::new);
    let city = use_state(String::new);
    let status = use_state(String::new);
    let page = use_state(|| 1u32);
    let creating = use_state(|| false);

    let params = LocationListParams {
        page: *page,
        search: filter_text(&search),
        city: filter_text(&city),
        status: LocationStatus::from_key(&status),
        ..Default::default()
    };
    let locations = use_locations(params);

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |p: u32| page.set(p))
    };
    let open_create = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };
    let close_create = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(false))
    };

    html! {
        <div class="space-y-6">
            <PageHeader title="Locations" subtitle="Buildings and their opening hours">
                <button
                    onclick={open_create}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 \
                           text-white px-4 py-2 rounded-md text-sm font-medium"
                >
                    {"New location"}
                </button>
            </PageHeader>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <TextField
                    label="Search"
                    value={(*search).clone()}
                    on_change={filter_setter(&search, &page)}
                    placeholder="Name or street"
                />
                <TextField
                    label="City"
                    value={(*city).clone()}
                    on_change={filter_setter(&city, &page)}
                />
                <SelectField
                    label="Status"
                    value={(*status).clone()}
                    options={enum_options(&LocationStatus::ALL, LocationStatus::key, LocationStatus::label)}
                    on_change={filter_setter(&status, &page)}
                    empty_label="All statuses"
                />
            </div>

            {locations.render("locations", |data, is_loading, error| {
                let stats = summarize_locations(&data.items);
                html! {
                    <>
                        <StatGroup heading="On this page">
                            <StatCard label="Locations" value={stats.total_locations.to_string()}
                                hint={format!("{} active", stats.active_locations)} />
                            <StatCard label="Spaces" value={stats.total_spaces.to_string()}
                                hint={format!("{} available", stats.available_spaces)} />
                            <StatCard label="Capacity" value={stats.total_capacity.to_string()} />
                            <StatCard label="Average occupancy" value={percent(stats.average_occupancy)} />
                        </StatGroup>

                        if let Some(error) = error {
                            <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                        }

                        if data.items.is_empty() {
                            <div class="text-center py-12">
                                <p class="text-neutral-600 dark:text-neutral-400">
                                    {"No locations match these filters."}
                                </p>
                            </div>
                        } else {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {for data.items.iter().map(location_card)}
                            </div>
                        }

                        <PaginationControls
                            pagination={data.pagination}
                            on_page_change={on_page_change.clone()}
                            {is_loading}
                        />
                    </>
                }
            })}

            if *creating {
                <LocationFormModal on_close={close_create} />
            }
        </div>
    }
}

fn location_card(location: &responses::Location) -> Html {
    let details = &location.details;
    let stats = &location.stats;

    html! {
        <div key={location.id.to_string()}
            class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-3">
            <div class="flex justify-between items-start gap-2">
                <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {&details.name}
                </h3>
                <StatusBadge label={details.status.label()} tone={location_tone(details.status)} />
            </div>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {details.address.one_line()}
            </p>
            <div class="grid grid-cols-3 gap-2 text-sm">
                <div>
                    <div class="font-semibold">{stats.total_spaces}</div>
                    <div class="text-neutral-500">{"spaces"}</div>
                </div>
                <div>
                    <div class="font-semibold">{stats.available_spaces}</div>
                    <div class="text-neutral-500">{"available"}</div>
                </div>
                <div>
                    <div class="font-semibold">{percent(stats.occupancy_rate)}</div>
                    <div class="text-neutral-500">{"occupied"}</div>
                </div>
            </div>
            <Link<Route>
                to={Route::LocationDetail { id: location.id.to_string() }}
                classes="block w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 \
                         dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 \
                         rounded-md text-sm font-medium text-center"
            >
                {"View details"}
            </Link<Route>>
        </div>
    }
}
