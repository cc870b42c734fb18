use payloads::{
    LocationId, SpaceCategory, SpaceStatus,
    query::Mutation,
    requests::{SpaceListParams, StatsParams, filter_text},
    responses::{self, SpaceStats},
    stats::summarize_spaces,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{PageHeader, filter_setter};
use crate::{
    Route,
    components::{
        ConfirmationModal, LocationSelect, PaginationControls,
        SpaceFormModal, StatCard, StatGroup, StatusBadge,
        fields::{SelectField, TextField, enum_options},
        status_badge::space_tone,
    },
    contexts::toast::use_toast,
    get_api_client,
    hooks::{use_mutation, use_space_stats, use_spaces, use_title},
    utils::format::{percent, starting_rate},
};

#[function_component]
pub fn SpacesPage() -> Html {
    use_title("Spaces");

    let location = use_state(String::new);
    let space_type = use_state(String::new);
    let status = use_state(String::new);
    let search = use_state(String::new);
    let page = use_state(|| 1u32);

    let creating = use_state(|| false);
    let editing = use_state(|| None::<responses::Space>);
    let deleting = use_state(|| None::<responses::Space>);
    let mutation = use_mutation();
    let toasts = use_toast();

    let location_id = location.parse().ok().map(LocationId);
    let params = SpaceListParams {
        page: *page,
        location_id,
        space_type: SpaceCategory::from_key(&space_type),
        status: SpaceStatus::from_key(&status),
        search: filter_text(&search),
        ..Default::default()
    };
    let spaces = use_spaces(params);
    let server_stats = use_space_stats(StatsParams { location_id });

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |p: u32| page.set(p))
    };

    let on_delete = {
        let deleting = deleting.clone();
        let mutation = mutation.clone();
        Callback::from(move |_: ()| {
            let Some(space) = (*deleting).clone() else {
                return;
            };
            let space_id = space.id;
            let request =
                async move { get_api_client().delete_space(&space_id).await };
            let on_success = {
                let toasts = toasts.clone();
                let deleting = deleting.clone();
                Callback::from(move |_: ()| {
                    toasts.success(format!("Deleted {}", space.details.name));
                    deleting.set(None);
                })
            };
            let on_error = {
                let toasts = toasts.clone();
                let deleting = deleting.clone();
                Callback::from(move |e: payloads::ClientError| {
                    toasts.error(format!("Could not delete space: {e}"));
                    deleting.set(None);
                })
            };
            mutation.run(Mutation::DeleteSpace(space_id), request, on_success, on_error);
        })
    };

    let open_create = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };
    let close_create = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(false))
    };
    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |space: responses::Space| editing.set(Some(space)))
    };
    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };
    let ask_delete = {
        let deleting = deleting.clone();
        Callback::from(move |space: responses::Space| deleting.set(Some(space)))
    };
    let close_delete = {
        let deleting = deleting.clone();
        Callback::from(move |_: ()| deleting.set(None))
    };

    let scope = if location_id.is_some() { "At this location" } else { "All spaces" };

    html! {
        <div class="space-y-6">
            <PageHeader title="Spaces" subtitle="Desks, rooms and offices across locations">
                <button
                    onclick={open_create}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 \
                           text-white px-4 py-2 rounded-md text-sm font-medium"
                >
                    {"New space"}
                </button>
            </PageHeader>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <LocationSelect
                    value={(*location).clone()}
                    on_change={filter_setter(&location, &page)}
                    empty_label="All locations"
                />
                <SelectField
                    label="Type"
                    value={(*space_type).clone()}
                    options={enum_options(&SpaceCategory::ALL, SpaceCategory::key, SpaceCategory::label)}
                    on_change={filter_setter(&space_type, &page)}
                    empty_label="All types"
                />
                <SelectField
                    label="Status"
                    value={(*status).clone()}
                    options={enum_options(&SpaceStatus::ALL, SpaceStatus::key, SpaceStatus::label)}
                    on_change={filter_setter(&status, &page)}
                    empty_label="All statuses"
                />
                <TextField
                    label="Search"
                    value={(*search).clone()}
                    on_change={filter_setter(&search, &page)}
                    placeholder="Space name"
                />
            </div>

            {server_stats.render("space statistics", |stats, _, _| {
                space_stat_group(scope, stats)
            })}

            {spaces.render("spaces", |data, is_loading, error| {
                let page_stats = summarize_spaces(data.items.iter().map(|s| &s.details));
                html! {
                    <>
                        {space_stat_group("On this page", &page_stats)}

                        if let Some(error) = error {
                            <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                        }

                        <SpaceTable
                            spaces={data.items.clone()}
                            on_edit={on_edit.clone()}
                            on_delete={ask_delete.clone()}
                        />

                        <PaginationControls
                            pagination={data.pagination}
                            on_page_change={on_page_change.clone()}
                            {is_loading}
                        />
                    </>
                }
            })}

            if *creating {
                <SpaceFormModal
                    default_location={location_id}
                    on_close={close_create}
                />
            }
            if let Some(space) = (*editing).clone() {
                <SpaceFormModal
                    editing={space}
                    on_close={close_edit}
                />
            }
            if let Some(space) = (*deleting).clone() {
                <ConfirmationModal
                    title="Delete space"
                    message={format!("{} and its availability will be removed.", space.details.name)}
                    confirm_text="Delete space"
                    on_confirm={on_delete.clone()}
                    on_close={close_delete}
                    is_loading={mutation.is_pending()}
                />
            }
        </div>
    }
}

fn space_stat_group(heading: &'static str, stats: &SpaceStats) -> Html {
    html! {
        <StatGroup {heading}>
            <StatCard label="Spaces" value={stats.total_spaces.to_string()}
                hint={format!("{} seats", stats.total_capacity)} />
            <StatCard label="Available" value={stats.available.to_string()} />
            <StatCard label="In use" value={(stats.occupied + stats.reserved).to_string()}
                hint={format!("{} occupied, {} reserved", stats.occupied, stats.reserved)} />
            <StatCard label="Occupancy" value={percent(stats.occupancy_rate)}
                hint={format!("{} in maintenance", stats.maintenance)} />
        </StatGroup>
    }
}

#[derive(Properties, PartialEq)]
struct SpaceTableProps {
    spaces: Vec<responses::Space>,
    on_edit: Callback<responses::Space>,
    on_delete: Callback<responses::Space>,
}

#[function_component]
fn SpaceTable(props: &SpaceTableProps) -> Html {
    if props.spaces.is_empty() {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">{"No spaces match these filters."}</p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead>
                    <tr class="text-left text-neutral-500 border-b border-neutral-200 dark:border-neutral-700">
                        <th class="py-2 pr-4">{"Name"}</th>
                        <th class="py-2 pr-4">{"Location"}</th>
                        <th class="py-2 pr-4">{"Type"}</th>
                        <th class="py-2 pr-4">{"Capacity"}</th>
                        <th class="py-2 pr-4">{"Rate"}</th>
                        <th class="py-2 pr-4">{"Status"}</th>
                        <th class="py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    {for props.spaces.iter().map(|space| {
                        let details = &space.details;
                        let on_edit = {
                            let space = space.clone();
                            props.on_edit.reform(move |_: MouseEvent| space.clone())
                        };
                        let on_delete = {
                            let space = space.clone();
                            props.on_delete.reform(move |_: MouseEvent| space.clone())
                        };
                        html! {
                            <tr key={space.id.to_string()} class="border-b border-neutral-100 dark:border-neutral-800">
                                <td class="py-2 pr-4">
                                    <Link<Route> to={Route::SpaceDetail { id: space.id.to_string() }} classes="font-medium hover:underline">
                                        {&details.name}
                                    </Link<Route>>
                                </td>
                                <td class="py-2 pr-4">{details.location.name().unwrap_or("-")}</td>
                                <td class="py-2 pr-4">{details.space_type.label()}</td>
                                <td class="py-2 pr-4">{details.capacity}</td>
                                <td class="py-2 pr-4">{starting_rate(&details.rates)}</td>
                                <td class="py-2 pr-4">
                                    <StatusBadge label={details.status.label()} tone={space_tone(details.status)} />
                                </td>
                                <td class="py-2 text-right space-x-3">
                                    <button onclick={on_edit} class="hover:underline">{"Edit"}</button>
                                    <button onclick={on_delete} class="text-red-600 hover:underline">{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
