use payloads::{
    LocationId, SpaceCategory, query::Mutation,
    requests::ProductTypeListParams, responses,
};
use yew::prelude::*;

use super::{PageHeader, filter_setter};
use crate::{
    components::{
        ConfirmationModal, GenerateSpacesModal, LocationSelect,
        PaginationControls, SpaceTypeFormModal, StatCard, StatGroup,
        StatusBadge,
        fields::{SelectField, enum_options},
        status_badge::Tone,
    },
    contexts::toast::use_toast,
    get_api_client,
    hooks::{use_location_options, use_mutation, use_product_types, use_title},
    utils::format::starting_rate,
};

#[function_component]
pub fn SpaceTypesPage() -> Html {
    use_title("Space types");

    let location = use_state(String::new);
    let category = use_state(String::new);
    let page = use_state(|| 1u32);

    let creating = use_state(|| false);
    let editing = use_state(|| None::<responses::ProductType>);
    let generating = use_state(|| None::<responses::ProductType>);
    let deleting = use_state(|| None::<responses::ProductType>);
    let mutation = use_mutation();
    let toasts = use_toast();
    let location_names = use_location_options();

    let location_id = location.parse().ok().map(LocationId);
    let product_types = use_product_types(ProductTypeListParams {
        page: *page,
        location_id,
        category: SpaceCategory::from_key(&category),
        ..Default::default()
    });

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |p: u32| page.set(p))
    };

    let open = |state: &UseStateHandle<Option<responses::ProductType>>| {
        let state = state.clone();
        Callback::from(move |product_type: responses::ProductType| {
            state.set(Some(product_type))
        })
    };
    let close = |state: &UseStateHandle<Option<responses::ProductType>>| {
        let state = state.clone();
        Callback::from(move |_: ()| state.set(None))
    };

    let open_create = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };
    let close_create = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(false))
    };

    let on_delete = {
        let deleting = deleting.clone();
        let mutation = mutation.clone();
        Callback::from(move |_: ()| {
            let Some(product_type) = (*deleting).clone() else {
                return;
            };
            let product_type_id = product_type.id;
            let request = async move {
                get_api_client().delete_product_type(&product_type_id).await
            };
            let on_success = {
                let toasts = toasts.clone();
                let deleting = deleting.clone();
                Callback::from(move |_: ()| {
                    toasts.success(format!("Deleted {}", product_type.details.name));
                    deleting.set(None);
                })
            };
            let on_error = {
                let toasts = toasts.clone();
                let deleting = deleting.clone();
                Callback::from(move |e: payloads::ClientError| {
                    toasts.error(format!("Could not delete space type: {e}"));
                    deleting.set(None);
                })
            };
            mutation.run(
                Mutation::DeleteProductType(product_type_id),
                request,
                on_success,
                on_error,
            );
        })
    };

    let location_name = move |id: LocationId| {
        location_names
            .iter()
            .find(|(option, _)| *option == id)
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| "-".to_string())
    };

    html! {
        <div class="space-y-6">
            <PageHeader title="Space types" subtitle="Templates that spaces are generated from">
                <button
                    onclick={open_create}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 \
                           text-white px-4 py-2 rounded-md text-sm font-medium"
                >
                    {"New space type"}
                </button>
            </PageHeader>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <LocationSelect
                    value={(*location).clone()}
                    on_change={filter_setter(&location, &page)}
                    empty_label="All locations"
                />
                <SelectField
                    label="Category"
                    value={(*category).clone()}
                    options={enum_options(&SpaceCategory::ALL, SpaceCategory::key, SpaceCategory::label)}
                    on_change={filter_setter(&category, &page)}
                    empty_label="All categories"
                />
            </div>

            {product_types.render("space types", |data, is_loading, error| {
                let active = data.items.iter().filter(|p| p.details.is_active).count();
                let generated: u32 = data.items.iter().map(|p| p.space_count).sum();
                html! {
                    <>
                        <StatGroup heading="On this page">
                            <StatCard label="Space types" value={data.items.len().to_string()} />
                            <StatCard label="Active" value={active.to_string()} />
                            <StatCard label="Spaces generated" value={generated.to_string()} />
                        </StatGroup>

                        if let Some(error) = error {
                            <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
                        }

                        if data.items.is_empty() {
                            <div class="text-center py-12">
                                <p class="text-neutral-600 dark:text-neutral-400">
                                    {"No space types match these filters."}
                                </p>
                            </div>
                        } else {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {for data.items.iter().map(|product_type| {
                                    let details = &product_type.details;
                                    let edit = {
                                        let product_type = product_type.clone();
                                        open(&editing).reform(move |_: MouseEvent| product_type.clone())
                                    };
                                    let generate = {
                                        let product_type = product_type.clone();
                                        open(&generating).reform(move |_: MouseEvent| product_type.clone())
                                    };
                                    let delete = {
                                        let product_type = product_type.clone();
                                        open(&deleting).reform(move |_: MouseEvent| product_type.clone())
                                    };
                                    let (status, tone) = if details.is_active {
                                        ("Active", Tone::Good)
                                    } else {
                                        ("Inactive", Tone::Neutral)
                                    };
                                    html! {
                                        <div key={product_type.id.to_string()}
                                            class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-3">
                                            <div class="flex justify-between items-start gap-2">
                                                <h3 class="text-xl font-semibold">{&details.name}</h3>
                                                <StatusBadge label={status} {tone} />
                                            </div>
                                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                {format!("{} · {}", details.category.label(), location_name(details.location_id))}
                                            </p>
                                            <p class="text-sm">
                                                {format!(
                                                    "{}-{} seats · {}",
                                                    details.capacity.min,
                                                    details.capacity.max,
                                                    starting_rate(&details.pricing)
                                                )}
                                            </p>
                                            <p class="text-sm text-neutral-500">
                                                {format!("{} spaces generated", product_type.space_count)}
                                            </p>
                                            <div class="flex gap-3 text-sm pt-2">
                                                <button onclick={edit} class="hover:underline">{"Edit"}</button>
                                                <button onclick={generate} class="hover:underline">{"Generate spaces"}</button>
                                                <button onclick={delete} class="text-red-600 hover:underline">{"Delete"}</button>
                                            </div>
                                        </div>
                                    }
                                })}
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
                <SpaceTypeFormModal default_location={location_id} on_close={close_create} />
            }
            if let Some(product_type) = (*editing).clone() {
                <SpaceTypeFormModal editing={product_type} on_close={close(&editing)} />
            }
            if let Some(product_type) = (*generating).clone() {
                <GenerateSpacesModal {product_type} on_close={close(&generating)} />
            }
            if let Some(product_type) = (*deleting).clone() {
                <ConfirmationModal
                    title="Delete space type"
                    message={format!(
                        "{} will be removed. Spaces already generated from it stay in place.",
                        product_type.details.name
                    )}
                    confirm_text="Delete space type"
                    on_confirm={on_delete.clone()}
                    on_close={close(&deleting)}
                    is_loading={mutation.is_pending()}
                />
            }
        </div>
    }
}
