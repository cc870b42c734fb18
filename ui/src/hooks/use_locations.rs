use payloads::{
    LocationId,
    query::QueryKey,
    requests::{LocationListParams, MAX_PAGE_SIZE},
    responses::{self, Paginated},
};
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_query},
};

/// One page of locations matching `params`.
#[hook]
pub fn use_locations(
    params: LocationListParams,
) -> FetchHookReturn<Paginated<responses::Location>> {
    use_query(QueryKey::Locations(params.clone()), move |_| {
        let params = params.clone();
        async move { get_api_client().list_locations(&params).await }
    })
}

#[hook]
pub fn use_location(
    location_id: LocationId,
) -> FetchHookReturn<responses::Location> {
    use_query(QueryKey::Location(location_id), move |_| async move {
        get_api_client().get_location(&location_id).await
    })
}

/// `(id, name)` pairs for location pickers, shared through the location list
/// cache.
#[hook]
pub fn use_location_options() -> Vec<(LocationId, String)> {
    let params = LocationListParams {
        limit: MAX_PAGE_SIZE,
        ..Default::default()
    };
    let locations = use_locations(params);
    locations
        .data
        .as_ref()
        .map(|page| {
            page.items
                .iter()
                .map(|l| (l.id, l.details.name.clone()))
                .collect()
        })
        .unwrap_or_default()
}
