use jiff::civil::Date;
use payloads::{
    SpaceId,
    query::QueryKey,
    requests::{SpaceListParams, StatsParams},
    responses::{self, Paginated},
};
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_query},
};

#[hook]
pub fn use_spaces(
    params: SpaceListParams,
) -> FetchHookReturn<Paginated<responses::Space>> {
    use_query(QueryKey::Spaces(params.clone()), move |_| {
        let params = params.clone();
        async move { get_api_client().list_spaces(&params).await }
    })
}

#[hook]
pub fn use_space(space_id: SpaceId) -> FetchHookReturn<responses::Space> {
    use_query(QueryKey::Space(space_id), move |_| async move {
        get_api_client().get_space(&space_id).await
    })
}

/// Server-side totals over every space in scope.
#[hook]
pub fn use_space_stats(
    params: StatsParams,
) -> FetchHookReturn<responses::SpaceStats> {
    use_query(QueryKey::SpaceStats(params.clone()), move |_| {
        let params = params.clone();
        async move { get_api_client().space_stats(&params).await }
    })
}

#[hook]
pub fn use_space_availability(
    space_id: SpaceId,
    date: Date,
) -> FetchHookReturn<responses::SpaceAvailability> {
    use_query(QueryKey::SpaceAvailability(space_id, date), move |_| async move {
        get_api_client().space_availability(&space_id, date).await
    })
}
