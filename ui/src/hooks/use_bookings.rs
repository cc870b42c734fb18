use payloads::{
    BookingId,
    query::QueryKey,
    requests::{BookingListParams, StatsParams},
    responses::{self, Paginated},
};
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_query},
};

#[hook]
pub fn use_bookings(
    params: BookingListParams,
) -> FetchHookReturn<Paginated<responses::Booking>> {
    use_query(QueryKey::Bookings(params.clone()), move |_| {
        let params = params.clone();
        async move { get_api_client().list_bookings(&params).await }
    })
}

#[hook]
pub fn use_booking(booking_id: BookingId) -> FetchHookReturn<responses::Booking> {
    use_query(QueryKey::Booking(booking_id), move |_| async move {
        get_api_client().get_booking(&booking_id).await
    })
}

#[hook]
pub fn use_booking_stats(
    params: StatsParams,
) -> FetchHookReturn<responses::BookingStats> {
    use_query(QueryKey::BookingStats(params.clone()), move |_| {
        let params = params.clone();
        async move { get_api_client().booking_stats(&params).await }
    })
}
