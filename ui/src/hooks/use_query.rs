use jiff::Timestamp;
use payloads::{
    ClientError,
    query::{QueryCache, QueryKey},
    responses::{self, Paginated},
};
use std::future::Future;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// A response type with its own cache in the global [`State`].
pub trait Cached: Clone + PartialEq + 'static {
    fn cache(state: &State) -> &QueryCache<Self>;
    fn cache_mut(state: &mut State) -> &mut QueryCache<Self>;
}

macro_rules! cached {
    ($ty:ty, $field:ident) => {
        impl Cached for $ty {
            fn cache(state: &State) -> &QueryCache<Self> {
                &state.$field
            }

            fn cache_mut(state: &mut State) -> &mut QueryCache<Self> {
                &mut state.$field
            }
        }
    };
}

cached!(Paginated<responses::Location>, locations);
cached!(responses::Location, location);
cached!(Paginated<responses::Space>, spaces);
cached!(responses::Space, space);
cached!(responses::SpaceStats, space_stats);
cached!(responses::SpaceAvailability, availability);
cached!(Paginated<responses::ProductType>, product_types);
cached!(responses::ProductType, product_type);
cached!(Paginated<responses::Booking>, bookings);
cached!(responses::Booking, booking);
cached!(responses::BookingStats, booking_stats);

/// Fetch `key` through the store's cache.
///
/// Fresh entries are served without a request. Missing, expired, or
/// invalidated entries are fetched with `fetch_fn`; stale data keeps
/// rendering until the new result lands.
#[hook]
pub fn use_query<T, F, Fut>(key: QueryKey, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Cached,
    F: Fn(QueryKey) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let (state, dispatch) = use_store::<State>();
    let not_found = use_state(|| false);
    let needs_fetch = T::cache(&state).needs_fetch(&key, Timestamp::now());

    let get_cached = {
        let state = state.clone();
        let key = key.clone();
        move || T::cache(&state).get(&key).cloned()
    };

    let fetch_and_cache = {
        let key = key.clone();
        let not_found = not_found.clone();
        move || {
            let key = key.clone();
            let dispatch = dispatch.clone();
            let not_found = not_found.clone();
            let request = fetch_fn(key.clone());
            async move {
                tracing::debug!(?key, "fetching");
                match request.await {
                    Ok(data) => {
                        not_found.set(false);
                        let cached = data.clone();
                        dispatch.reduce_mut(|s| {
                            T::cache_mut(s).insert(key, cached, Timestamp::now())
                        });
                        Ok(data)
                    }
                    Err(e) => {
                        tracing::error!(?key, "query failed: {e}");
                        not_found.set(e.is_not_found());
                        Err(e.to_string())
                    }
                }
            }
        }
    };

    let mut fetched = use_fetch_with_cache(
        (key, needs_fetch),
        get_cached,
        move || needs_fetch,
        fetch_and_cache,
    );
    fetched.not_found = *not_found;
    fetched
}
