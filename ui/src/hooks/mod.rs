pub mod use_bookings;
pub mod use_fetch;
pub mod use_locations;
pub mod use_mutation;
pub mod use_product_types;
pub mod use_push_route;
pub mod use_query;
pub mod use_spaces;
pub mod use_title;

pub use use_bookings::{use_booking, use_booking_stats, use_bookings};
pub use use_fetch::{FetchHookReturn, use_fetch_with_cache};
pub use use_locations::{use_location, use_location_options, use_locations};
pub use use_mutation::{MutationHandle, use_mutation};
pub use use_product_types::{use_product_type, use_product_types};
pub use use_push_route::use_push_route;
pub use use_query::{Cached, use_query};
pub use use_spaces::{
    use_space, use_space_availability, use_space_stats, use_spaces,
};
pub use use_title::use_title;

/// Whether a query has produced data yet. Distinguishes "not fetched" from
/// "fetched but empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
