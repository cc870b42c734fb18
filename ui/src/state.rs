use payloads::{
    query::{Mutation, QueryCache},
    responses::{self, Paginated},
};
use yewdux::prelude::*;

/// Global store: one query cache per response type.
///
/// Hooks read and fill these caches through [`crate::hooks::Cached`];
/// successful mutations mark entries stale through [`State::invalidate`].
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub locations: QueryCache<Paginated<responses::Location>>,
    pub location: QueryCache<responses::Location>,
    pub spaces: QueryCache<Paginated<responses::Space>>,
    pub space: QueryCache<responses::Space>,
    pub space_stats: QueryCache<responses::SpaceStats>,
    pub availability: QueryCache<responses::SpaceAvailability>,
    pub product_types: QueryCache<Paginated<responses::ProductType>>,
    pub product_type: QueryCache<responses::ProductType>,
    pub bookings: QueryCache<Paginated<responses::Booking>>,
    pub booking: QueryCache<responses::Booking>,
    pub booking_stats: QueryCache<responses::BookingStats>,
}

impl State {
    /// Mark everything `mutation` affects as stale. Returns the number of
    /// cached entries touched.
    pub fn invalidate(&mut self, mutation: &Mutation) -> usize {
        self.locations.apply(mutation)
            + self.location.apply(mutation)
            + self.spaces.apply(mutation)
            + self.space.apply(mutation)
            + self.space_stats.apply(mutation)
            + self.availability.apply(mutation)
            + self.product_types.apply(mutation)
            + self.product_type.apply(mutation)
            + self.bookings.apply(mutation)
            + self.booking.apply(mutation)
            + self.booking_stats.apply(mutation)
    }
}
