//! Keyed cache for fetched API data.
//!
//! Every fetch is identified by a [`QueryKey`]. Cached entries go stale
//! after a per-family window, or immediately when a [`Mutation`] that
//! touches their family succeeds. Stale data stays readable so pages can
//! keep rendering while the refetch is in flight.

use crate::{
    BookingId, LocationId, ProductTypeId, SpaceId,
    requests::{
        BookingListParams, LocationListParams, ProductTypeListParams,
        SpaceListParams, StatsParams,
    },
};
use jiff::{SignedDuration, Timestamp, civil::Date};
use std::collections::HashMap;

/// Identifies one cached query: the resource plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Locations(LocationListParams),
    Location(LocationId),
    Spaces(SpaceListParams),
    Space(SpaceId),
    SpaceStats(StatsParams),
    SpaceAvailability(SpaceId, Date),
    ProductTypes(ProductTypeListParams),
    ProductType(ProductTypeId),
    Bookings(BookingListParams),
    Booking(BookingId),
    BookingStats(StatsParams),
}

/// A query key with its parameters erased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryFamily {
    Locations,
    LocationDetail,
    Spaces,
    SpaceDetail,
    SpaceStats,
    SpaceAvailability,
    ProductTypes,
    ProductTypeDetail,
    Bookings,
    BookingDetail,
    BookingStats,
}

impl QueryFamily {
    /// How long a fetched result is trusted before it is refetched.
    pub fn stale_time(&self) -> SignedDuration {
        match self {
            Self::SpaceAvailability => SignedDuration::from_secs(30),
            Self::SpaceStats
            | Self::BookingStats
            | Self::Bookings
            | Self::BookingDetail => SignedDuration::from_mins(1),
            Self::Spaces | Self::SpaceDetail => SignedDuration::from_mins(2),
            Self::Locations | Self::LocationDetail => {
                SignedDuration::from_mins(5)
            }
            Self::ProductTypes | Self::ProductTypeDetail => {
                SignedDuration::from_mins(10)
            }
        }
    }
}

impl QueryKey {
    pub fn family(&self) -> QueryFamily {
        match self {
            Self::Locations(_) => QueryFamily::Locations,
            Self::Location(_) => QueryFamily::LocationDetail,
            Self::Spaces(_) => QueryFamily::Spaces,
            Self::Space(_) => QueryFamily::SpaceDetail,
            Self::SpaceStats(_) => QueryFamily::SpaceStats,
            Self::SpaceAvailability(..) => QueryFamily::SpaceAvailability,
            Self::ProductTypes(_) => QueryFamily::ProductTypes,
            Self::ProductType(_) => QueryFamily::ProductTypeDetail,
            Self::Bookings(_) => QueryFamily::Bookings,
            Self::Booking(_) => QueryFamily::BookingDetail,
            Self::BookingStats(_) => QueryFamily::BookingStats,
        }
    }

    pub fn stale_time(&self) -> SignedDuration {
        self.family().stale_time()
    }
}

/// What a successful mutation invalidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Invalidation {
    Family(QueryFamily),
    Key(QueryKey),
}

impl Invalidation {
    pub fn matches(&self, key: &QueryKey) -> bool {
        match self {
            Self::Family(family) => key.family() == *family,
            Self::Key(target) => target == key,
        }
    }
}

/// A write against the API whose success makes cached reads outdated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateLocation,
    UpdateLocation(LocationId),
    DeleteLocation(LocationId),
    CreateSpace,
    UpdateSpace(SpaceId),
    DeleteSpace(SpaceId),
    CreateProductType,
    UpdateProductType(ProductTypeId),
    DeleteProductType(ProductTypeId),
    GenerateSpaces(ProductTypeId),
    CreateBooking,
    CancelBooking(BookingId),
}

impl Mutation {
    pub fn invalidates(&self) -> Vec<Invalidation> {
        use Invalidation::{Family, Key};
        use QueryFamily as F;

        match self {
            Self::CreateLocation => vec![Family(F::Locations)],
            Self::UpdateLocation(id) => vec![
                Family(F::Locations),
                Key(QueryKey::Location(*id)),
            ],
            Self::DeleteLocation(id) => vec![
                Family(F::Locations),
                Key(QueryKey::Location(*id)),
                Family(F::Spaces),
                Family(F::SpaceStats),
                Family(F::ProductTypes),
            ],
            // location stats snapshots count spaces
            Self::CreateSpace => vec![
                Family(F::Spaces),
                Family(F::SpaceStats),
                Family(F::Locations),
                Family(F::LocationDetail),
            ],
            Self::UpdateSpace(id) => vec![
                Family(F::Spaces),
                Family(F::SpaceStats),
                Family(F::SpaceAvailability),
                Key(QueryKey::Space(*id)),
                Family(F::Locations),
            ],
            Self::DeleteSpace(id) => vec![
                Family(F::Spaces),
                Family(F::SpaceStats),
                Family(F::SpaceAvailability),
                Key(QueryKey::Space(*id)),
                Family(F::Locations),
                Family(F::LocationDetail),
            ],
            Self::CreateProductType => vec![
                Family(F::ProductTypes),
                Family(F::Spaces),
                Family(F::SpaceStats),
                Family(F::Locations),
            ],
            Self::UpdateProductType(id) | Self::DeleteProductType(id) => vec![
                Family(F::ProductTypes),
                Key(QueryKey::ProductType(*id)),
            ],
            Self::GenerateSpaces(id) => vec![
                Family(F::Spaces),
                Family(F::SpaceStats),
                Key(QueryKey::ProductType(*id)),
                Family(F::ProductTypes),
                Family(F::Locations),
                Family(F::LocationDetail),
            ],
            Self::CreateBooking => vec![
                Family(F::Bookings),
                Family(F::BookingStats),
                Family(F::SpaceAvailability),
                Family(F::SpaceStats),
            ],
            Self::CancelBooking(id) => vec![
                Family(F::Bookings),
                Key(QueryKey::Booking(*id)),
                Family(F::BookingStats),
                Family(F::SpaceAvailability),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Missing,
    Fresh,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub data: T,
    pub fetched_at: Timestamp,
    pub invalidated: bool,
}

/// Cached results of one response type, keyed by query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryCache<T> {
    entries: HashMap<QueryKey, CacheEntry<T>>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> QueryCache<T> {
    /// Cached data for `key`, whether fresh or stale.
    pub fn get(&self, key: &QueryKey) -> Option<&T> {
        self.entries.get(key).map(|entry| &entry.data)
    }

    pub fn status(&self, key: &QueryKey, now: Timestamp) -> CacheStatus {
        match self.entries.get(key) {
            None => CacheStatus::Missing,
            Some(entry) => {
                let age = now.duration_since(entry.fetched_at);
                if entry.invalidated || age >= key.stale_time() {
                    CacheStatus::Stale
                } else {
                    CacheStatus::Fresh
                }
            }
        }
    }

    pub fn needs_fetch(&self, key: &QueryKey, now: Timestamp) -> bool {
        self.status(key, now) != CacheStatus::Fresh
    }

    pub fn insert(&mut self, key: QueryKey, data: T, now: Timestamp) {
        self.entries.insert(
            key,
            CacheEntry {
                data,
                fetched_at: now,
                invalidated: false,
            },
        );
    }

    /// Mark every matching entry stale. Returns how many entries matched.
    pub fn invalidate(&mut self, target: &Invalidation) -> usize {
        let mut count = 0;
        for (key, entry) in self.entries.iter_mut() {
            if target.matches(key) {
                entry.invalidated = true;
                count += 1;
            }
        }
        count
    }

    /// Apply every invalidation of a successful mutation.
    pub fn apply(&mut self, mutation: &Mutation) -> usize {
        mutation
            .invalidates()
            .iter()
            .map(|target| self.invalidate(target))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn now() -> Timestamp {
        "2025-01-01T12:00:00Z".parse().unwrap()
    }

    fn space_id() -> SpaceId {
        SpaceId(Uuid::new_v4())
    }

    #[test]
    fn missing_entries_need_fetch() {
        let cache = QueryCache::<u32>::default();
        let key = QueryKey::Spaces(SpaceListParams::default());
        assert_eq!(cache.status(&key, now()), CacheStatus::Missing);
        assert!(cache.needs_fetch(&key, now()));
    }

    #[test]
    fn entries_go_stale_after_their_family_window() {
        let mut cache = QueryCache::default();
        let id = space_id();
        let availability = QueryKey::SpaceAvailability(
            id,
            "2025-01-02".parse().unwrap(),
        );
        let locations = QueryKey::Locations(LocationListParams::default());
        cache.insert(availability.clone(), 1, now());
        cache.insert(locations.clone(), 2, now());

        let later = now() + SignedDuration::from_secs(45);
        assert_eq!(cache.status(&availability, later), CacheStatus::Stale);
        assert_eq!(cache.status(&locations, later), CacheStatus::Fresh);

        let much_later = now() + SignedDuration::from_mins(5);
        assert_eq!(cache.status(&locations, much_later), CacheStatus::Stale);
    }

    #[test]
    fn stale_data_remains_readable() {
        let mut cache = QueryCache::default();
        let key = QueryKey::Space(space_id());
        cache.insert(key.clone(), "desk", now());
        cache.invalidate(&Invalidation::Key(key.clone()));
        assert_eq!(cache.status(&key, now()), CacheStatus::Stale);
        assert_eq!(cache.get(&key), Some(&"desk"));
    }

    #[test]
    fn updating_a_space_invalidates_list_stats_and_availability() {
        let id = space_id();
        let other = space_id();
        let mut cache = QueryCache::default();
        let list = QueryKey::Spaces(SpaceListParams::default());
        let filtered = QueryKey::Spaces(SpaceListParams {
            page: 2,
            ..Default::default()
        });
        let stats = QueryKey::SpaceStats(StatsParams::default());
        let availability =
            QueryKey::SpaceAvailability(id, "2025-01-02".parse().unwrap());
        let detail = QueryKey::Space(id);
        let other_detail = QueryKey::Space(other);
        let product_types =
            QueryKey::ProductTypes(ProductTypeListParams::default());
        for key in [
            &list,
            &filtered,
            &stats,
            &availability,
            &detail,
            &other_detail,
            &product_types,
        ] {
            cache.insert(key.clone(), 0, now());
        }

        let count = cache.apply(&Mutation::UpdateSpace(id));
        assert_eq!(count, 5);
        for key in [&list, &filtered, &stats, &availability, &detail] {
            assert!(cache.needs_fetch(key, now()), "{key:?} should be stale");
        }
        assert!(!cache.needs_fetch(&other_detail, now()));
        assert!(!cache.needs_fetch(&product_types, now()));
    }

    #[test]
    fn refetch_clears_invalidation() {
        let mut cache = QueryCache::default();
        let key = QueryKey::Locations(LocationListParams::default());
        cache.insert(key.clone(), vec![1], now());
        cache.apply(&Mutation::CreateLocation);
        assert!(cache.needs_fetch(&key, now()));

        cache.insert(key.clone(), vec![1, 2], now());
        assert!(!cache.needs_fetch(&key, now()));
        assert_eq!(cache.get(&key), Some(&vec![1, 2]));
    }

    #[test]
    fn booking_mutations_leave_location_queries_alone() {
        let mut cache = QueryCache::default();
        let locations = QueryKey::Locations(LocationListParams::default());
        let bookings = QueryKey::Bookings(BookingListParams::default());
        cache.insert(locations.clone(), 0, now());
        cache.insert(bookings.clone(), 0, now());
        cache.apply(&Mutation::CreateBooking);
        assert!(!cache.needs_fetch(&locations, now()));
        assert!(cache.needs_fetch(&bookings, now()));
    }
}
