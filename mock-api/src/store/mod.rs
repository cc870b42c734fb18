//! In-memory records behind the API.
//!
//! Every operation is synchronous; handlers lock the store, call one method,
//! and release it before responding. Request bodies are re-validated with the
//! same [`Validate`] rules the dashboard's forms apply.

mod bookings;
mod locations;
mod product_types;
mod spaces;

use jiff::Timestamp;
use payloads::forms::{FieldErrors, Validate};
use payloads::requests::MAX_PAGE_SIZE;
use payloads::responses::Paginated;
use payloads::{
    BookingId, LocationId, PricingError, ProductTypeId, SpaceId, SpaceStatus,
};
use std::collections::BTreeMap;

use crate::time::TimeSource;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Location not found")]
    LocationNotFound,
    #[error("Space not found")]
    SpaceNotFound,
    #[error("Space type not found")]
    ProductTypeNotFound,
    #[error("Booking not found")]
    BookingNotFound,
    #[error("Cannot delete a location that still has spaces")]
    LocationHasSpaces,
    #[error("Space is {} and cannot be booked", .0.label().to_lowercase())]
    SpaceNotBookable(SpaceStatus),
    #[error("Space is already booked for part of that period")]
    BookingConflict,
    #[error("Booking is {} and can no longer be cancelled", .0.label().to_lowercase())]
    BookingNotCancellable(payloads::BookingStatus),
    #[error("Validation failed")]
    Validation(FieldErrors),
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error("Unexpected error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl From<FieldErrors> for StoreError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// A stored value with its bookkeeping timestamps.
#[derive(Debug, Clone)]
struct Record<T> {
    details: T,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl<T> Record<T> {
    fn new(details: T, now: Timestamp) -> Self {
        Self {
            details,
            created_at: now,
            updated_at: now,
        }
    }

    fn replace(&mut self, details: T, now: Timestamp) {
        self.details = details;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
struct ProductTypeRecord {
    record: Record<payloads::ProductType>,
    /// Spaces generated from the type so far, including deleted ones, so
    /// numbering never reuses a name.
    space_count: u32,
}

#[derive(Debug, Clone)]
struct BookingRecord {
    record: Record<payloads::Booking>,
    /// Captured at booking time so the booking still reads well after its
    /// space is renamed or deleted.
    space_name: String,
}

pub struct Store {
    time_source: TimeSource,
    locations: BTreeMap<LocationId, Record<payloads::Location>>,
    spaces: BTreeMap<SpaceId, Record<payloads::Space>>,
    product_types: BTreeMap<ProductTypeId, ProductTypeRecord>,
    bookings: BTreeMap<BookingId, BookingRecord>,
}

impl Store {
    pub fn new(time_source: TimeSource) -> Self {
        Self {
            time_source,
            locations: BTreeMap::new(),
            spaces: BTreeMap::new(),
            product_types: BTreeMap::new(),
            bookings: BTreeMap::new(),
        }
    }

    fn now(&self) -> Timestamp {
        self.time_source.now()
    }
}

fn validated<T: Validate>(details: &T) -> Result<(), StoreError> {
    details.validate().map_err(StoreError::Validation)
}

/// One page of `all`, with the page size held to `1..=MAX_PAGE_SIZE`.
fn paginate<T>(all: Vec<T>, page: u32, limit: u32) -> Paginated<T> {
    Paginated::from_all(all, page, limit.clamp(1, MAX_PAGE_SIZE))
}

/// Case-insensitive substring match used by the free-text list filters.
fn matches_text(haystacks: &[Option<&str>], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystacks
        .iter()
        .flatten()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{
        Address, BookingRules, Contact, ContactType, LocationRef,
        LocationStatus, OperatingHours, Rates, SpaceCategory,
    };
    use rust_decimal::dec;

    pub(crate) fn store() -> Store {
        #[cfg(feature = "mock-time")]
        let time_source = TimeSource::new("2025-01-06T09:00:00Z".parse().unwrap());
        #[cfg(not(feature = "mock-time"))]
        let time_source = TimeSource::new();
        Store::new(time_source)
    }

    pub(crate) fn location_details(name: &str) -> payloads::Location {
        payloads::Location {
            name: name.into(),
            description: None,
            address: Address {
                street: "1 Shore Road".into(),
                city: "Edinburgh".into(),
                state: None,
                postal_code: None,
                country: "United Kingdom".into(),
            },
            contacts: vec![Contact {
                contact_type: ContactType::Email,
                value: "desk@example.com".into(),
                is_primary: true,
            }],
            operating_hours: OperatingHours::default_week(),
            amenities: vec![],
            booking_rules: BookingRules::default(),
            manager_id: None,
            staff_ids: vec![],
            status: LocationStatus::Active,
        }
    }

    pub(crate) fn space_details(
        location_id: LocationId,
        name: &str,
    ) -> payloads::Space {
        payloads::Space {
            location: LocationRef::Id(location_id),
            product_type_id: None,
            name: name.into(),
            space_type: SpaceCategory::HotDesk,
            status: SpaceStatus::Available,
            capacity: 1,
            floor: None,
            rates: Rates {
                hourly: Some(dec!(10)),
                ..Default::default()
            },
            working_hours: vec![],
            amenities: vec![],
            equipment: vec![],
            description: None,
        }
    }

    #[test]
    fn text_filter_ignores_case_and_missing_fields() {
        assert!(matches_text(&[None, Some("Harbour Works")], "harbour"));
        assert!(!matches_text(&[None, Some("Harbour Works")], "leith"));
        assert!(!matches_text(&[None], "anything"));
    }

    #[test]
    fn store_errors_read_as_messages() {
        assert_eq!(
            StoreError::SpaceNotBookable(SpaceStatus::Maintenance).to_string(),
            "Space is maintenance and cannot be booked"
        );
        assert_eq!(
            StoreError::BookingNotCancellable(payloads::BookingStatus::CheckedIn)
                .to_string(),
            "Booking is checked in and can no longer be cancelled"
        );
    }
}
