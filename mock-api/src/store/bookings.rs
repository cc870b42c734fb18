use payloads::requests::{BookingListParams, CreateBooking, StatsParams};
use payloads::responses::{self, Paginated};
use payloads::{BookingId, BookingStatus, SpaceStatus, stats};
use uuid::Uuid;

use super::{BookingRecord, Record, Store, StoreError, paginate, validated};

impl Store {
    /// Price the booking from the space's rates and hold the space for the
    /// period. Locations that require approval start bookings as pending.
    pub fn create_booking(
        &mut self,
        request: CreateBooking,
    ) -> Result<responses::Booking, StoreError> {
        validated(&request)?;
        let space = &self
            .spaces
            .get(&request.space_id)
            .ok_or(StoreError::SpaceNotFound)?
            .details;
        if matches!(space.status, SpaceStatus::Maintenance | SpaceStatus::Inactive) {
            return Err(StoreError::SpaceNotBookable(space.status));
        }
        let conflict = self.bookings.values().any(|b| {
            let existing = &b.record.details;
            existing.space_id == request.space_id
                && existing.status.is_active()
                && existing.overlaps(request.start_at, request.end_at)
        });
        if conflict {
            return Err(StoreError::BookingConflict);
        }

        let total_amount =
            space
                .rates
                .quote(request.rate_tier, request.start_at, request.end_at)?;
        let location_id = space.location.id();
        let requires_approval = self
            .locations
            .get(&location_id)
            .is_some_and(|l| l.details.booking_rules.requires_approval);
        let space_name = space.name.clone();

        let booking = payloads::Booking {
            space_id: request.space_id,
            location_id,
            member_name: request.member_name.trim().to_string(),
            member_email: request.member_email.trim().to_string(),
            start_at: request.start_at,
            end_at: request.end_at,
            status: if requires_approval {
                BookingStatus::Pending
            } else {
                BookingStatus::Confirmed
            },
            rate_tier: request.rate_tier,
            total_amount,
            notes: request.notes,
        };
        let id = BookingId(Uuid::new_v4());
        let now = self.now();
        self.bookings.insert(
            id,
            BookingRecord {
                record: Record::new(booking, now),
                space_name,
            },
        );
        self.get_booking(&id)
    }

    pub fn get_booking(
        &self,
        id: &BookingId,
    ) -> Result<responses::Booking, StoreError> {
        let b = self.bookings.get(id).ok_or(StoreError::BookingNotFound)?;
        Ok(booking_response(id, b))
    }

    /// Only bookings still holding their space can be cancelled.
    pub fn cancel_booking(
        &mut self,
        id: &BookingId,
    ) -> Result<responses::Booking, StoreError> {
        let now = self.now();
        let b = self.bookings.get_mut(id).ok_or(StoreError::BookingNotFound)?;
        let status = b.record.details.status;
        if !status.is_active() {
            return Err(StoreError::BookingNotCancellable(status));
        }
        let mut details = b.record.details.clone();
        details.status = BookingStatus::Cancelled;
        b.record.replace(details, now);
        self.get_booking(id)
    }

    /// Bookings, latest start first.
    pub fn list_bookings(
        &self,
        params: &BookingListParams,
    ) -> Paginated<responses::Booking> {
        let mut matching: Vec<responses::Booking> = self
            .bookings
            .iter()
            .filter(|(_, b)| {
                let details = &b.record.details;
                params.location_id.is_none_or(|id| details.location_id == id)
                    && params.space_id.is_none_or(|id| details.space_id == id)
                    && params.status.is_none_or(|s| details.status == s)
            })
            .map(|(id, b)| booking_response(id, b))
            .collect();
        matching.sort_by(|a, b| b.details.start_at.cmp(&a.details.start_at));
        paginate(matching, params.page, params.limit)
    }

    pub fn booking_stats(&self, params: &StatsParams) -> responses::BookingStats {
        stats::summarize_bookings(
            self.bookings
                .values()
                .map(|b| &b.record.details)
                .filter(|b| params.location_id.is_none_or(|id| b.location_id == id)),
        )
    }
}

fn booking_response(id: &BookingId, b: &BookingRecord) -> responses::Booking {
    responses::Booking {
        id: *id,
        details: b.record.details.clone(),
        space_name: b.space_name.clone(),
        created_at: b.record.created_at,
        updated_at: b.record.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{location_details, space_details, store};
    use payloads::{PricingError, RateTier, SpaceId};
    use rust_decimal::{Decimal, dec};

    fn request(space_id: SpaceId, start: &str, end: &str) -> CreateBooking {
        CreateBooking {
            space_id,
            member_name: "Ada Lovelace".into(),
            member_email: "ada@example.com".into(),
            start_at: start.parse().unwrap(),
            end_at: end.parse().unwrap(),
            rate_tier: RateTier::Hourly,
            notes: None,
        }
    }

    fn store_with_space() -> (Store, SpaceId) {
        let mut store = store();
        let location = store.create_location(location_details("A")).unwrap();
        let space = store.create_space(space_details(location.id, "Desk")).unwrap();
        (store, space.id)
    }

    #[test]
    fn bookings_are_priced_from_the_space_rates() {
        let (mut store, space_id) = store_with_space();
        let booking = store
            .create_booking(request(
                space_id,
                "2025-01-06T09:00:00Z",
                "2025-01-06T11:30:00Z",
            ))
            .unwrap();
        assert_eq!(booking.details.total_amount, dec!(30));
        assert_eq!(booking.details.status, BookingStatus::Confirmed);
        assert_eq!(booking.space_name, "Desk");
    }

    #[test]
    fn overlapping_bookings_conflict_until_cancelled() {
        let (mut store, space_id) = store_with_space();
        let first = store
            .create_booking(request(
                space_id,
                "2025-01-06T09:00:00Z",
                "2025-01-06T12:00:00Z",
            ))
            .unwrap();
        let overlapping =
            request(space_id, "2025-01-06T11:00:00Z", "2025-01-06T13:00:00Z");
        assert!(matches!(
            store.create_booking(overlapping.clone()),
            Err(StoreError::BookingConflict)
        ));

        store.cancel_booking(&first.id).unwrap();
        assert!(store.create_booking(overlapping).is_ok());
        assert!(matches!(
            store.cancel_booking(&first.id),
            Err(StoreError::BookingNotCancellable(BookingStatus::Cancelled))
        ));
    }

    #[test]
    fn missing_rate_tier_is_rejected() {
        let (mut store, space_id) = store_with_space();
        let mut daily =
            request(space_id, "2025-01-06T00:00:00Z", "2025-01-07T00:00:00Z");
        daily.rate_tier = RateTier::Daily;
        assert!(matches!(
            store.create_booking(daily),
            Err(StoreError::Pricing(PricingError::NoRate(RateTier::Daily)))
        ));
    }

    #[test]
    fn overflowing_price_is_rejected() {
        let mut store = store();
        let location = store.create_location(location_details("A")).unwrap();
        let mut details = space_details(location.id, "Vault");
        details.rates.hourly = Some(Decimal::MAX);
        let space = store.create_space(details).unwrap();

        assert!(matches!(
            store.create_booking(request(
                space.id,
                "2025-01-06T09:00:00Z",
                "2025-01-06T11:00:00Z",
            )),
            Err(StoreError::Pricing(PricingError::TooLarge))
        ));
        assert_eq!(store.booking_stats(&StatsParams::default()).total_bookings, 0);
    }

    #[test]
    fn stats_exclude_cancelled_revenue() {
        let (mut store, space_id) = store_with_space();
        store
            .create_booking(request(
                space_id,
                "2025-01-06T09:00:00Z",
                "2025-01-06T10:00:00Z",
            ))
            .unwrap();
        let cancelled = store
            .create_booking(request(
                space_id,
                "2025-01-07T09:00:00Z",
                "2025-01-07T12:00:00Z",
            ))
            .unwrap();
        store.cancel_booking(&cancelled.id).unwrap();

        let stats = store.booking_stats(&StatsParams::default());
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.total_revenue, dec!(10));
        assert_eq!(stats.cancellation_rate, 50.0);
    }
}
