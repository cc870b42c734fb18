//! Reductions behind the statistics panels.
//!
//! The same functions back the server-side aggregate endpoints (over every
//! matching record) and the dashboard's per-page panels (over only the
//! records on the current page), so the two can be compared directly.

use crate::{
    BookingStatus, LocationStatus, SpaceCategory, SpaceStatus, responses,
};
use rust_decimal::Decimal;

/// `part / whole` as a percentage rounded to one decimal, 0 for an empty
/// whole.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = f64::from(part) * 100.0 / f64::from(whole);
    (pct * 10.0).round() / 10.0
}

pub fn summarize_spaces<'a>(
    spaces: impl IntoIterator<Item = &'a crate::Space>,
) -> responses::SpaceStats {
    let mut stats = responses::SpaceStats::default();
    let mut by_type: Vec<responses::CategoryCount> = SpaceCategory::ALL
        .iter()
        .map(|category| responses::CategoryCount {
            category: *category,
            count: 0,
        })
        .collect();

    for space in spaces {
        stats.total_spaces += 1;
        stats.total_capacity = stats.total_capacity.saturating_add(space.capacity);
        match space.status {
            SpaceStatus::Available => stats.available += 1,
            SpaceStatus::Occupied => stats.occupied += 1,
            SpaceStatus::Reserved => stats.reserved += 1,
            SpaceStatus::Maintenance => stats.maintenance += 1,
            SpaceStatus::Inactive => stats.inactive += 1,
        }
        if let Some(entry) =
            by_type.iter_mut().find(|c| c.category == space.space_type)
        {
            entry.count += 1;
        }
    }

    // spaces out of service don't count against occupancy
    let bookable = stats.available + stats.occupied + stats.reserved;
    stats.occupancy_rate =
        percentage(stats.occupied + stats.reserved, bookable);
    by_type.retain(|c| c.count > 0);
    stats.by_type = by_type;
    stats
}

pub fn summarize_bookings<'a>(
    bookings: impl IntoIterator<Item = &'a crate::Booking>,
) -> responses::BookingStats {
    let mut stats = responses::BookingStats::default();
    for booking in bookings {
        stats.total_bookings += 1;
        match booking.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::Confirmed => stats.confirmed += 1,
            BookingStatus::CheckedIn => stats.checked_in += 1,
            BookingStatus::Completed => stats.completed += 1,
            BookingStatus::Cancelled => stats.cancelled += 1,
        }
        if booking.status.is_billable() {
            stats.total_revenue =
                stats.total_revenue.saturating_add(booking.total_amount);
        }
    }

    let billable = stats.total_bookings - stats.cancelled;
    if billable > 0 {
        stats.average_booking_value =
            (stats.total_revenue / Decimal::from(billable)).round_dp(2);
    }
    stats.cancellation_rate =
        percentage(stats.cancelled, stats.total_bookings);
    stats
}

/// Figures shown above the location grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPageStats {
    pub total_locations: u32,
    pub active_locations: u32,
    pub total_spaces: u32,
    pub available_spaces: u32,
    pub total_capacity: u32,
    /// Mean of the per-location occupancy rates.
    pub average_occupancy: f64,
}

pub fn summarize_locations<'a>(
    locations: impl IntoIterator<Item = &'a responses::Location>,
) -> LocationPageStats {
    let mut stats = LocationPageStats::default();
    let mut occupancy_sum = 0.0;
    for location in locations {
        stats.total_locations += 1;
        if location.details.status == LocationStatus::Active {
            stats.active_locations += 1;
        }
        stats.total_spaces =
            stats.total_spaces.saturating_add(location.stats.total_spaces);
        stats.available_spaces = stats
            .available_spaces
            .saturating_add(location.stats.available_spaces);
        stats.total_capacity =
            stats.total_capacity.saturating_add(location.stats.total_capacity);
        occupancy_sum += location.stats.occupancy_rate;
    }
    if stats.total_locations > 0 {
        let avg = occupancy_sum / f64::from(stats.total_locations);
        stats.average_occupancy = (avg * 10.0).round() / 10.0;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Booking, LocationId, LocationRef, RateTier, Rates, Space, SpaceId,
    };
    use rust_decimal::dec;
    use uuid::Uuid;

    fn space(status: SpaceStatus, space_type: SpaceCategory, capacity: u32) -> Space {
        Space {
            location: LocationRef::Id(LocationId(Uuid::nil())),
            product_type_id: None,
            name: "Desk".into(),
            space_type,
            status,
            capacity,
            floor: None,
            rates: Rates {
                hourly: Some(dec!(5)),
                ..Default::default()
            },
            working_hours: vec![],
            amenities: vec![],
            equipment: vec![],
            description: None,
        }
    }

    fn booking(status: BookingStatus, amount: Decimal) -> Booking {
        Booking {
            space_id: SpaceId(Uuid::nil()),
            location_id: LocationId(Uuid::nil()),
            member_name: "Ada".into(),
            member_email: "ada@example.com".into(),
            start_at: "2025-01-01T09:00:00Z".parse().unwrap(),
            end_at: "2025-01-01T10:00:00Z".parse().unwrap(),
            status,
            rate_tier: RateTier::Hourly,
            total_amount: amount,
            notes: None,
        }
    }

    #[test]
    fn percentage_of_nothing_is_zero() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.3);
    }

    #[test]
    fn space_summary_counts_statuses_and_capacity() {
        let spaces = vec![
            space(SpaceStatus::Available, SpaceCategory::HotDesk, 1),
            space(SpaceStatus::Occupied, SpaceCategory::HotDesk, 1),
            space(SpaceStatus::Reserved, SpaceCategory::MeetingRoom, 8),
            space(SpaceStatus::Maintenance, SpaceCategory::MeetingRoom, 6),
        ];
        let stats = summarize_spaces(&spaces);
        assert_eq!(stats.total_spaces, 4);
        assert_eq!(stats.total_capacity, 16);
        assert_eq!(stats.maintenance, 1);
        // 2 of the 3 bookable spaces are taken
        assert_eq!(stats.occupancy_rate, 66.7);
        assert_eq!(
            stats.by_type,
            vec![
                responses::CategoryCount {
                    category: SpaceCategory::HotDesk,
                    count: 2
                },
                responses::CategoryCount {
                    category: SpaceCategory::MeetingRoom,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn cancelled_bookings_are_excluded_from_revenue() {
        let bookings = vec![
            booking(BookingStatus::Confirmed, dec!(30)),
            booking(BookingStatus::Completed, dec!(45)),
            booking(BookingStatus::Cancelled, dec!(100)),
        ];
        let stats = summarize_bookings(&bookings);
        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.total_revenue, dec!(75));
        assert_eq!(stats.average_booking_value, dec!(37.50));
        assert_eq!(stats.cancellation_rate, 33.3);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let spaces = vec![
            space(SpaceStatus::Available, SpaceCategory::HotDesk, u32::MAX),
            space(SpaceStatus::Available, SpaceCategory::HotDesk, u32::MAX),
        ];
        assert_eq!(summarize_spaces(&spaces).total_capacity, u32::MAX);

        let bookings = vec![
            booking(BookingStatus::Confirmed, Decimal::MAX),
            booking(BookingStatus::Confirmed, Decimal::MAX),
        ];
        let stats = summarize_bookings(&bookings);
        assert_eq!(stats.total_revenue, Decimal::MAX);
        assert_eq!(stats.total_bookings, 2);
    }

    #[test]
    fn empty_pages_summarize_to_zero() {
        let stats = summarize_bookings(&Vec::<Booking>::new());
        assert_eq!(stats.average_booking_value, Decimal::ZERO);
        assert_eq!(
            summarize_locations(&Vec::<responses::Location>::new()),
            LocationPageStats::default()
        );
    }
}
