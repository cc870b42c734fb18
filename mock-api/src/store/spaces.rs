use jiff::civil::Date;
use jiff::tz::TimeZone;
use payloads::requests::{SpaceListParams, StatsParams};
use payloads::responses::{self, BookedSlot, Paginated, SpaceAvailability};
use payloads::{LocationRef, OperatingHours, SpaceId, Weekday, stats};
use uuid::Uuid;

use super::{Record, Store, StoreError, matches_text, paginate, validated};

impl Store {
    pub fn create_space(
        &mut self,
        details: payloads::Space,
    ) -> Result<responses::Space, StoreError> {
        let details = self.checked_space(details)?;
        let id = SpaceId(Uuid::new_v4());
        let now = self.now();
        self.spaces.insert(id, Record::new(details, now));
        self.get_space(&id)
    }

    pub fn get_space(&self, id: &SpaceId) -> Result<responses::Space, StoreError> {
        let record = self.spaces.get(id).ok_or(StoreError::SpaceNotFound)?;
        Ok(self.space_response(id, record))
    }

    pub fn update_space(
        &mut self,
        id: &SpaceId,
        details: payloads::Space,
    ) -> Result<responses::Space, StoreError> {
        if !self.spaces.contains_key(id) {
            return Err(StoreError::SpaceNotFound);
        }
        let details = self.checked_space(details)?;
        let now = self.now();
        let record = self.spaces.get_mut(id).ok_or(StoreError::SpaceNotFound)?;
        record.replace(details, now);
        self.get_space(id)
    }

    /// Bookings of the space are kept for the record.
    pub fn delete_space(&mut self, id: &SpaceId) -> Result<(), StoreError> {
        self.spaces
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::SpaceNotFound)
    }

    /// Spaces sorted by name.
    pub fn list_spaces(
        &self,
        params: &SpaceListParams,
    ) -> Paginated<responses::Space> {
        let mut matching: Vec<responses::Space> = self
            .spaces
            .iter()
            .filter(|(_, record)| {
                let space = &record.details;
                params
                    .location_id
                    .is_none_or(|id| space.location.id() == id)
                    && params.space_type.is_none_or(|t| space.space_type == t)
                    && params.status.is_none_or(|s| space.status == s)
                    && params.search.as_deref().is_none_or(|needle| {
                        matches_text(
                            &[
                                Some(space.name.as_str()),
                                space.description.as_deref(),
                                space.floor.as_deref(),
                            ],
                            needle,
                        )
                    })
            })
            .map(|(id, record)| self.space_response(id, record))
            .collect();
        matching.sort_by(|a, b| a.details.name.cmp(&b.details.name));
        paginate(matching, params.page, params.limit)
    }

    /// Aggregates over every space in scope, ignoring paging.
    pub fn space_stats(&self, params: &StatsParams) -> responses::SpaceStats {
        stats::summarize_spaces(
            self.spaces
                .values()
                .map(|record| &record.details)
                .filter(|space| {
                    params
                        .location_id
                        .is_none_or(|id| space.location.id() == id)
                }),
        )
    }

    /// Opening hours and bookings of a space on one (UTC) day. A space
    /// without its own working hours follows its location's hours.
    pub fn space_availability(
        &self,
        id: &SpaceId,
        date: Date,
    ) -> Result<SpaceAvailability, StoreError> {
        let space = &self.spaces.get(id).ok_or(StoreError::SpaceNotFound)?.details;
        let day = Weekday::from(date.weekday());
        let hours = self.hours_on(space, day);

        let day_start = date.to_zoned(TimeZone::UTC).map_err(anyhow::Error::from)?;
        let day_end = day_start.tomorrow().map_err(anyhow::Error::from)?;
        let (day_start, day_end) = (day_start.timestamp(), day_end.timestamp());

        let mut booked_slots: Vec<BookedSlot> = self
            .bookings
            .iter()
            .map(|(booking_id, b)| (booking_id, &b.record.details))
            .filter(|(_, b)| {
                b.space_id == *id
                    && b.status.is_active()
                    && b.overlaps(day_start, day_end)
            })
            .map(|(booking_id, b)| BookedSlot {
                booking_id: *booking_id,
                start_at: b.start_at,
                end_at: b.end_at,
                status: b.status,
            })
            .collect();
        booked_slots.sort_by_key(|slot| slot.start_at);

        Ok(SpaceAvailability {
            space_id: *id,
            date,
            is_open: hours.as_ref().is_some_and(|h| h.is_open),
            open_time: hours.as_ref().and_then(|h| h.open_time),
            close_time: hours.as_ref().and_then(|h| h.close_time),
            booked_slots,
        })
    }

    fn hours_on(
        &self,
        space: &payloads::Space,
        day: Weekday,
    ) -> Option<OperatingHours> {
        if !space.working_hours.is_empty() {
            return space.working_hours.iter().find(|h| h.day == day).cloned();
        }
        self.locations
            .get(&space.location.id())
            .and_then(|location| location.details.hours_for(day).cloned())
    }

    /// Validate a space body and normalize its location to a bare id.
    fn checked_space(
        &self,
        mut details: payloads::Space,
    ) -> Result<payloads::Space, StoreError> {
        validated(&details)?;
        let location_id = details.location.id();
        if !self.locations.contains_key(&location_id) {
            return Err(StoreError::LocationNotFound);
        }
        if let Some(product_type_id) = &details.product_type_id
            && !self.product_types.contains_key(product_type_id)
        {
            return Err(StoreError::ProductTypeNotFound);
        }
        details.location = LocationRef::Id(location_id);
        Ok(details)
    }

    /// Space as returned to clients, with its location embedded.
    pub(super) fn space_response(
        &self,
        id: &SpaceId,
        record: &Record<payloads::Space>,
    ) -> responses::Space {
        let mut details = record.details.clone();
        if let Some(summary) = self.location_summary(&details.location.id()) {
            details.location = LocationRef::Embedded(summary);
        }
        responses::Space {
            id: *id,
            details,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{location_details, space_details, store};
    use jiff::civil::{Time, date};
    use payloads::requests::MAX_PAGE_SIZE;
    use payloads::{LocationId, SpaceStatus};

    #[test]
    fn spaces_embed_their_location() {
        let mut store = store();
        let location = store.create_location(location_details("Canal Hub")).unwrap();
        let space = store
            .create_space(space_details(location.id, "Desk 1"))
            .unwrap();
        assert_eq!(space.details.location.name(), Some("Canal Hub"));
        assert_eq!(space.details.location.id(), location.id);
    }

    #[test]
    fn unknown_location_is_rejected() {
        let mut store = store();
        let result =
            store.create_space(space_details(LocationId(Uuid::new_v4()), "Desk 1"));
        assert!(matches!(result, Err(StoreError::LocationNotFound)));
    }

    #[test]
    fn stats_cover_every_space_in_scope() {
        let mut store = store();
        let a = store.create_location(location_details("A")).unwrap();
        let b = store.create_location(location_details("B")).unwrap();
        for i in 0..3 {
            let mut space = space_details(a.id, &format!("A{i}"));
            if i == 0 {
                space.status = SpaceStatus::Occupied;
            }
            store.create_space(space).unwrap();
        }
        store.create_space(space_details(b.id, "B1")).unwrap();

        let all = store.space_stats(&StatsParams::default());
        assert_eq!(all.total_spaces, 4);
        let at_a = store.space_stats(&StatsParams {
            location_id: Some(a.id),
        });
        assert_eq!(at_a.total_spaces, 3);
        assert_eq!(at_a.occupied, 1);
        assert_eq!(at_a.occupancy_rate, 33.3);
    }

    #[test]
    fn huge_capacities_do_not_break_stats() {
        let mut store = store();
        let location = store.create_location(location_details("A")).unwrap();
        for name in ["Hall 1", "Hall 2"] {
            let mut space = space_details(location.id, name);
            space.capacity = u32::MAX;
            store.create_space(space).unwrap();
        }

        let stats = store.space_stats(&StatsParams::default());
        assert_eq!(stats.total_spaces, 2);
        assert_eq!(stats.total_capacity, u32::MAX);
        let listed = store.list_locations(&Default::default());
        assert_eq!(listed.items[0].stats.total_capacity, u32::MAX);
    }

    #[test]
    fn page_size_is_clamped() {
        let mut store = store();
        let location = store.create_location(location_details("A")).unwrap();
        for i in 0..3 {
            store
                .create_space(space_details(location.id, &format!("Desk {i}")))
                .unwrap();
        }

        let huge = store.list_spaces(&SpaceListParams {
            limit: u32::MAX,
            ..Default::default()
        });
        assert_eq!(huge.items.len(), 3);
        assert_eq!(huge.pagination.items_per_page, MAX_PAGE_SIZE);

        let zero = store.list_spaces(&SpaceListParams {
            limit: 0,
            ..Default::default()
        });
        assert_eq!(zero.items.len(), 1);
        assert_eq!(zero.pagination.total_pages, 3);
    }

    #[test]
    fn availability_falls_back_to_location_hours() {
        let mut store = store();
        let location = store.create_location(location_details("A")).unwrap();
        let space = store.create_space(space_details(location.id, "Desk")).unwrap();

        // 2025-01-06 is a Monday, 2025-01-11 a Saturday
        let monday = store.space_availability(&space.id, date(2025, 1, 6)).unwrap();
        assert!(monday.is_open);
        assert_eq!(monday.open_time, Some(Time::constant(9, 0, 0, 0)));
        assert!(monday.is_fully_free());

        let saturday =
            store.space_availability(&space.id, date(2025, 1, 11)).unwrap();
        assert!(!saturday.is_open);
    }
}
