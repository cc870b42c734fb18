use payloads::requests::LocationListParams;
use payloads::responses::{self, LocationStats, Paginated};
use payloads::{LocationId, LocationSummary, SpaceStatus, stats};
use uuid::Uuid;

use super::{Record, Store, StoreError, matches_text, paginate, validated};

impl Store {
    pub fn create_location(
        &mut self,
        details: payloads::Location,
    ) -> Result<responses::Location, StoreError> {
        validated(&details)?;
        let id = LocationId(Uuid::new_v4());
        let now = self.now();
        self.locations.insert(id, Record::new(details, now));
        self.get_location(&id)
    }

    pub fn get_location(
        &self,
        id: &LocationId,
    ) -> Result<responses::Location, StoreError> {
        let record =
            self.locations.get(id).ok_or(StoreError::LocationNotFound)?;
        Ok(responses::Location {
            id: *id,
            details: record.details.clone(),
            stats: self.location_stats(id),
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    pub fn update_location(
        &mut self,
        id: &LocationId,
        details: payloads::Location,
    ) -> Result<responses::Location, StoreError> {
        validated(&details)?;
        let now = self.now();
        let record =
            self.locations.get_mut(id).ok_or(StoreError::LocationNotFound)?;
        record.replace(details, now);
        self.get_location(id)
    }

    /// Also removes the location's space types. Fails while any space
    /// remains.
    pub fn delete_location(&mut self, id: &LocationId) -> Result<(), StoreError> {
        if !self.locations.contains_key(id) {
            return Err(StoreError::LocationNotFound);
        }
        if self.spaces.values().any(|s| s.details.location.id() == *id) {
            return Err(StoreError::LocationHasSpaces);
        }
        self.product_types
            .retain(|_, pt| pt.record.details.location_id != *id);
        self.locations.remove(id);
        Ok(())
    }

    /// Locations sorted by name.
    pub fn list_locations(
        &self,
        params: &LocationListParams,
    ) -> Paginated<responses::Location> {
        let mut matching: Vec<responses::Location> = self
            .locations
            .iter()
            .filter(|(_, record)| {
                let details = &record.details;
                let search_ok = params.search.as_deref().is_none_or(|needle| {
                    matches_text(
                        &[
                            Some(details.name.as_str()),
                            details.description.as_deref(),
                            Some(details.address.city.as_str()),
                            Some(details.address.street.as_str()),
                        ],
                        needle,
                    )
                });
                let city_ok = params.city.as_deref().is_none_or(|city| {
                    details.address.city.eq_ignore_ascii_case(city.trim())
                });
                let status_ok =
                    params.status.is_none_or(|status| details.status == status);
                search_ok && city_ok && status_ok
            })
            .filter_map(|(id, _)| self.get_location(id).ok())
            .collect();
        matching.sort_by(|a, b| a.details.name.cmp(&b.details.name));
        paginate(matching, params.page, params.limit)
    }

    /// Name and city of a location, for embedding in space responses.
    pub(super) fn location_summary(
        &self,
        id: &LocationId,
    ) -> Option<LocationSummary> {
        self.locations.get(id).map(|record| LocationSummary {
            id: *id,
            name: record.details.name.clone(),
            city: record.details.address.city.clone(),
        })
    }

    fn location_stats(&self, id: &LocationId) -> LocationStats {
        let spaces: Vec<&payloads::Space> = self
            .spaces
            .values()
            .map(|record| &record.details)
            .filter(|space| space.location.id() == *id)
            .collect();
        let summary = stats::summarize_spaces(spaces.iter().copied());
        let active_bookings = self
            .bookings
            .values()
            .filter(|b| {
                b.record.details.location_id == *id
                    && b.record.details.status.is_active()
            })
            .count() as u32;
        LocationStats {
            total_spaces: summary.total_spaces,
            available_spaces: spaces
                .iter()
                .filter(|s| s.status == SpaceStatus::Available)
                .count() as u32,
            total_capacity: summary.total_capacity,
            active_bookings,
            occupancy_rate: summary.occupancy_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{location_details, store};
    use payloads::LocationStatus;

    #[test]
    fn list_filters_by_city_and_status() {
        let mut store = store();
        let mut leith = location_details("Harbour Works");
        leith.address.city = "Leith".into();
        store.create_location(leith).unwrap();
        let mut closed = location_details("Old Mill");
        closed.status = LocationStatus::Inactive;
        store.create_location(closed).unwrap();
        store.create_location(location_details("Canal Hub")).unwrap();

        let by_city = store.list_locations(&LocationListParams {
            city: Some("leith".into()),
            ..Default::default()
        });
        assert_eq!(by_city.items.len(), 1);
        assert_eq!(by_city.items[0].details.name, "Harbour Works");

        let active = store.list_locations(&LocationListParams {
            status: Some(LocationStatus::Active),
            ..Default::default()
        });
        let names: Vec<&str> =
            active.items.iter().map(|l| l.details.name.as_str()).collect();
        assert_eq!(names, vec!["Canal Hub", "Harbour Works"]);
    }

    #[test]
    fn invalid_location_is_rejected() {
        let mut store = store();
        let mut details = location_details("Nameless");
        details.name = "  ".into();
        details.contacts.clear();
        match store.create_location(details) {
            Err(StoreError::Validation(errors)) => {
                assert!(errors.contains("name"));
                assert!(errors.contains("contacts"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
