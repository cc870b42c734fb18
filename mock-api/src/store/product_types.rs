use payloads::forms::{AT_LEAST_ONE, FieldErrors};
use payloads::requests::{GenerateSpaces, ProductTypeListParams};
use payloads::responses::{self, Paginated};
use payloads::{LocationRef, ProductTypeId, SpaceId, SpaceStatus};
use uuid::Uuid;

use super::{ProductTypeRecord, Record, Store, StoreError, paginate, validated};

impl Store {
    /// Creating a type with auto-generation enabled also creates the rule's
    /// `count` spaces.
    pub fn create_product_type(
        &mut self,
        details: payloads::ProductType,
    ) -> Result<responses::ProductType, StoreError> {
        validated(&details)?;
        if !self.locations.contains_key(&details.location_id) {
            return Err(StoreError::LocationNotFound);
        }
        let id = ProductTypeId(Uuid::new_v4());
        let now = self.now();
        let rule = details.auto_generation.clone();
        self.product_types.insert(
            id,
            ProductTypeRecord {
                record: Record::new(details, now),
                space_count: 0,
            },
        );
        if rule.enabled {
            self.generate_spaces(&id, &GenerateSpaces { count: Some(rule.count) })?;
        }
        self.get_product_type(&id)
    }

    pub fn get_product_type(
        &self,
        id: &ProductTypeId,
    ) -> Result<responses::ProductType, StoreError> {
        let pt = self
            .product_types
            .get(id)
            .ok_or(StoreError::ProductTypeNotFound)?;
        Ok(product_type_response(id, pt))
    }

    /// Existing spaces are left as they are.
    pub fn update_product_type(
        &mut self,
        id: &ProductTypeId,
        details: payloads::ProductType,
    ) -> Result<responses::ProductType, StoreError> {
        validated(&details)?;
        if !self.locations.contains_key(&details.location_id) {
            return Err(StoreError::LocationNotFound);
        }
        let now = self.now();
        let pt = self
            .product_types
            .get_mut(id)
            .ok_or(StoreError::ProductTypeNotFound)?;
        pt.record.replace(details, now);
        self.get_product_type(id)
    }

    /// Spaces generated from the type stay in place, detached from it.
    pub fn delete_product_type(
        &mut self,
        id: &ProductTypeId,
    ) -> Result<(), StoreError> {
        self.product_types
            .remove(id)
            .ok_or(StoreError::ProductTypeNotFound)?;
        for space in self.spaces.values_mut() {
            if space.details.product_type_id == Some(*id) {
                space.details.product_type_id = None;
            }
        }
        Ok(())
    }

    /// Product types sorted by name.
    pub fn list_product_types(
        &self,
        params: &ProductTypeListParams,
    ) -> Paginated<responses::ProductType> {
        let mut matching: Vec<responses::ProductType> = self
            .product_types
            .iter()
            .filter(|(_, pt)| {
                let details = &pt.record.details;
                params.location_id.is_none_or(|id| details.location_id == id)
                    && params.category.is_none_or(|c| details.category == c)
            })
            .map(|(id, pt)| product_type_response(id, pt))
            .collect();
        matching.sort_by(|a, b| a.details.name.cmp(&b.details.name));
        paginate(matching, params.page, params.limit)
    }

    /// Create spaces from the type's auto-generation rule, numbered after
    /// the ones already generated. Without a count, the rule's own count is
    /// used.
    pub fn generate_spaces(
        &mut self,
        id: &ProductTypeId,
        request: &GenerateSpaces,
    ) -> Result<Vec<responses::Space>, StoreError> {
        let pt = self
            .product_types
            .get(id)
            .ok_or(StoreError::ProductTypeNotFound)?;
        let template = pt.record.details.clone();
        let count = request.count.unwrap_or(template.auto_generation.count);
        if count < 1 {
            let mut errors = FieldErrors::new();
            errors.add("count", AT_LEAST_ONE);
            return Err(errors.into());
        }

        let names = template.auto_generation.next_names(pt.space_count, count);
        let now = self.now();
        let mut created = Vec::with_capacity(names.len());
        for name in names {
            let space = payloads::Space {
                location: LocationRef::Id(template.location_id),
                product_type_id: Some(*id),
                name,
                space_type: template.category,
                status: SpaceStatus::Available,
                capacity: template.capacity.max,
                floor: None,
                rates: template.pricing.clone(),
                working_hours: Vec::new(),
                amenities: template.amenities.clone(),
                equipment: Vec::new(),
                description: template.description.clone(),
            };
            let space_id = SpaceId(Uuid::new_v4());
            self.spaces.insert(space_id, Record::new(space, now));
            created.push(space_id);
        }

        if let Some(pt) = self.product_types.get_mut(id) {
            pt.space_count = pt.space_count.saturating_add(count);
        }
        tracing::debug!(product_type = %id, count, "generated spaces");
        created.iter().map(|space_id| self.get_space(space_id)).collect()
    }
}

fn product_type_response(
    id: &ProductTypeId,
    pt: &ProductTypeRecord,
) -> responses::ProductType {
    responses::ProductType {
        id: *id,
        details: pt.record.details.clone(),
        space_count: pt.space_count,
        created_at: pt.record.created_at,
        updated_at: pt.record.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{location_details, store};
    use payloads::{
        AutoGeneration, CapacityRange, LocationId, Rates, SpaceCategory,
    };
    use rust_decimal::dec;

    fn hot_desks(location_id: LocationId, auto: bool) -> payloads::ProductType {
        payloads::ProductType {
            location_id,
            name: "Hot desk".into(),
            category: SpaceCategory::HotDesk,
            description: None,
            capacity: CapacityRange { min: 1, max: 1 },
            pricing: Rates {
                daily: Some(dec!(25)),
                ..Default::default()
            },
            amenities: vec![],
            auto_generation: AutoGeneration {
                enabled: auto,
                prefix: "HD-".into(),
                start_number: 1,
                count: 3,
                padding: 3,
            },
            is_active: true,
        }
    }

    #[test]
    fn auto_generation_runs_on_create() {
        let mut store = store();
        let location = store.create_location(location_details("A")).unwrap();
        let pt = store.create_product_type(hot_desks(location.id, true)).unwrap();
        assert_eq!(pt.space_count, 3);

        let more = store
            .generate_spaces(&pt.id, &GenerateSpaces { count: Some(2) })
            .unwrap();
        let names: Vec<&str> =
            more.iter().map(|s| s.details.name.as_str()).collect();
        assert_eq!(names, vec!["HD-004", "HD-005"]);
        assert_eq!(store.get_product_type(&pt.id).unwrap().space_count, 5);
    }

    #[test]
    fn zero_count_generates_nothing() {
        let mut store = store();
        let location = store.create_location(location_details("A")).unwrap();
        let pt = store.create_product_type(hot_desks(location.id, false)).unwrap();
        assert_eq!(pt.space_count, 0);

        let result = store.generate_spaces(&pt.id, &GenerateSpaces { count: Some(0) });
        match result {
            Err(StoreError::Validation(errors)) => {
                assert_eq!(errors.get("count"), Some(AT_LEAST_ONE))
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn deleting_a_type_keeps_its_spaces() {
        let mut store = store();
        let location = store.create_location(location_details("A")).unwrap();
        let pt = store.create_product_type(hot_desks(location.id, true)).unwrap();
        store.delete_product_type(&pt.id).unwrap();

        let spaces = store.space_stats(&Default::default());
        assert_eq!(spaces.total_spaces, 3);
        assert!(matches!(
            store.get_product_type(&pt.id),
            Err(StoreError::ProductTypeNotFound)
        ));
    }
}
