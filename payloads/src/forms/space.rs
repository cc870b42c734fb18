use super::{
    AT_LEAST_ONE, DayHoursInput, FieldErrors, RatesInput, REQUIRED,
    SubmitError, Validate, check_hours, check_rates, optional_text,
    parse_count, parse_week,
};
use crate::{
    APIClient, Amenity, LocationId, LocationRef, OperatingHours,
    ProductTypeId, Space, SpaceCategory, SpaceId, SpaceStatus,
    query::Mutation, responses,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceForm {
    /// Value of the location `<select>`; empty until one is chosen.
    pub location_id: String,
    pub product_type_id: Option<ProductTypeId>,
    pub name: String,
    pub space_type: SpaceCategory,
    pub status: SpaceStatus,
    pub capacity: String,
    pub floor: String,
    pub rates: RatesInput,
    /// Without custom hours the space follows its location's hours.
    pub custom_hours: bool,
    pub hours: Vec<DayHoursInput>,
    pub amenities: Vec<Amenity>,
    /// Comma-separated.
    pub equipment: String,
    pub description: String,
}

impl Default for SpaceForm {
    fn default() -> Self {
        Self {
            location_id: String::new(),
            product_type_id: None,
            name: String::new(),
            space_type: SpaceCategory::HotDesk,
            status: SpaceStatus::default(),
            capacity: "1".into(),
            floor: String::new(),
            rates: RatesInput::default(),
            custom_hours: false,
            hours: DayHoursInput::week(&OperatingHours::default_week()),
            amenities: Vec::new(),
            equipment: String::new(),
            description: String::new(),
        }
    }
}

impl SpaceForm {
    pub fn for_location(location_id: LocationId) -> Self {
        Self {
            location_id: location_id.to_string(),
            ..Default::default()
        }
    }

    pub fn from_existing(space: &Space) -> Self {
        let custom_hours = !space.working_hours.is_empty();
        Self {
            location_id: space.location.id().to_string(),
            product_type_id: space.product_type_id,
            name: space.name.clone(),
            space_type: space.space_type,
            status: space.status,
            capacity: space.capacity.to_string(),
            floor: space.floor.clone().unwrap_or_default(),
            rates: RatesInput::from_rates(&space.rates),
            custom_hours,
            hours: if custom_hours {
                DayHoursInput::week(&space.working_hours)
            } else {
                DayHoursInput::week(&OperatingHours::default_week())
            },
            amenities: space.amenities.clone(),
            equipment: space.equipment.join(", "),
            description: space.description.clone().unwrap_or_default(),
        }
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if let Some(pos) = self.amenities.iter().position(|a| *a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity);
        }
    }

    pub fn validate(&self) -> Result<Space, FieldErrors> {
        let mut errors = FieldErrors::new();

        let location = match self.location_id.trim().parse::<Uuid>() {
            Ok(id) => LocationId(id),
            Err(_) => {
                errors.add("location", "Select a location");
                LocationId(Uuid::nil())
            }
        };
        let capacity = parse_count(&self.capacity).unwrap_or_else(|message| {
            errors.add("capacity", message);
            0
        });
        let rates = self.rates.parse("rates", &mut errors);
        let working_hours = if self.custom_hours {
            parse_week("workingHours", &self.hours, &mut errors)
        } else {
            Vec::new()
        };

        let space = Space {
            location: LocationRef::Id(location),
            product_type_id: self.product_type_id,
            name: self.name.trim().to_string(),
            space_type: self.space_type,
            status: self.status,
            capacity,
            floor: optional_text(&self.floor),
            rates,
            working_hours,
            amenities: self.amenities.clone(),
            equipment: self
                .equipment
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
            description: optional_text(&self.description),
        };

        if let Err(more) = space.validate() {
            errors.merge(more);
        }
        errors.into_result(space)
    }

    pub fn mutation(editing: Option<SpaceId>) -> Mutation {
        match editing {
            Some(id) => Mutation::UpdateSpace(id),
            None => Mutation::CreateSpace,
        }
    }

    pub async fn submit(
        &self,
        client: &APIClient,
        editing: Option<SpaceId>,
    ) -> Result<responses::Space, SubmitError> {
        let details = self.validate().map_err(SubmitError::Invalid)?;
        let saved = match editing {
            Some(id) => client.update_space(&id, &details).await?,
            None => client.create_space(&details).await?,
        };
        Ok(saved)
    }
}

impl Validate for Space {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", REQUIRED);
        }
        if self.capacity < 1 {
            errors.add("capacity", AT_LEAST_ONE);
        }
        check_rates("rates", &self.rates, &mut errors);
        check_hours("workingHours", &self.working_hours, &mut errors);
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{RATE_REQUIRED, WHOLE_NUMBER};
    use rust_decimal::dec;

    fn filled() -> SpaceForm {
        SpaceForm {
            name: "Desk 4".into(),
            capacity: "1".into(),
            ..SpaceForm::for_location(LocationId(Uuid::new_v4()))
        }
    }

    #[test]
    fn rejects_when_every_rate_is_blank() {
        let errors = filled().validate().unwrap_err();
        assert_eq!(errors.get("rates"), Some(RATE_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn accepts_exactly_one_rate() {
        let mut form = filled();
        form.rates.weekly = "150".into();
        let space = form.validate().unwrap();
        assert_eq!(space.rates.weekly, Some(dec!(150)));
        assert_eq!(space.rates.hourly, None);
        assert!(space.working_hours.is_empty());
    }

    #[test]
    fn location_must_be_chosen() {
        let mut form = filled();
        form.location_id = String::new();
        form.rates.hourly = "5".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("location"), Some("Select a location"));
    }

    #[test]
    fn capacity_must_be_a_positive_whole_number() {
        let mut form = filled();
        form.rates.hourly = "5".into();
        form.capacity = "0".into();
        assert_eq!(
            form.validate().unwrap_err().get("capacity"),
            Some(AT_LEAST_ONE)
        );
        form.capacity = "1.5".into();
        assert_eq!(
            form.validate().unwrap_err().get("capacity"),
            Some(WHOLE_NUMBER)
        );
    }

    #[test]
    fn custom_hours_are_checked() {
        let mut form = filled();
        form.rates.hourly = "5".into();
        form.custom_hours = true;
        form.hours[4].close_time = "06:00".into();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains("workingHours.friday"));
    }

    #[test]
    fn equipment_is_split_on_commas() {
        let mut form = filled();
        form.rates.daily = "30".into();
        form.equipment = "monitor, , standing desk ,lamp".into();
        let space = form.validate().unwrap();
        assert_eq!(space.equipment, vec!["monitor", "standing desk", "lamp"]);

        let back = SpaceForm::from_existing(&space);
        assert_eq!(back.equipment, "monitor, standing desk, lamp");
        assert_eq!(back.validate().unwrap(), space);
    }
}
