use super::{
    AT_LEAST_ONE, FieldErrors, RatesInput, REQUIRED, SubmitError, Validate,
    check_rates, coerce_positive, optional_text, parse_count,
};
use crate::{
    APIClient, Amenity, AutoGeneration, CapacityRange, LocationId,
    ProductType, ProductTypeId, SpaceCategory, query::Mutation, responses,
};
use uuid::Uuid;

pub const CAPACITY_ORDER: &str = "Must be at least the minimum capacity";

/// Widest zero-padding the generator accepts.
pub const MAX_PADDING: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceTypeForm {
    pub location_id: String,
    pub name: String,
    pub category: SpaceCategory,
    pub description: String,
    pub min_capacity: String,
    pub max_capacity: String,
    pub pricing: RatesInput,
    pub amenities: Vec<Amenity>,
    pub is_active: bool,
    pub auto_generate: bool,
    pub prefix: String,
    pub start_number: String,
    pub count: String,
    pub padding: String,
}

impl Default for SpaceTypeForm {
    fn default() -> Self {
        let rule = AutoGeneration::default();
        Self {
            location_id: String::new(),
            name: String::new(),
            category: SpaceCategory::HotDesk,
            description: String::new(),
            min_capacity: "1".into(),
            max_capacity: "1".into(),
            pricing: RatesInput::default(),
            amenities: Vec::new(),
            is_active: true,
            auto_generate: rule.enabled,
            prefix: rule.prefix,
            start_number: rule.start_number.to_string(),
            count: rule.count.to_string(),
            padding: rule.padding.to_string(),
        }
    }
}

impl SpaceTypeForm {
    pub fn for_location(location_id: LocationId) -> Self {
        Self {
            location_id: location_id.to_string(),
            ..Default::default()
        }
    }

    pub fn from_existing(product_type: &ProductType) -> Self {
        let rule = &product_type.auto_generation;
        Self {
            location_id: product_type.location_id.to_string(),
            name: product_type.name.clone(),
            category: product_type.category,
            description: product_type.description.clone().unwrap_or_default(),
            min_capacity: product_type.capacity.min.to_string(),
            max_capacity: product_type.capacity.max.to_string(),
            pricing: RatesInput::from_rates(&product_type.pricing),
            amenities: product_type.amenities.clone(),
            is_active: product_type.is_active,
            auto_generate: rule.enabled,
            prefix: rule.prefix.clone(),
            start_number: rule.start_number.to_string(),
            count: rule.count.to_string(),
            padding: rule.padding.to_string(),
        }
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if let Some(pos) = self.amenities.iter().position(|a| *a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity);
        }
    }

    /// Names the first generated spaces would get, for the form preview.
    pub fn preview_names(&self, n: u32) -> Vec<String> {
        let rule = self.auto_generation();
        rule.next_names(0, n.min(rule.count))
    }

    fn auto_generation(&self) -> AutoGeneration {
        let defaults = AutoGeneration::default();
        AutoGeneration {
            enabled: self.auto_generate,
            prefix: self.prefix.trim().to_string(),
            start_number: coerce_positive(&self.start_number, defaults.start_number),
            count: coerce_positive(&self.count, defaults.count),
            padding: coerce_positive(&self.padding, defaults.padding).min(MAX_PADDING),
        }
    }

    pub fn validate(&self) -> Result<ProductType, FieldErrors> {
        let mut errors = FieldErrors::new();

        let location_id = match self.location_id.trim().parse::<Uuid>() {
            Ok(id) => LocationId(id),
            Err(_) => {
                errors.add("location", "Select a location");
                LocationId(Uuid::nil())
            }
        };
        let min = parse_count(&self.min_capacity).unwrap_or_else(|message| {
            errors.add("capacity.min", message);
            0
        });
        let max = parse_count(&self.max_capacity).unwrap_or_else(|message| {
            errors.add("capacity.max", message);
            0
        });
        let pricing = self.pricing.parse("pricing", &mut errors);

        let product_type = ProductType {
            location_id,
            name: self.name.trim().to_string(),
            category: self.category,
            description: optional_text(&self.description),
            capacity: CapacityRange { min, max },
            pricing,
            amenities: self.amenities.clone(),
            auto_generation: self.auto_generation(),
            is_active: self.is_active,
        };

        if let Err(more) = product_type.validate() {
            errors.merge(more);
        }
        errors.into_result(product_type)
    }

    pub fn mutation(editing: Option<ProductTypeId>) -> Mutation {
        match editing {
            Some(id) => Mutation::UpdateProductType(id),
            None => Mutation::CreateProductType,
        }
    }

    pub async fn submit(
        &self,
        client: &APIClient,
        editing: Option<ProductTypeId>,
    ) -> Result<responses::ProductType, SubmitError> {
        let details = self.validate().map_err(SubmitError::Invalid)?;
        let saved = match editing {
            Some(id) => client.update_product_type(&id, &details).await?,
            None => client.create_product_type(&details).await?,
        };
        Ok(saved)
    }
}

impl Validate for ProductType {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", REQUIRED);
        }
        if self.capacity.min < 1 {
            errors.add("capacity.min", AT_LEAST_ONE);
        }
        if self.capacity.max < 1 {
            errors.add("capacity.max", AT_LEAST_ONE);
        } else if self.capacity.max < self.capacity.min {
            errors.add("capacity.max", CAPACITY_ORDER);
        }
        check_rates("pricing", &self.pricing, &mut errors);
        let rule = &self.auto_generation;
        if rule.enabled && (rule.count < 1 || rule.start_number < 1) {
            errors.add("autoGeneration.count", AT_LEAST_ONE);
        }
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::RATE_REQUIRED;

    fn filled() -> SpaceTypeForm {
        let mut form = SpaceTypeForm::for_location(LocationId(Uuid::new_v4()));
        form.name = "Hot desk".into();
        form.pricing.hourly = "6".into();
        form
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut form = filled();
        form.min_capacity = "0".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("capacity.min"), Some(AT_LEAST_ONE));
    }

    #[test]
    fn max_capacity_cannot_be_below_min() {
        let mut form = filled();
        form.min_capacity = "6".into();
        form.max_capacity = "4".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("capacity.max"), Some(CAPACITY_ORDER));
        assert!(!errors.contains("capacity.min"));
    }

    #[test]
    fn pricing_needs_one_rate() {
        let mut form = filled();
        form.pricing.hourly.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("pricing"), Some(RATE_REQUIRED));
    }

    #[test]
    fn generation_settings_fall_back_to_defaults() {
        let mut form = filled();
        form.auto_generate = true;
        form.prefix = " HD- ".into();
        form.start_number = "0".into();
        form.count = "".into();
        form.padding = "99".into();
        let product_type = form.validate().unwrap();
        let rule = &product_type.auto_generation;
        assert!(rule.enabled);
        assert_eq!(rule.prefix, "HD-");
        assert_eq!(rule.start_number, 1);
        assert_eq!(rule.count, 1);
        assert_eq!(rule.padding, MAX_PADDING);
    }

    #[test]
    fn preview_shows_generated_names() {
        let mut form = filled();
        form.auto_generate = true;
        form.prefix = "MR".into();
        form.start_number = "9".into();
        form.count = "5".into();
        form.padding = "2".into();
        assert_eq!(form.preview_names(3), vec!["MR09", "MR10", "MR11"]);
    }

    #[test]
    fn editing_round_trips_an_existing_type() {
        let mut form = filled();
        form.max_capacity = "4".into();
        form.toggle_amenity(crate::Amenity::Lockers);
        let product_type = form.validate().unwrap();
        let again = SpaceTypeForm::from_existing(&product_type);
        assert_eq!(again.validate().unwrap(), product_type);
    }
}
