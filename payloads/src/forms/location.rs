use super::{
    CONTACT_REQUIRED, DayHoursInput, FieldErrors, INVALID_EMAIL, REQUIRED,
    SubmitError, Validate, check_hours, coerce_positive, optional_text,
    parse_week,
};
use crate::{
    APIClient, Address, Amenity, BookingRules, Contact, ContactType, Location,
    LocationId, LocationStatus, OperatingHours, StaffId, query::Mutation,
    responses,
};

/// A contact row in the location form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    pub contact_type: ContactType,
    pub value: String,
    pub is_primary: bool,
}

impl ContactInput {
    pub fn blank(contact_type: ContactType) -> Self {
        Self {
            contact_type,
            value: String::new(),
            is_primary: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationForm {
    pub name: String,
    pub description: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub contacts: Vec<ContactInput>,
    pub hours: Vec<DayHoursInput>,
    pub amenities: Vec<Amenity>,
    pub min_booking_minutes: String,
    pub max_booking_hours: String,
    pub advance_booking_days: String,
    pub cancellation_hours: String,
    pub requires_approval: bool,
    pub status: LocationStatus,
    // not editable here, carried through on update
    pub manager_id: Option<StaffId>,
    pub staff_ids: Vec<StaffId>,
}

impl Default for LocationForm {
    fn default() -> Self {
        let rules = BookingRules::default();
        Self {
            name: String::new(),
            description: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: String::new(),
            contacts: vec![
                ContactInput {
                    is_primary: true,
                    ..ContactInput::blank(ContactType::Phone)
                },
                ContactInput::blank(ContactType::Email),
            ],
            hours: DayHoursInput::week(&OperatingHours::default_week()),
            amenities: Vec::new(),
            min_booking_minutes: rules.min_booking_minutes.to_string(),
            max_booking_hours: rules.max_booking_hours.to_string(),
            advance_booking_days: rules.advance_booking_days.to_string(),
            cancellation_hours: rules.cancellation_hours.to_string(),
            requires_approval: rules.requires_approval,
            status: LocationStatus::default(),
            manager_id: None,
            staff_ids: Vec::new(),
        }
    }
}

impl LocationForm {
    pub fn from_existing(location: &Location) -> Self {
        let rules = &location.booking_rules;
        Self {
            name: location.name.clone(),
            description: location.description.clone().unwrap_or_default(),
            street: location.address.street.clone(),
            city: location.address.city.clone(),
            state: location.address.state.clone().unwrap_or_default(),
            postal_code: location.address.postal_code.clone().unwrap_or_default(),
            country: location.address.country.clone(),
            contacts: location
                .contacts
                .iter()
                .map(|c| ContactInput {
                    contact_type: c.contact_type,
                    value: c.value.clone(),
                    is_primary: c.is_primary,
                })
                .collect(),
            hours: DayHoursInput::week(&location.operating_hours),
            amenities: location.amenities.clone(),
            min_booking_minutes: rules.min_booking_minutes.to_string(),
            max_booking_hours: rules.max_booking_hours.to_string(),
            advance_booking_days: rules.advance_booking_days.to_string(),
            cancellation_hours: rules.cancellation_hours.to_string(),
            requires_approval: rules.requires_approval,
            status: location.status,
            manager_id: location.manager_id,
            staff_ids: location.staff_ids.clone(),
        }
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if let Some(pos) = self.amenities.iter().position(|a| *a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity);
        }
    }

    /// Make the contact at `index` the only primary one.
    pub fn set_primary(&mut self, index: usize) {
        for (i, contact) in self.contacts.iter_mut().enumerate() {
            contact.is_primary = i == index;
        }
    }

    pub fn validate(&self) -> Result<Location, FieldErrors> {
        let mut errors = FieldErrors::new();

        // blank contact rows are just unused slots; `rows` maps each kept
        // contact back to its row in the form
        let (rows, mut contacts): (Vec<usize>, Vec<Contact>) = self
            .contacts
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.value.trim().is_empty())
            .map(|(row, c)| {
                let contact = Contact {
                    contact_type: c.contact_type,
                    value: c.value.trim().to_string(),
                    is_primary: c.is_primary,
                };
                (row, contact)
            })
            .unzip();
        if !contacts.iter().any(|c| c.is_primary)
            && let Some(first) = contacts.first_mut()
        {
            first.is_primary = true;
        }

        let operating_hours = parse_week("operatingHours", &self.hours, &mut errors);

        let defaults = BookingRules::default();
        let booking_rules = BookingRules {
            min_booking_minutes: coerce_positive(
                &self.min_booking_minutes,
                defaults.min_booking_minutes,
            ),
            max_booking_hours: coerce_positive(
                &self.max_booking_hours,
                defaults.max_booking_hours,
            ),
            advance_booking_days: coerce_positive(
                &self.advance_booking_days,
                defaults.advance_booking_days,
            ),
            cancellation_hours: coerce_positive(
                &self.cancellation_hours,
                defaults.cancellation_hours,
            ),
            requires_approval: self.requires_approval,
        };

        let location = Location {
            name: self.name.trim().to_string(),
            description: optional_text(&self.description),
            address: Address {
                street: self.street.trim().to_string(),
                city: self.city.trim().to_string(),
                state: optional_text(&self.state),
                postal_code: optional_text(&self.postal_code),
                country: self.country.trim().to_string(),
            },
            contacts,
            operating_hours,
            amenities: self.amenities.clone(),
            booking_rules,
            manager_id: self.manager_id,
            staff_ids: self.staff_ids.clone(),
            status: self.status,
        };

        if let Err(more) = location.validate() {
            for (field, message) in more.iter() {
                let contact = field
                    .strip_prefix("contacts.")
                    .and_then(|i| i.parse::<usize>().ok());
                match contact {
                    Some(i) => {
                        let row = rows.get(i).copied().unwrap_or(i);
                        errors.add(format!("contacts.{row}"), message);
                    }
                    None => errors.add(field, message),
                }
            }
        }
        errors.into_result(location)
    }

    pub fn mutation(editing: Option<LocationId>) -> Mutation {
        match editing {
            Some(id) => Mutation::UpdateLocation(id),
            None => Mutation::CreateLocation,
        }
    }

    /// Validate, then create the location or update `editing`.
    pub async fn submit(
        &self,
        client: &APIClient,
        editing: Option<LocationId>,
    ) -> Result<responses::Location, SubmitError> {
        let details = self.validate().map_err(SubmitError::Invalid)?;
        let saved = match editing {
            Some(id) => client.update_location(&id, &details).await?,
            None => client.create_location(&details).await?,
        };
        Ok(saved)
    }
}

impl Validate for Location {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", REQUIRED);
        }
        if self.address.street.trim().is_empty() {
            errors.add("address.street", REQUIRED);
        }
        if self.address.city.trim().is_empty() {
            errors.add("address.city", REQUIRED);
        }
        if self.address.country.trim().is_empty() {
            errors.add("address.country", REQUIRED);
        }

        let mut any_contact = false;
        for (i, contact) in self.contacts.iter().enumerate() {
            let value = contact.value.trim();
            if value.is_empty() {
                continue;
            }
            any_contact = true;
            if contact.contact_type == ContactType::Email && !value.contains('@') {
                errors.add(format!("contacts.{i}"), INVALID_EMAIL);
            }
        }
        if !any_contact {
            errors.add("contacts", CONTACT_REQUIRED);
        }

        check_hours("operatingHours", &self.operating_hours, &mut errors);
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::HOURS_ORDER;

    fn filled() -> LocationForm {
        LocationForm {
            name: "Harbour Works".into(),
            street: "12 Dock Street".into(),
            city: "Leith".into(),
            country: "UK".into(),
            ..Default::default()
        }
    }

    #[test]
    fn rejects_when_every_contact_is_blank() {
        let errors = filled().validate().unwrap_err();
        assert_eq!(errors.get("contacts"), Some(CONTACT_REQUIRED));
    }

    #[test]
    fn accepts_exactly_one_contact() {
        let mut form = filled();
        form.contacts[1].value = "hello@harbour.works".into();
        let location = form.validate().unwrap();
        assert_eq!(location.contacts.len(), 1);
        // the only contact becomes primary
        assert!(location.contacts[0].is_primary);
        assert_eq!(location.contacts[0].contact_type, ContactType::Email);
    }

    #[test]
    fn email_contacts_need_an_at_sign() {
        let mut form = filled();
        form.contacts[1].value = "harbour.works".into();
        let errors = form.validate().unwrap_err();
        // reported against the form row, not the position among filled rows
        assert_eq!(errors.get("contacts.1"), Some(INVALID_EMAIL));
    }

    #[test]
    fn required_text_fields_are_reported() {
        let mut form = LocationForm::default();
        form.contacts[0].value = "0131 000 0000".into();
        let errors = form.validate().unwrap_err();
        for field in ["name", "address.street", "address.city", "address.country"] {
            assert_eq!(errors.get(field), Some(REQUIRED), "{field}");
        }
    }

    #[test]
    fn open_day_with_reversed_times_blocks_submit() {
        let mut form = filled();
        form.contacts[0].value = "0131 000 0000".into();
        form.hours[2].open_time = "17:00".into();
        form.hours[2].close_time = "09:00".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("operatingHours.wednesday"), Some(HOURS_ORDER));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn booking_rules_fall_back_to_defaults() {
        let mut form = filled();
        form.contacts[0].value = "0131 000 0000".into();
        form.min_booking_minutes = "0".into();
        form.max_booking_hours = "".into();
        form.cancellation_hours = "48".into();
        let location = form.validate().unwrap();
        assert_eq!(location.booking_rules.min_booking_minutes, 30);
        assert_eq!(location.booking_rules.max_booking_hours, 12);
        assert_eq!(location.booking_rules.cancellation_hours, 48);
    }

    #[test]
    fn editing_round_trips_an_existing_location() {
        let mut form = filled();
        form.contacts[0].value = "0131 000 0000".into();
        form.toggle_amenity(Amenity::Wifi);
        form.toggle_amenity(Amenity::Kitchen);
        form.toggle_amenity(Amenity::Wifi);
        let location = form.validate().unwrap();
        assert_eq!(location.amenities, vec![Amenity::Kitchen]);

        let again = LocationForm::from_existing(&location).validate().unwrap();
        assert_eq!(again, location);
    }
}
