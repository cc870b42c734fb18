use super::{FieldErrors, INVALID_EMAIL, REQUIRED, Validate};
use crate::requests::CreateBooking;

impl Validate for CreateBooking {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.member_name.trim().is_empty() {
            errors.add("memberName", REQUIRED);
        }
        if !self.member_email.contains('@') {
            errors.add("memberEmail", INVALID_EMAIL);
        }
        if self.end_at <= self.start_at {
            errors.add("endAt", "Booking must end after it starts");
        }
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RateTier, SpaceId};
    use uuid::Uuid;

    #[test]
    fn booking_needs_a_member_and_a_forward_period() {
        let booking = CreateBooking {
            space_id: SpaceId(Uuid::new_v4()),
            member_name: " ".into(),
            member_email: "ada.example.com".into(),
            start_at: "2025-05-01T10:00:00Z".parse().unwrap(),
            end_at: "2025-05-01T09:00:00Z".parse().unwrap(),
            rate_tier: RateTier::Hourly,
            notes: None,
        };
        let errors = booking.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("memberEmail"), Some(INVALID_EMAIL));
    }
}
