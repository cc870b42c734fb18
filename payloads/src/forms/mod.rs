//! Editable form state for the dashboard's create/edit dialogs.
//!
//! Every input is kept as the raw string the user typed. `validate` turns a
//! form into the request body it describes, or into per-field messages keyed
//! by the field's path (`name`, `rates.hourly`, `operatingHours.monday`).
//! The same [`Validate`] rules run again on the server.

mod booking;
mod location;
mod space;
mod space_type;

pub use location::{ContactInput, LocationForm};
pub use space::SpaceForm;
pub use space_type::SpaceTypeForm;

use crate::{ClientError, OperatingHours, RateTier, Rates, Weekday};
use jiff::civil::Time;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const REQUIRED: &str = "This field is required";
pub const AT_LEAST_ONE: &str = "Must be at least 1";
pub const WHOLE_NUMBER: &str = "Must be a whole number";
pub const RATE_REQUIRED: &str = "At least one rate is required";
pub const CONTACT_REQUIRED: &str = "At least one contact is required";
pub const INVALID_AMOUNT: &str = "Must be a non-negative amount";
pub const INVALID_EMAIL: &str = "Enter a valid email address";
pub const HOURS_REQUIRED: &str = "Enter opening and closing times";
pub const HOURS_ORDER: &str = "Closing time must be after opening time";

/// Validation messages keyed by field path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    /// `Ok(value)` when no errors were recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Please correct the highlighted fields")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SubmitError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Client(_) => None,
        }
    }
}

/// Rules a request body must satisfy before it is sent or stored.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Parse a required count such as a capacity.
pub fn parse_count(input: &str) -> Result<u32, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AT_LEAST_ONE);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).map_err(|_| WHOLE_NUMBER),
        Ok(_) => Err(AT_LEAST_ONE),
        Err(_) => Err(WHOLE_NUMBER),
    }
}

/// Parse an optional positive setting, falling back to `default` for blank,
/// non-numeric, or non-positive input.
pub fn coerce_positive<T>(input: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    match input.trim().parse::<T>() {
        Ok(n) if n >= T::from(1) => n,
        _ => default,
    }
}

/// Parse an optional money amount. Blank means "not offered".
pub fn parse_amount(input: &str) -> Result<Option<Decimal>, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<Decimal>() {
        Ok(amount) if !amount.is_sign_negative() => Ok(Some(amount)),
        _ => Err(INVALID_AMOUNT),
    }
}

/// Blank optional text becomes `None`.
pub fn optional_text(input: &str) -> Option<String> {
    crate::requests::filter_text(input)
}

/// Parse an `HH:MM` (or `HH:MM:SS`) wall-clock time as produced by
/// `<input type="time">`.
pub fn parse_time(input: &str) -> Option<Time> {
    let mut parts = input.trim().split(':');
    let hour = parts.next()?.parse::<i8>().ok()?;
    let minute = parts.next()?.parse::<i8>().ok()?;
    let second = match parts.next() {
        Some(s) => s.parse::<i8>().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Time::new(hour, minute, second, 0).ok()
}

pub fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Key under which a day's hours errors are reported.
pub fn hours_field(prefix: &str, day: Weekday) -> String {
    format!("{prefix}.{}", day.key())
}

/// Check that every open day has an opening time strictly before its closing
/// time.
pub fn check_hours(prefix: &str, hours: &[OperatingHours], errors: &mut FieldErrors) {
    for day in hours.iter().filter(|h| h.is_open) {
        match (day.open_time, day.close_time) {
            (Some(open), Some(close)) if open < close => {}
            (Some(_), Some(_)) => errors.add(hours_field(prefix, day.day), HOURS_ORDER),
            _ => errors.add(hours_field(prefix, day.day), HOURS_REQUIRED),
        }
    }
}

/// Check that at least one rate is offered and that none is negative.
pub fn check_rates(prefix: &str, rates: &Rates, errors: &mut FieldErrors) {
    if !rates.has_any() {
        errors.add(prefix, RATE_REQUIRED);
    }
    for tier in RateTier::ALL {
        if let Some(rate) = rates.get(tier)
            && rate.is_sign_negative()
        {
            errors.add(rate_field(prefix, tier), INVALID_AMOUNT);
        }
    }
}

/// Key under which a rate tier's errors are reported.
pub fn rate_field(prefix: &str, tier: RateTier) -> String {
    format!("{prefix}.{}", tier.key())
}

/// One text box per rate tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatesInput {
    pub hourly: String,
    pub daily: String,
    pub weekly: String,
    pub monthly: String,
}

impl RatesInput {
    pub fn from_rates(rates: &Rates) -> Self {
        let show = |rate: Option<Decimal>| {
            rate.map(|r| r.normalize().to_string()).unwrap_or_default()
        };
        Self {
            hourly: show(rates.hourly),
            daily: show(rates.daily),
            weekly: show(rates.weekly),
            monthly: show(rates.monthly),
        }
    }

    pub fn get(&self, tier: RateTier) -> &str {
        match tier {
            RateTier::Hourly => &self.hourly,
            RateTier::Daily => &self.daily,
            RateTier::Weekly => &self.weekly,
            RateTier::Monthly => &self.monthly,
        }
    }

    pub fn set(&mut self, tier: RateTier, value: String) {
        match tier {
            RateTier::Hourly => self.hourly = value,
            RateTier::Daily => self.daily = value,
            RateTier::Weekly => self.weekly = value,
            RateTier::Monthly => self.monthly = value,
        }
    }

    /// Unparseable amounts are reported under `prefix.<tier>` and left out
    /// of the returned rates.
    pub fn parse(&self, prefix: &str, errors: &mut FieldErrors) -> Rates {
        let mut rates = Rates::default();
        for tier in RateTier::ALL {
            match parse_amount(self.get(tier)) {
                Ok(amount) => match tier {
                    RateTier::Hourly => rates.hourly = amount,
                    RateTier::Daily => rates.daily = amount,
                    RateTier::Weekly => rates.weekly = amount,
                    RateTier::Monthly => rates.monthly = amount,
                },
                Err(message) => errors.add(rate_field(prefix, tier), message),
            }
        }
        rates
    }
}

/// Opening hours of one day as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHoursInput {
    pub day: Weekday,
    pub is_open: bool,
    pub open_time: String,
    pub close_time: String,
}

impl DayHoursInput {
    pub fn from_hours(hours: &OperatingHours) -> Self {
        Self {
            day: hours.day,
            is_open: hours.is_open,
            open_time: hours.open_time.map(format_time).unwrap_or_default(),
            close_time: hours.close_time.map(format_time).unwrap_or_default(),
        }
    }

    /// A full week in Monday..Sunday order, taking each day from `hours` and
    /// treating days it doesn't mention as closed.
    pub fn week(hours: &[OperatingHours]) -> Vec<Self> {
        Weekday::ALL
            .iter()
            .map(|day| match hours.iter().find(|h| h.day == *day) {
                Some(h) => Self::from_hours(h),
                None => Self::from_hours(&OperatingHours::closed(*day)),
            })
            .collect()
    }

    fn parse(&self) -> OperatingHours {
        if !self.is_open {
            return OperatingHours::closed(self.day);
        }
        OperatingHours {
            day: self.day,
            is_open: true,
            open_time: parse_time(&self.open_time),
            close_time: parse_time(&self.close_time),
        }
    }
}

/// Parse a week of hours, reporting problems under `prefix.<day>`.
pub fn parse_week(
    prefix: &str,
    week: &[DayHoursInput],
    errors: &mut FieldErrors,
) -> Vec<OperatingHours> {
    let hours: Vec<OperatingHours> = week.iter().map(DayHoursInput::parse).collect();
    check_hours(prefix, &hours, errors);
    hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn counts_must_be_positive_whole_numbers() {
        assert_eq!(parse_count("4"), Ok(4));
        assert_eq!(parse_count(" 12 "), Ok(12));
        assert_eq!(parse_count("0"), Err(AT_LEAST_ONE));
        assert_eq!(parse_count("-3"), Err(AT_LEAST_ONE));
        assert_eq!(parse_count(""), Err(AT_LEAST_ONE));
        assert_eq!(parse_count("2.5"), Err(WHOLE_NUMBER));
        assert_eq!(parse_count("many"), Err(WHOLE_NUMBER));
    }

    #[test]
    fn optional_settings_fall_back_to_defaults() {
        assert_eq!(coerce_positive::<u32>("45", 30), 45);
        assert_eq!(coerce_positive::<u32>("", 30), 30);
        assert_eq!(coerce_positive::<u32>("0", 30), 30);
        assert_eq!(coerce_positive::<u32>("abc", 30), 30);
        assert_eq!(coerce_positive::<u8>("300", 3), 3);
    }

    #[test]
    fn amounts_are_optional_but_not_negative() {
        assert_eq!(parse_amount(""), Ok(None));
        assert_eq!(parse_amount("12.50"), Ok(Some(dec!(12.50))));
        assert_eq!(parse_amount("0"), Ok(Some(dec!(0))));
        assert_eq!(parse_amount("-1"), Err(INVALID_AMOUNT));
        assert_eq!(parse_amount("ten"), Err(INVALID_AMOUNT));
    }

    #[test]
    fn times_parse_from_time_inputs() {
        assert_eq!(parse_time("09:30"), Some(Time::constant(9, 30, 0, 0)));
        assert_eq!(parse_time("18:00:15"), Some(Time::constant(18, 0, 15, 0)));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("9"), None);
        assert_eq!(format_time(Time::constant(7, 5, 0, 0)), "07:05");
    }

    #[test]
    fn open_days_need_ordered_times() {
        let mut week = DayHoursInput::week(&OperatingHours::default_week());
        week[0].close_time = "08:00".into();
        week[1].open_time = String::new();
        // closed days are ignored even with nonsense times
        week[6].open_time = "23:00".into();
        week[6].close_time = "01:00".into();

        let mut errors = FieldErrors::new();
        parse_week("operatingHours", &week, &mut errors);
        assert_eq!(errors.get("operatingHours.monday"), Some(HOURS_ORDER));
        assert_eq!(errors.get("operatingHours.tuesday"), Some(HOURS_REQUIRED));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn equal_open_and_close_is_rejected() {
        let hours = vec![OperatingHours::open(
            Weekday::Friday,
            Time::constant(9, 0, 0, 0),
            Time::constant(9, 0, 0, 0),
        )];
        let mut errors = FieldErrors::new();
        check_hours("workingHours", &hours, &mut errors);
        assert_eq!(errors.get("workingHours.friday"), Some(HOURS_ORDER));
    }

    #[test]
    fn rates_input_reports_bad_tiers() {
        let input = RatesInput {
            hourly: "abc".into(),
            daily: "40".into(),
            ..Default::default()
        };
        let mut errors = FieldErrors::new();
        let rates = input.parse("rates", &mut errors);
        assert_eq!(rates.daily, Some(dec!(40)));
        assert_eq!(rates.hourly, None);
        assert_eq!(errors.get("rates.hourly"), Some(INVALID_AMOUNT));
    }

    #[test]
    fn rates_round_trip_through_inputs() {
        let rates = Rates {
            hourly: Some(dec!(12.50)),
            monthly: Some(dec!(900)),
            ..Default::default()
        };
        let input = RatesInput::from_rates(&rates);
        assert_eq!(input.hourly, "12.5");
        assert_eq!(input.daily, "");
        let mut errors = FieldErrors::new();
        assert_eq!(input.parse("rates", &mut errors), rates);
        assert!(errors.is_empty());
    }

    #[test]
    fn first_message_for_a_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("name", REQUIRED);
        errors.add("name", "something else");
        assert_eq!(errors.get("name"), Some(REQUIRED));
        assert_eq!(errors.to_string(), "name: This field is required");
    }
}
