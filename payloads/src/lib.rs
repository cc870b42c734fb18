pub mod api_client;
pub mod forms;
pub mod query;
pub mod requests;
pub mod responses;
pub mod stats;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use jiff::{SignedDuration, Timestamp, civil::Time};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct LocationId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct SpaceId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct ProductTypeId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct BookingId(pub Uuid);

/// Reference to a staff member managed outside of this dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct StaffId(pub Uuid);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Lowercase name, matching the wire format and form field paths.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(day: jiff::civil::Weekday) -> Self {
        use jiff::civil::Weekday as W;
        match day {
            W::Monday => Self::Monday,
            W::Tuesday => Self::Tuesday,
            W::Wednesday => Self::Wednesday,
            W::Thursday => Self::Thursday,
            W::Friday => Self::Friday,
            W::Saturday => Self::Saturday,
            W::Sunday => Self::Sunday,
        }
    }
}

/// Opening hours for a single day of the week.
///
/// Times are only meaningful when `is_open` is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    pub day: Weekday,
    pub is_open: bool,
    pub open_time: Option<Time>,
    pub close_time: Option<Time>,
}

impl OperatingHours {
    pub fn open(day: Weekday, open_time: Time, close_time: Time) -> Self {
        Self {
            day,
            is_open: true,
            open_time: Some(open_time),
            close_time: Some(close_time),
        }
    }

    pub fn closed(day: Weekday) -> Self {
        Self {
            day,
            is_open: false,
            open_time: None,
            close_time: None,
        }
    }

    /// Weekdays 09:00 to 18:00, closed on weekends.
    pub fn default_week() -> Vec<Self> {
        Weekday::ALL
            .iter()
            .map(|day| {
                if day.is_weekend() {
                    Self::closed(*day)
                } else {
                    Self::open(
                        *day,
                        Time::constant(9, 0, 0, 0),
                        Time::constant(18, 0, 0, 0),
                    )
                }
            })
            .collect()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Wifi,
    Parking,
    Kitchen,
    MeetingRooms,
    Printing,
    Lockers,
    Showers,
    CoffeeBar,
    PhoneBooths,
    EventSpace,
    BikeStorage,
    Accessibility,
}

impl Amenity {
    pub const ALL: [Amenity; 12] = [
        Amenity::Wifi,
        Amenity::Parking,
        Amenity::Kitchen,
        Amenity::MeetingRooms,
        Amenity::Printing,
        Amenity::Lockers,
        Amenity::Showers,
        Amenity::CoffeeBar,
        Amenity::PhoneBooths,
        Amenity::EventSpace,
        Amenity::BikeStorage,
        Amenity::Accessibility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wifi => "Wi-Fi",
            Self::Parking => "Parking",
            Self::Kitchen => "Kitchen",
            Self::MeetingRooms => "Meeting rooms",
            Self::Printing => "Printing",
            Self::Lockers => "Lockers",
            Self::Showers => "Showers",
            Self::CoffeeBar => "Coffee bar",
            Self::PhoneBooths => "Phone booths",
            Self::EventSpace => "Event space",
            Self::BikeStorage => "Bike storage",
            Self::Accessibility => "Step-free access",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Phone,
    Email,
    Website,
    Emergency,
}

impl ContactType {
    pub const ALL: [ContactType; 4] = [
        ContactType::Phone,
        ContactType::Email,
        ContactType::Website,
        ContactType::Emergency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Website => "Website",
            Self::Emergency => "Emergency",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Website => "website",
            Self::Emergency => "emergency",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub contact_type: ContactType,
    pub value: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

impl Address {
    /// Single-line rendering used by cards and detail headers.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.street.as_str(), self.city.as_str()];
        if let Some(state) = self.state.as_deref() {
            parts.push(state);
        }
        if let Some(postal_code) = self.postal_code.as_deref() {
            parts.push(postal_code);
        }
        parts.push(self.country.as_str());
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Booking defaults applied to every space at a location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRules {
    pub min_booking_minutes: u32,
    pub max_booking_hours: u32,
    pub advance_booking_days: u32,
    pub cancellation_hours: u32,
    pub requires_approval: bool,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            min_booking_minutes: 30,
            max_booking_hours: 12,
            advance_booking_days: 30,
            cancellation_hours: 24,
            requires_approval: false,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl LocationStatus {
    pub const ALL: [LocationStatus; 3] = [
        LocationStatus::Active,
        LocationStatus::Inactive,
        LocationStatus::Maintenance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Details of a coworking location, as sent when creating or updating one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub description: Option<String>,
    pub address: Address,
    pub contacts: Vec<Contact>,
    pub operating_hours: Vec<OperatingHours>,
    pub amenities: Vec<Amenity>,
    pub booking_rules: BookingRules,
    pub manager_id: Option<StaffId>,
    #[serde(default)]
    pub staff_ids: Vec<StaffId>,
    pub status: LocationStatus,
}

impl Location {
    pub fn hours_for(&self, day: Weekday) -> Option<&OperatingHours> {
        self.operating_hours.iter().find(|h| h.day == day)
    }
}

/// Minimal location details embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub id: LocationId,
    pub name: String,
    pub city: String,
}

/// A space's parent location: either a bare id (when writing) or an embedded
/// summary (as returned by list endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationRef {
    Id(LocationId),
    Embedded(LocationSummary),
}

impl LocationRef {
    pub fn id(&self) -> LocationId {
        match self {
            Self::Id(id) => *id,
            Self::Embedded(summary) => summary.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Embedded(summary) => Some(&summary.name),
        }
    }
}

impl From<LocationId> for LocationRef {
    fn from(id: LocationId) -> Self {
        Self::Id(id)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SpaceCategory {
    HotDesk,
    DedicatedDesk,
    PrivateCabin,
    MeetingRoom,
    ConferenceRoom,
    EventSpace,
    VirtualOffice,
}

impl SpaceCategory {
    pub const ALL: [SpaceCategory; 7] = [
        SpaceCategory::HotDesk,
        SpaceCategory::DedicatedDesk,
        SpaceCategory::PrivateCabin,
        SpaceCategory::MeetingRoom,
        SpaceCategory::ConferenceRoom,
        SpaceCategory::EventSpace,
        SpaceCategory::VirtualOffice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::HotDesk => "Hot desk",
            Self::DedicatedDesk => "Dedicated desk",
            Self::PrivateCabin => "Private cabin",
            Self::MeetingRoom => "Meeting room",
            Self::ConferenceRoom => "Conference room",
            Self::EventSpace => "Event space",
            Self::VirtualOffice => "Virtual office",
        }
    }

    /// Wire name, also used as the value of `<select>` options.
    pub fn key(&self) -> &'static str {
        match self {
            Self::HotDesk => "hot_desk",
            Self::DedicatedDesk => "dedicated_desk",
            Self::PrivateCabin => "private_cabin",
            Self::MeetingRoom => "meeting_room",
            Self::ConferenceRoom => "conference_room",
            Self::EventSpace => "event_space",
            Self::VirtualOffice => "virtual_office",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SpaceStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Maintenance,
    Inactive,
}

impl SpaceStatus {
    pub const ALL: [SpaceStatus; 5] = [
        SpaceStatus::Available,
        SpaceStatus::Occupied,
        SpaceStatus::Reserved,
        SpaceStatus::Maintenance,
        SpaceStatus::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Reserved => "Reserved",
            Self::Maintenance => "Maintenance",
            Self::Inactive => "Inactive",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
            Self::Maintenance => "maintenance",
            Self::Inactive => "inactive",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl RateTier {
    pub const ALL: [RateTier; 4] = [
        RateTier::Hourly,
        RateTier::Daily,
        RateTier::Weekly,
        RateTier::Monthly,
    ];

    /// Length of one billing unit. A month is billed as 30 days.
    pub fn unit(&self) -> SignedDuration {
        match self {
            Self::Hourly => SignedDuration::from_hours(1),
            Self::Daily => SignedDuration::from_hours(24),
            Self::Weekly => SignedDuration::from_hours(24 * 7),
            Self::Monthly => SignedDuration::from_hours(24 * 30),
        }
    }

    /// Wire name, also the rate's field name in forms.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hourly => "hour",
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("No {} rate is configured for this space", .0.label())]
    NoRate(RateTier),
    #[error("Booking must end after it starts")]
    InvalidPeriod,
    #[error("Booking total is too large")]
    TooLarge,
}

/// Prices per billing tier. At least one tier must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rates {
    pub hourly: Option<Decimal>,
    pub daily: Option<Decimal>,
    pub weekly: Option<Decimal>,
    pub monthly: Option<Decimal>,
}

impl Rates {
    pub fn get(&self, tier: RateTier) -> Option<Decimal> {
        match tier {
            RateTier::Hourly => self.hourly,
            RateTier::Daily => self.daily,
            RateTier::Weekly => self.weekly,
            RateTier::Monthly => self.monthly,
        }
    }

    pub fn has_any(&self) -> bool {
        RateTier::ALL.iter().any(|tier| self.get(*tier).is_some())
    }

    /// The shortest tier with a rate, for "from X / hour" style labels.
    pub fn starting_rate(&self) -> Option<(RateTier, Decimal)> {
        RateTier::ALL
            .into_iter()
            .find_map(|tier| self.get(tier).map(|rate| (tier, rate)))
    }

    /// Price of the period `[start, end)` billed in whole units of `tier`.
    pub fn quote(
        &self,
        tier: RateTier,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Decimal, PricingError> {
        let rate = self.get(tier).ok_or(PricingError::NoRate(tier))?;
        let duration = end.duration_since(start);
        if duration <= SignedDuration::ZERO {
            return Err(PricingError::InvalidPeriod);
        }
        let unit_secs = tier.unit().as_secs();
        let secs = duration.as_secs();
        // a partial unit (including sub-second remainders) bills as a whole one
        let mut units = secs / unit_secs;
        if secs % unit_secs != 0 || duration.subsec_nanos() != 0 {
            units += 1;
        }
        rate.checked_mul(Decimal::from(units))
            .ok_or(PricingError::TooLarge)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub location: LocationRef,
    pub product_type_id: Option<ProductTypeId>,
    pub name: String,
    pub space_type: SpaceCategory,
    pub status: SpaceStatus,
    pub capacity: u32,
    pub floor: Option<String>,
    pub rates: Rates,
    #[serde(default)]
    pub working_hours: Vec<OperatingHours>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRange {
    pub min: u32,
    pub max: u32,
}

/// Rule for bulk-creating spaces from a product type.
///
/// Space names are `prefix` followed by the space number, zero-padded to
/// `padding` digits (e.g. `HD-` + 7 with padding 3 is `HD-007`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoGeneration {
    pub enabled: bool,
    pub prefix: String,
    pub start_number: u32,
    pub count: u32,
    pub padding: u8,
}

impl Default for AutoGeneration {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: String::new(),
            start_number: 1,
            count: 1,
            padding: 3,
        }
    }
}

impl AutoGeneration {
    pub fn space_name(&self, number: u32) -> String {
        format!(
            "{}{:0width$}",
            self.prefix,
            number,
            width = self.padding as usize
        )
    }

    /// Names for `count` new spaces, continuing after `already_generated`
    /// spaces created from the same rule.
    pub fn next_names(&self, already_generated: u32, count: u32) -> Vec<String> {
        let first = self.start_number.saturating_add(already_generated);
        (0..count)
            .map(|i| self.space_name(first.saturating_add(i)))
            .collect()
    }
}

/// A space template ("space type") from which concrete spaces are generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub location_id: LocationId,
    pub name: String,
    pub category: SpaceCategory,
    pub description: Option<String>,
    pub capacity: CapacityRange,
    pub pricing: Rates,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    pub auto_generation: AutoGeneration,
    pub is_active: bool,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::CheckedIn => "Checked in",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Whether the booking still holds its space.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::CheckedIn)
    }

    /// Whether the booking counts towards revenue.
    pub fn is_billable(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub space_id: SpaceId,
    pub location_id: LocationId,
    pub member_name: String,
    pub member_email: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub status: BookingStatus,
    pub rate_tier: RateTier,
    pub total_amount: Decimal,
    pub notes: Option<String>,
}

impl Booking {
    pub fn overlaps(&self, start: Timestamp, end: Timestamp) -> bool {
        self.start_at < end && start < self.end_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn hourly_quote_rounds_partial_hours_up() {
        let rates = Rates {
            hourly: Some(dec!(12.50)),
            ..Default::default()
        };
        let quote = rates
            .quote(
                RateTier::Hourly,
                ts("2025-03-03T09:00:00Z"),
                ts("2025-03-03T11:15:00Z"),
            )
            .unwrap();
        assert_eq!(quote, dec!(37.50));
    }

    #[test]
    fn exact_days_are_not_rounded() {
        let rates = Rates {
            daily: Some(dec!(40)),
            ..Default::default()
        };
        let quote = rates
            .quote(
                RateTier::Daily,
                ts("2025-03-03T00:00:00Z"),
                ts("2025-03-05T00:00:00Z"),
            )
            .unwrap();
        assert_eq!(quote, dec!(80));
    }

    #[test]
    fn quote_without_rate_or_with_empty_period_fails() {
        let rates = Rates {
            monthly: Some(dec!(900)),
            ..Default::default()
        };
        let start = ts("2025-03-03T09:00:00Z");
        assert_eq!(
            rates.quote(RateTier::Hourly, start, ts("2025-03-03T10:00:00Z")),
            Err(PricingError::NoRate(RateTier::Hourly))
        );
        assert_eq!(
            rates.quote(RateTier::Monthly, start, start),
            Err(PricingError::InvalidPeriod)
        );
    }

    #[test]
    fn quote_that_overflows_is_an_error() {
        let rates = Rates {
            hourly: Some(Decimal::MAX),
            ..Default::default()
        };
        assert_eq!(
            rates.quote(
                RateTier::Hourly,
                ts("2025-03-03T09:00:00Z"),
                ts("2025-03-03T11:00:00Z"),
            ),
            Err(PricingError::TooLarge)
        );
    }

    #[test]
    fn starting_rate_prefers_shortest_tier() {
        let rates = Rates {
            weekly: Some(dec!(150)),
            monthly: Some(dec!(500)),
            ..Default::default()
        };
        assert_eq!(
            rates.starting_rate(),
            Some((RateTier::Weekly, dec!(150)))
        );
        assert_eq!(Rates::default().starting_rate(), None);
    }

    #[test]
    fn generated_names_continue_numbering() {
        let rule = AutoGeneration {
            enabled: true,
            prefix: "HD-".into(),
            start_number: 1,
            count: 3,
            padding: 3,
        };
        assert_eq!(rule.next_names(0, 2), vec!["HD-001", "HD-002"]);
        assert_eq!(rule.next_names(2, 2), vec!["HD-003", "HD-004"]);
    }

    #[test]
    fn zero_padding_keeps_wide_numbers() {
        let rule = AutoGeneration {
            prefix: "Room ".into(),
            start_number: 998,
            padding: 2,
            ..Default::default()
        };
        assert_eq!(rule.next_names(0, 3), vec!["Room 998", "Room 999", "Room 1000"]);
    }

    #[test]
    fn location_ref_accepts_id_or_embedded_summary() {
        let id = LocationId(Uuid::new_v4());
        let bare: LocationRef =
            serde_json::from_value(serde_json::json!(id.0.to_string())).unwrap();
        assert_eq!(bare, LocationRef::Id(id));

        let embedded: LocationRef = serde_json::from_value(serde_json::json!({
            "id": id.0.to_string(),
            "name": "Harbour Works",
            "city": "Leith",
        }))
        .unwrap();
        assert_eq!(embedded.id(), id);
        assert_eq!(embedded.name(), Some("Harbour Works"));
    }

    #[test]
    fn default_week_closes_weekends() {
        let week = OperatingHours::default_week();
        assert_eq!(week.len(), 7);
        assert!(week.iter().filter(|h| h.is_open).all(|h| !h.day.is_weekend()));
        assert!(!week[6].is_open);
    }
}
