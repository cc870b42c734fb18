use mock_api::time::TimeSource;

pub mod mock;
use jiff::SignedDuration;
use mock_api::{AppState, Config, telemetry};
use payloads::{
    Address, Amenity, AutoGeneration, BookingRules, CapacityRange, Contact,
    ContactType, LocationId, LocationRef, LocationStatus, OperatingHours,
    RateTier, Rates, SpaceCategory, SpaceId, SpaceStatus, requests, responses,
};
use reqwest::StatusCode;
use rust_decimal::dec;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

/// Monday morning, so default opening hours apply.
pub const START_TIME: &str = "2025-01-06T09:00:00Z";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    pub time_source: TimeSource,
    state: AppState,
}

impl TestApp {
    /// Requests the server has received so far. Lets tests check that
    /// client-side validation stopped a submit before it hit the network.
    pub fn request_count(&self) -> u64 {
        self.state.request_count()
    }
}

/// Functions to populate test data
///
/// Using anyhow::Result lets us get a backtrace from when the error was fist
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    pub async fn create_test_location(
        &self,
    ) -> anyhow::Result<responses::Location> {
        let details = location_details_a();
        let location = self.client.create_location(&details).await?;
        assert_location_equal(&details, &location.details)?;
        Ok(location)
    }

    pub async fn create_test_space(
        &self,
        location_id: LocationId,
    ) -> anyhow::Result<responses::Space> {
        let details = space_details_a(location_id);
        let space = self.client.create_space(&details).await?;
        assert_space_equal(&details, &space.details)?;
        Ok(space)
    }

    /// A product type without auto-generation, so no spaces are created.
    pub async fn create_test_product_type(
        &self,
        location_id: LocationId,
    ) -> anyhow::Result<responses::ProductType> {
        let details = product_type_details_a(location_id);
        Ok(self.client.create_product_type(&details).await?)
    }

    /// Book `space_id` for two hours starting `hours_from_now` hours after
    /// the mocked current time.
    pub async fn create_test_booking(
        &self,
        space_id: SpaceId,
        hours_from_now: i64,
    ) -> anyhow::Result<responses::Booking> {
        let body = booking_request_a(space_id, &self.time_source, hours_from_now);
        Ok(self.client.create_booking(&body).await?)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    #[cfg(feature = "mock-time")]
    let time_source = TimeSource::new(START_TIME.parse().unwrap());

    #[cfg(not(feature = "mock-time"))]
    let time_source = TimeSource::new();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        allowed_origins: vec!["*".to_string()],
    };
    let state = AppState::new(time_source.clone());

    let server = mock_api::build(&mut config, state.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        time_source,
        state,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn location_details_a() -> payloads::Location {
    payloads::Location {
        name: "Harbour Works".into(),
        description: Some("Converted warehouse on the waterfront".into()),
        address: Address {
            street: "12 Commercial Quay".into(),
            city: "Leith".into(),
            state: None,
            postal_code: Some("EH6 6LX".into()),
            country: "United Kingdom".into(),
        },
        contacts: vec![
            Contact {
                contact_type: ContactType::Email,
                value: "hello@harbourworks.example".into(),
                is_primary: true,
            },
            Contact {
                contact_type: ContactType::Phone,
                value: "+44 131 555 0100".into(),
                is_primary: false,
            },
        ],
        operating_hours: OperatingHours::default_week(),
        amenities: vec![Amenity::Wifi, Amenity::Kitchen, Amenity::CoffeeBar],
        booking_rules: BookingRules::default(),
        manager_id: None,
        staff_ids: vec![],
        status: LocationStatus::Active,
    }
}

pub fn location_details_b() -> payloads::Location {
    payloads::Location {
        name: "Canal Street Studios".into(),
        description: None,
        address: Address {
            street: "40 Canal Street".into(),
            city: "Glasgow".into(),
            state: None,
            postal_code: None,
            country: "United Kingdom".into(),
        },
        contacts: vec![Contact {
            contact_type: ContactType::Phone,
            value: "+44 141 555 0199".into(),
            is_primary: true,
        }],
        operating_hours: OperatingHours::default_week(),
        amenities: vec![Amenity::Wifi, Amenity::BikeStorage],
        booking_rules: BookingRules {
            requires_approval: true,
            ..Default::default()
        },
        manager_id: None,
        staff_ids: vec![],
        status: LocationStatus::Active,
    }
}

pub fn assert_location_equal(
    location: &payloads::Location,
    retrieved: &payloads::Location,
) -> anyhow::Result<()> {
    assert_eq!(location.name, retrieved.name);
    assert_eq!(location.address, retrieved.address);
    assert_eq!(location.contacts, retrieved.contacts);
    assert_eq!(location.operating_hours, retrieved.operating_hours);
    assert_eq!(location.status, retrieved.status);
    Ok(())
}

pub fn space_details_a(location_id: LocationId) -> payloads::Space {
    payloads::Space {
        location: LocationRef::Id(location_id),
        product_type_id: None,
        name: "Boardroom".into(),
        space_type: SpaceCategory::MeetingRoom,
        status: SpaceStatus::Available,
        capacity: 8,
        floor: Some("2".into()),
        rates: Rates {
            hourly: Some(dec!(25)),
            daily: Some(dec!(160)),
            ..Default::default()
        },
        working_hours: vec![],
        amenities: vec![Amenity::Wifi],
        equipment: vec!["Display".into(), "Whiteboard".into()],
        description: None,
    }
}

pub fn space_details_b(location_id: LocationId) -> payloads::Space {
    payloads::Space {
        location: LocationRef::Id(location_id),
        product_type_id: None,
        name: "Quiet desk".into(),
        space_type: SpaceCategory::DedicatedDesk,
        status: SpaceStatus::Available,
        capacity: 1,
        floor: None,
        rates: Rates {
            monthly: Some(dec!(300)),
            ..Default::default()
        },
        working_hours: vec![],
        amenities: vec![],
        equipment: vec![],
        description: None,
    }
}

/// Compares everything but the location, which comes back embedded.
pub fn assert_space_equal(
    space: &payloads::Space,
    retrieved: &payloads::Space,
) -> anyhow::Result<()> {
    assert_eq!(space.location.id(), retrieved.location.id());
    assert_eq!(space.name, retrieved.name);
    assert_eq!(space.space_type, retrieved.space_type);
    assert_eq!(space.status, retrieved.status);
    assert_eq!(space.capacity, retrieved.capacity);
    assert_eq!(space.rates, retrieved.rates);
    Ok(())
}

pub fn product_type_details_a(location_id: LocationId) -> payloads::ProductType {
    payloads::ProductType {
        location_id,
        name: "Hot desk".into(),
        category: SpaceCategory::HotDesk,
        description: Some("First come, first served".into()),
        capacity: CapacityRange { min: 1, max: 1 },
        pricing: Rates {
            hourly: Some(dec!(6)),
            daily: Some(dec!(30)),
            ..Default::default()
        },
        amenities: vec![Amenity::Wifi],
        auto_generation: AutoGeneration {
            enabled: false,
            prefix: "HD-".into(),
            start_number: 1,
            count: 4,
            padding: 3,
        },
        is_active: true,
    }
}

pub fn booking_request_a(
    space_id: SpaceId,
    time_source: &TimeSource,
    hours_from_now: i64,
) -> requests::CreateBooking {
    let start_at = time_source.now() + SignedDuration::from_hours(hours_from_now);
    requests::CreateBooking {
        space_id,
        member_name: "Ada Lovelace".into(),
        member_email: "ada@example.com".into(),
        start_at,
        end_at: start_at + SignedDuration::from_hours(2),
        rate_tier: RateTier::Hourly,
        notes: None,
    }
}
