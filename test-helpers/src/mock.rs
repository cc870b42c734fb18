//! Sample data for the dev server and manual testing
//!
//! Builds a small but realistic coworking portfolio:
//! - Two locations in different cities, one requiring booking approval
//! - Space types with auto-generated desks
//! - Hand-made meeting rooms and a space under maintenance
//! - Bookings in every status, spread around the current time

use crate::TestApp;
use anyhow::Result;
use jiff::{SignedDuration, Timestamp};
use payloads::{
    AutoGeneration, CapacityRange, RateTier, Rates, SpaceCategory,
    SpaceStatus, requests, responses,
};
use rust_decimal::dec;

pub struct DevDataset {
    pub harbour: responses::Location,
    pub canal: responses::Location,
    pub hot_desks: responses::ProductType,
    pub cabins: responses::ProductType,
    pub boardroom: responses::Space,
    pub quiet_desk: responses::Space,
    pub bookings: Vec<responses::Booking>,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        #[cfg(feature = "mock-time")]
        app.time_source.set(Timestamp::now());

        tracing::info!("🏢 Creating locations");
        let harbour = app.client.create_location(&crate::location_details_a()).await?;
        let canal = app.client.create_location(&crate::location_details_b()).await?;

        tracing::info!("🪑 Creating space types and generating desks");
        let hot_desks = app
            .client
            .create_product_type(&generated_type(
                &harbour,
                "Hot desk",
                SpaceCategory::HotDesk,
                "HD-",
                12,
            ))
            .await?;
        let cabins = app
            .client
            .create_product_type(&generated_type(
                &canal,
                "Private cabin",
                SpaceCategory::PrivateCabin,
                "Cabin ",
                4,
            ))
            .await?;

        tracing::info!("🚪 Creating individual spaces");
        let boardroom = app
            .client
            .create_space(&crate::space_details_a(harbour.id))
            .await?;
        let quiet_desk = app
            .client
            .create_space(&crate::space_details_b(canal.id))
            .await?;
        let mut workshop = crate::space_details_a(harbour.id);
        workshop.name = "Workshop".into();
        workshop.status = SpaceStatus::Maintenance;
        app.client.create_space(&workshop).await?;

        tracing::info!("📅 Creating bookings");
        let bookings =
            create_bookings(app, &boardroom, &quiet_desk, app.time_source.now())
                .await?;

        Ok(Self {
            harbour,
            canal,
            hot_desks,
            cabins,
            boardroom,
            quiet_desk,
            bookings,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        for location in [&self.harbour, &self.canal] {
            tracing::info!(
                "   🏢 {} ({}) - {}",
                location.details.name,
                location.id,
                location.details.address.city
            );
        }
        for product_type in [&self.hot_desks, &self.cabins] {
            tracing::info!(
                "      ├─ {} ({}): {} generated spaces",
                product_type.details.name,
                product_type.id,
                product_type.space_count
            );
        }
        tracing::info!(
            "      ├─ {} ({})",
            self.boardroom.details.name,
            self.boardroom.id
        );
        tracing::info!(
            "      └─ {} ({})",
            self.quiet_desk.details.name,
            self.quiet_desk.id
        );
        tracing::info!("   📅 {} bookings:", self.bookings.len());
        for booking in &self.bookings {
            tracing::info!(
                "      - {} at {}: {} ({})",
                booking.details.member_name,
                booking.space_name,
                booking.details.status.label(),
                booking.details.total_amount
            );
        }
    }
}

fn generated_type(
    location: &responses::Location,
    name: &str,
    category: SpaceCategory,
    prefix: &str,
    count: u32,
) -> payloads::ProductType {
    payloads::ProductType {
        location_id: location.id,
        name: name.into(),
        category,
        description: None,
        capacity: CapacityRange { min: 1, max: 2 },
        pricing: Rates {
            hourly: Some(dec!(8)),
            daily: Some(dec!(35)),
            monthly: Some(dec!(450)),
            ..Default::default()
        },
        amenities: location.details.amenities.clone(),
        auto_generation: AutoGeneration {
            enabled: true,
            prefix: prefix.into(),
            start_number: 1,
            count,
            padding: 3,
        },
        is_active: true,
    }
}

/// A mix of past, current, and upcoming bookings. The canal location
/// requires approval, so its bookings start out pending.
async fn create_bookings(
    app: &TestApp,
    boardroom: &responses::Space,
    quiet_desk: &responses::Space,
    now: Timestamp,
) -> Result<Vec<responses::Booking>> {
    let members = [
        ("Ada Lovelace", "ada@example.com"),
        ("Grace Hopper", "grace@example.com"),
        ("Alan Turing", "alan@example.com"),
    ];
    let mut bookings = Vec::new();
    for (i, (name, email)) in members.iter().enumerate() {
        let start_at = now + SignedDuration::from_hours(3 * i as i64 - 2);
        let booking = app
            .client
            .create_booking(&requests::CreateBooking {
                space_id: boardroom.id,
                member_name: (*name).into(),
                member_email: (*email).into(),
                start_at,
                end_at: start_at + SignedDuration::from_hours(2),
                rate_tier: RateTier::Hourly,
                notes: None,
            })
            .await?;
        bookings.push(booking);
    }

    let start_at = now + SignedDuration::from_hours(24);
    let monthly = app
        .client
        .create_booking(&requests::CreateBooking {
            space_id: quiet_desk.id,
            member_name: "Katherine Johnson".into(),
            member_email: "katherine@example.com".into(),
            start_at,
            end_at: start_at + RateTier::Monthly.unit(),
            rate_tier: RateTier::Monthly,
            notes: Some("Needs a second monitor".into()),
        })
        .await?;
    bookings.push(monthly);

    if let Some(last) = bookings.get(2) {
        let cancelled = app.client.cancel_booking(&last.id).await?;
        bookings[2] = cancelled;
    }
    Ok(bookings)
}
