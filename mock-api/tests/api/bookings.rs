use payloads::requests::{BookingListParams, StatsParams};
use payloads::{BookingStatus, RateTier, SpaceStatus};
use reqwest::StatusCode;
use rust_decimal::{Decimal, dec};
use test_helpers::{booking_request_a, location_details_b, space_details_a, spawn_app};

#[tokio::test]
async fn bookings_are_priced_by_the_server() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let space = app.create_test_space(location.id).await?;

    // two hours at 25 an hour
    let booking = app.create_test_booking(space.id, 1).await?;
    assert_eq!(booking.details.total_amount, dec!(50));
    assert_eq!(booking.details.status, BookingStatus::Confirmed);
    assert_eq!(booking.details.location_id, location.id);
    assert_eq!(booking.space_name, "Boardroom");

    // 26 hours bill as two days
    let mut daily = booking_request_a(space.id, &app.time_source, 48);
    daily.rate_tier = RateTier::Daily;
    daily.end_at = daily.start_at + jiff::SignedDuration::from_hours(26);
    let booking = app.client.create_booking(&daily).await?;
    assert_eq!(booking.details.total_amount, dec!(320));

    let retrieved = app.client.get_booking(&booking.id).await?;
    assert_eq!(retrieved.details, booking.details);
    Ok(())
}

#[tokio::test]
async fn approval_locations_start_bookings_pending() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.client.create_location(&location_details_b()).await?;
    let space = app.create_test_space(location.id).await?;

    let booking = app.create_test_booking(space.id, 1).await?;
    assert_eq!(booking.details.status, BookingStatus::Pending);
    Ok(())
}

#[tokio::test]
async fn overlapping_and_unbookable_requests_fail() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let space = app.create_test_space(location.id).await?;
    app.create_test_booking(space.id, 1).await?;

    let error = app.create_test_booking(space.id, 2).await.unwrap_err();
    assert!(error.to_string().contains("already booked"));

    let mut details = space.details.clone();
    details.status = SpaceStatus::Maintenance;
    app.client.update_space(&space.id, &details).await?;
    let error = app
        .client
        .create_booking(&booking_request_a(space.id, &app.time_source, 10))
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert!(error.to_string().contains("cannot be booked"));
    Ok(())
}

#[tokio::test]
async fn cancel_booking_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let space = app.create_test_space(location.id).await?;
    let booking = app.create_test_booking(space.id, 1).await?;

    let cancelled = app.client.cancel_booking(&booking.id).await?;
    assert_eq!(cancelled.details.status, BookingStatus::Cancelled);

    let error = app.client.cancel_booking(&booking.id).await.unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));

    // the slot is free again
    app.create_test_booking(space.id, 1).await?;
    Ok(())
}

#[tokio::test]
async fn list_and_summarize_bookings() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let space = app.create_test_space(location.id).await?;
    for hours in [1, 4, 7] {
        app.create_test_booking(space.id, hours).await?;
    }
    let last = app.create_test_booking(space.id, 10).await?;
    app.client.cancel_booking(&last.id).await?;

    let page = app
        .client
        .list_bookings(&BookingListParams {
            limit: 3,
            ..Default::default()
        })
        .await?;
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.pagination.total_pages, 2);
    // latest start first
    assert_eq!(page.items[0].id, last.id);

    let cancelled = app
        .client
        .list_bookings(&BookingListParams {
            status: Some(BookingStatus::Cancelled),
            ..Default::default()
        })
        .await?;
    assert_eq!(cancelled.items.len(), 1);

    let stats = app
        .client
        .booking_stats(&StatsParams {
            location_id: Some(location.id),
        })
        .await?;
    assert_eq!(stats.total_bookings, 4);
    assert_eq!(stats.confirmed, 3);
    assert_eq!(stats.cancelled, 1);
    assert_eq!(stats.total_revenue, dec!(150));
    assert_eq!(stats.average_booking_value, dec!(50));
    assert_eq!(stats.cancellation_rate, 25.0);
    Ok(())
}

#[tokio::test]
async fn extreme_rates_and_capacities_leave_the_server_usable() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;

    let mut details = space_details_a(location.id);
    details.capacity = u32::MAX;
    details.rates.hourly = Some(Decimal::MAX);
    let space = app.client.create_space(&details).await?;
    details.name = "Annex".into();
    app.client.create_space(&details).await?;

    let stats = app.client.space_stats(&StatsParams::default()).await?;
    assert_eq!(stats.total_capacity, u32::MAX);

    let error = app
        .client
        .create_booking(&booking_request_a(space.id, &app.time_source, 1))
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert!(error.to_string().contains("too large"));

    let locations = app.client.list_locations(&Default::default()).await?;
    assert_eq!(locations.items[0].stats.total_capacity, u32::MAX);
    let spaces = app.client.list_spaces(&Default::default()).await?;
    assert_eq!(spaces.pagination.total_items, 2);
    Ok(())
}
