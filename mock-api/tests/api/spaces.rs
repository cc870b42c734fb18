use jiff::civil::date;
use payloads::requests::{SpaceListParams, StatsParams};
use payloads::{SpaceCategory, SpaceId, SpaceStatus};
use reqwest::StatusCode;
use test_helpers::{
    assert_space_equal, assert_status_code, space_details_a, space_details_b,
    spawn_app,
};
use uuid::Uuid;

#[tokio::test]
async fn create_read_update_delete_space() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let space = app.create_test_space(location.id).await?;
    assert_eq!(space.details.location.name(), Some("Harbour Works"));

    let mut details = space.details.clone();
    details.name = "Boardroom (large)".into();
    details.capacity = 12;
    let updated = app.client.update_space(&space.id, &details).await?;
    assert_space_equal(&details, &updated.details)?;

    let spaces = app
        .client
        .list_spaces(&SpaceListParams::for_location(location.id))
        .await?;
    assert_eq!(spaces.items.len(), 1);
    assert_eq!(spaces.items[0].details.name, "Boardroom (large)");

    app.client.delete_space(&space.id).await?;
    assert!(
        app.client
            .get_space(&space.id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Space not found")
    );
    Ok(())
}

#[tokio::test]
async fn space_without_rates_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let mut details = space_details_a(location.id);
    details.rates = Default::default();

    let error = app.client.create_space(&details).await.unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert!(error.to_string().contains("rates: At least one rate is required"));
    Ok(())
}

#[tokio::test]
async fn delete_unknown_space_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let result = app.client.delete_space(&SpaceId(Uuid::new_v4())).await;
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_spaces_filters_by_type_and_status() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    app.create_test_space(location.id).await?;
    app.client.create_space(&space_details_b(location.id)).await?;
    let mut broken = space_details_b(location.id);
    broken.name = "Broken desk".into();
    broken.status = SpaceStatus::Maintenance;
    app.client.create_space(&broken).await?;

    let desks = app
        .client
        .list_spaces(&SpaceListParams {
            space_type: Some(SpaceCategory::DedicatedDesk),
            ..Default::default()
        })
        .await?;
    let names: Vec<&str> =
        desks.items.iter().map(|s| s.details.name.as_str()).collect();
    assert_eq!(names, vec!["Broken desk", "Quiet desk"]);

    let in_maintenance = app
        .client
        .list_spaces(&SpaceListParams {
            status: Some(SpaceStatus::Maintenance),
            ..Default::default()
        })
        .await?;
    assert_eq!(in_maintenance.items.len(), 1);
    Ok(())
}

#[tokio::test]
async fn space_stats_cover_all_pages() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    for i in 0..5 {
        let mut details = space_details_b(location.id);
        details.name = format!("Desk {i}");
        if i < 2 {
            details.status = SpaceStatus::Occupied;
        }
        app.client.create_space(&details).await?;
    }

    let page = app
        .client
        .list_spaces(&SpaceListParams {
            limit: 2,
            ..Default::default()
        })
        .await?;
    assert_eq!(page.items.len(), 2);

    let stats = app
        .client
        .space_stats(&StatsParams {
            location_id: Some(location.id),
        })
        .await?;
    assert_eq!(stats.total_spaces, 5);
    assert_eq!(stats.occupied, 2);
    assert_eq!(stats.occupancy_rate, 40.0);
    Ok(())
}

#[tokio::test]
async fn availability_lists_the_days_bookings() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let space = app.create_test_space(location.id).await?;
    // mocked time starts Monday 2025-01-06 09:00 UTC
    let booking = app.create_test_booking(space.id, 1).await?;

    let monday = app
        .client
        .space_availability(&space.id, date(2025, 1, 6))
        .await?;
    assert!(monday.is_open);
    assert_eq!(monday.booked_slots.len(), 1);
    assert_eq!(monday.booked_slots[0].booking_id, booking.id);

    let tuesday = app
        .client
        .space_availability(&space.id, date(2025, 1, 7))
        .await?;
    assert!(tuesday.is_fully_free());
    Ok(())
}
