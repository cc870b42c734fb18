use payloads::requests::LocationListParams;
use payloads::{LocationId, LocationStatus};
use reqwest::StatusCode;
use test_helpers::{
    assert_location_equal, assert_status_code, location_details_a,
    location_details_b, spawn_app,
};
use uuid::Uuid;

#[tokio::test]
async fn create_read_update_delete_location() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;

    let retrieved = app.client.get_location(&location.id).await?;
    assert_location_equal(&location.details, &retrieved.details)?;
    assert_eq!(retrieved.stats.total_spaces, 0);

    let mut details = location.details.clone();
    details.name = "Harbour Works Annex".into();
    details.status = LocationStatus::Maintenance;
    let updated = app.client.update_location(&location.id, &details).await?;
    assert_location_equal(&details, &updated.details)?;
    assert!(updated.updated_at >= location.updated_at);

    app.client.delete_location(&location.id).await?;
    assert!(
        app.client
            .get_location(&location.id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Location not found")
    );

    Ok(())
}

#[tokio::test]
async fn unknown_location_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let missing = LocationId(Uuid::new_v4());
    let result = app.client.get_location(&missing).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    // what the detail page checks before showing the not-found view
    let error = app.client.get_location(&missing).await.unwrap_err();
    assert!(error.is_not_found());
    let invalid = app
        .client
        .create_location(&payloads::Location {
            name: String::new(),
            ..location_details_a()
        })
        .await
        .unwrap_err();
    assert!(!invalid.is_not_found());
    Ok(())
}

#[tokio::test]
async fn location_with_spaces_cannot_be_deleted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let space = app.create_test_space(location.id).await?;

    let result = app.client.delete_location(&location.id).await;
    let error = result.unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert!(error.to_string().contains("still has spaces"));

    app.client.delete_space(&space.id).await?;
    app.client.delete_location(&location.id).await?;
    Ok(())
}

#[tokio::test]
async fn invalid_location_returns_field_errors() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut details = location_details_a();
    details.contacts.clear();

    let error = app.client.create_location(&details).await.unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(
        error.to_string(),
        "Validation failed (contacts: At least one contact is required)"
    );
    Ok(())
}

#[tokio::test]
async fn list_locations_pages_and_filters() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for i in 0..5 {
        let mut details = location_details_a();
        details.name = format!("Harbour Works {i}");
        app.client.create_location(&details).await?;
    }
    app.client.create_location(&location_details_b()).await?;

    let first = app
        .client
        .list_locations(&LocationListParams {
            limit: 4,
            ..Default::default()
        })
        .await?;
    assert_eq!(first.items.len(), 4);
    assert_eq!(first.pagination.total_items, 6);
    assert!(first.pagination.has_next_page);
    assert!(!first.pagination.has_prev_page);

    let second = app
        .client
        .list_locations(&LocationListParams {
            page: 2,
            limit: 4,
            ..Default::default()
        })
        .await?;
    assert_eq!(second.items.len(), 2);
    assert!(!second.pagination.has_next_page);
    assert!(second.pagination.has_prev_page);

    let glasgow = app
        .client
        .list_locations(&LocationListParams {
            city: Some("Glasgow".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(glasgow.items.len(), 1);
    assert_eq!(glasgow.items[0].details.name, "Canal Street Studios");

    let searched = app
        .client
        .list_locations(&LocationListParams {
            search: Some("works 3".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(searched.items.len(), 1);
    Ok(())
}

#[tokio::test]
async fn location_stats_follow_its_spaces() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let space = app.create_test_space(location.id).await?;
    app.create_test_booking(space.id, 1).await?;

    let retrieved = app.client.get_location(&location.id).await?;
    assert_eq!(retrieved.stats.total_spaces, 1);
    assert_eq!(retrieved.stats.available_spaces, 1);
    assert_eq!(retrieved.stats.total_capacity, 8);
    assert_eq!(retrieved.stats.active_bookings, 1);
    assert_eq!(retrieved.stats.occupancy_rate, 0.0);
    Ok(())
}
