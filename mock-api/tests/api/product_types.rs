use payloads::requests::{GenerateSpaces, ProductTypeListParams, SpaceListParams};
use payloads::SpaceCategory;
use reqwest::StatusCode;
use test_helpers::{product_type_details_a, spawn_app};

#[tokio::test]
async fn create_read_update_delete_product_type() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let product_type = app.create_test_product_type(location.id).await?;
    assert_eq!(product_type.space_count, 0);

    let retrieved = app.client.get_product_type(&product_type.id).await?;
    assert_eq!(retrieved.details, product_type.details);

    let mut details = product_type.details.clone();
    details.name = "Flexible desk".into();
    details.is_active = false;
    let updated = app
        .client
        .update_product_type(&product_type.id, &details)
        .await?;
    assert_eq!(updated.details.name, "Flexible desk");
    assert!(!updated.details.is_active);

    app.client.delete_product_type(&product_type.id).await?;
    assert!(
        app.client
            .get_product_type(&product_type.id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Space type not found")
    );
    Ok(())
}

#[tokio::test]
async fn auto_generation_creates_spaces_on_create() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let mut details = product_type_details_a(location.id);
    details.auto_generation.enabled = true;
    let product_type = app.client.create_product_type(&details).await?;
    assert_eq!(product_type.space_count, 4);

    let spaces = app
        .client
        .list_spaces(&SpaceListParams::for_location(location.id))
        .await?;
    let names: Vec<&str> =
        spaces.items.iter().map(|s| s.details.name.as_str()).collect();
    assert_eq!(names, vec!["HD-001", "HD-002", "HD-003", "HD-004"]);
    assert!(
        spaces
            .items
            .iter()
            .all(|s| s.details.product_type_id == Some(product_type.id))
    );
    Ok(())
}

#[tokio::test]
async fn generated_names_continue_after_existing_spaces() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let product_type = app.create_test_product_type(location.id).await?;

    let first = app
        .client
        .generate_spaces(&product_type.id, &GenerateSpaces { count: Some(2) })
        .await?;
    let second = app
        .client
        .generate_spaces(&product_type.id, &GenerateSpaces::default())
        .await?;

    assert_eq!(first[1].details.name, "HD-002");
    let names: Vec<&str> =
        second.iter().map(|s| s.details.name.as_str()).collect();
    assert_eq!(names, vec!["HD-003", "HD-004", "HD-005", "HD-006"]);
    assert_eq!(
        app.client.get_product_type(&product_type.id).await?.space_count,
        6
    );
    Ok(())
}

#[tokio::test]
async fn deleting_a_type_leaves_its_spaces() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let product_type = app.create_test_product_type(location.id).await?;
    let generated = app
        .client
        .generate_spaces(&product_type.id, &GenerateSpaces { count: Some(1) })
        .await?;

    app.client.delete_product_type(&product_type.id).await?;
    let space = app.client.get_space(&generated[0].id).await?;
    assert_eq!(space.details.name, "HD-001");
    assert_eq!(space.details.product_type_id, None);
    Ok(())
}

#[tokio::test]
async fn zero_count_generation_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let product_type = app.create_test_product_type(location.id).await?;

    let error = app
        .client
        .generate_spaces(&product_type.id, &GenerateSpaces { count: Some(0) })
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert!(error.to_string().contains("count: Must be at least 1"));
    Ok(())
}

#[tokio::test]
async fn list_product_types_by_category() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    app.create_test_product_type(location.id).await?;
    let mut rooms = product_type_details_a(location.id);
    rooms.name = "Meeting room".into();
    rooms.category = SpaceCategory::MeetingRoom;
    rooms.capacity.max = 6;
    app.client.create_product_type(&rooms).await?;

    let all = app
        .client
        .list_product_types(&ProductTypeListParams::for_location(location.id))
        .await?;
    assert_eq!(all.items.len(), 2);

    let meeting_rooms = app
        .client
        .list_product_types(&ProductTypeListParams {
            category: Some(SpaceCategory::MeetingRoom),
            ..Default::default()
        })
        .await?;
    assert_eq!(meeting_rooms.items.len(), 1);
    assert_eq!(meeting_rooms.items[0].details.name, "Meeting room");
    Ok(())
}
