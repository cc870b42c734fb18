//! The dashboard's form and cache flow, driven against the real server.

use jiff::Timestamp;
use payloads::forms::{AT_LEAST_ONE, LocationForm, SpaceTypeForm, SubmitError};
use payloads::query::{CacheStatus, QueryCache, QueryKey};
use payloads::requests::{LocationListParams, SpaceListParams};
use payloads::responses::{self, Paginated};
use test_helpers::spawn_app;

#[tokio::test]
async fn zero_capacity_never_reaches_the_server() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;

    let mut form = SpaceTypeForm::for_location(location.id);
    form.name = "Hot desk".into();
    form.pricing.hourly = "6".into();
    form.min_capacity = "0".into();

    let before = app.request_count();
    match form.submit(&app.client, None).await {
        Err(SubmitError::Invalid(errors)) => {
            assert_eq!(errors.get("capacity.min"), Some(AT_LEAST_ONE));
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert_eq!(app.request_count(), before);

    // fixing the field lets the same form through
    form.min_capacity = "1".into();
    form.submit(&app.client, None).await?;
    assert_eq!(app.request_count(), before + 1);
    Ok(())
}

#[tokio::test]
async fn created_location_shows_after_invalidation() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_location().await?;

    let params = LocationListParams::default();
    let key = QueryKey::Locations(params.clone());
    let mut cache: QueryCache<Paginated<responses::Location>> =
        QueryCache::default();
    let now = Timestamp::now();
    cache.insert(key.clone(), app.client.list_locations(&params).await?, now);
    assert_eq!(cache.status(&key, now), CacheStatus::Fresh);

    let mut form = LocationForm {
        name: "Canal Street Studios".into(),
        street: "40 Canal Street".into(),
        city: "Glasgow".into(),
        country: "United Kingdom".into(),
        ..Default::default()
    };
    form.contacts[0].value = "+44 141 555 0199".into();
    form.submit(&app.client, None).await?;

    // the cached page is still the old one until the mutation lands
    assert_eq!(cache.get(&key).map(|page| page.items.len()), Some(1));
    assert!(cache.apply(&LocationForm::mutation(None)) >= 1);
    assert!(cache.needs_fetch(&key, now));

    cache.insert(key.clone(), app.client.list_locations(&params).await?, now);
    let names: Vec<String> = cache
        .get(&key)
        .map(|page| page.items.iter().map(|l| l.details.name.clone()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Canal Street Studios", "Harbour Works"]);
    Ok(())
}

#[tokio::test]
async fn generating_spaces_refreshes_space_lists() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let location = app.create_test_location().await?;
    let product_type = app.create_test_product_type(location.id).await?;

    let params = SpaceListParams::for_location(location.id);
    let key = QueryKey::Spaces(params.clone());
    let mut cache: QueryCache<Paginated<responses::Space>> = QueryCache::default();
    let now = Timestamp::now();
    cache.insert(key.clone(), app.client.list_spaces(&params).await?, now);

    let generated = app
        .client
        .generate_spaces(&product_type.id, &Default::default())
        .await?;
    cache.apply(&payloads::query::Mutation::GenerateSpaces(product_type.id));
    assert!(cache.needs_fetch(&key, now));

    cache.insert(key.clone(), app.client.list_spaces(&params).await?, now);
    assert_eq!(
        cache.get(&key).map(|page| page.pagination.total_items),
        Some(generated.len() as u32)
    );
    Ok(())
}
