use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::SpaceId;
use payloads::requests::{AvailabilityParams, SpaceListParams, StatsParams};
use std::sync::Mutex;
use uuid::Uuid;

use crate::store::Store;

use super::{APIError, lock, ok};

#[tracing::instrument(skip(store), ret)]
#[get("/spaces")]
pub async fn list_spaces(
    params: web::Query<SpaceListParams>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let page = lock(&store).list_spaces(&params);
    Ok(ok(page))
}

#[tracing::instrument(skip(store), ret)]
#[post("/spaces")]
pub async fn create_space(
    details: web::Json<payloads::Space>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let space = lock(&store).create_space(details.into_inner())?;
    Ok(ok(space))
}

#[tracing::instrument(skip(store), ret)]
#[get("/spaces/stats")]
pub async fn space_stats(
    params: web::Query<StatsParams>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let stats = lock(&store).space_stats(&params);
    Ok(ok(stats))
}

#[tracing::instrument(skip(store), ret)]
#[get("/spaces/{id}")]
pub async fn get_space(
    id: web::Path<Uuid>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let space = lock(&store).get_space(&SpaceId(*id))?;
    Ok(ok(space))
}

#[tracing::instrument(skip(store), ret)]
#[put("/spaces/{id}")]
pub async fn update_space(
    id: web::Path<Uuid>,
    details: web::Json<payloads::Space>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let space =
        lock(&store).update_space(&SpaceId(*id), details.into_inner())?;
    Ok(ok(space))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/spaces/{id}")]
pub async fn delete_space(
    id: web::Path<Uuid>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    lock(&store).delete_space(&SpaceId(*id))?;
    Ok(ok(()))
}

#[tracing::instrument(skip(store), ret)]
#[get("/spaces/{id}/availability")]
pub async fn space_availability(
    id: web::Path<Uuid>,
    params: web::Query<AvailabilityParams>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let availability =
        lock(&store).space_availability(&SpaceId(*id), params.date)?;
    Ok(ok(availability))
}
