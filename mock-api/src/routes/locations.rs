use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::LocationId;
use payloads::requests::LocationListParams;
use std::sync::Mutex;
use uuid::Uuid;

use crate::store::Store;

use super::{APIError, lock, ok};

#[tracing::instrument(skip(store), ret)]
#[get("/locations")]
pub async fn list_locations(
    params: web::Query<LocationListParams>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let page = lock(&store).list_locations(&params);
    Ok(ok(page))
}

#[tracing::instrument(skip(store), ret)]
#[post("/locations")]
pub async fn create_location(
    details: web::Json<payloads::Location>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let location = lock(&store).create_location(details.into_inner())?;
    Ok(ok(location))
}

#[tracing::instrument(skip(store), ret)]
#[get("/locations/{id}")]
pub async fn get_location(
    id: web::Path<Uuid>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let location = lock(&store).get_location(&LocationId(*id))?;
    Ok(ok(location))
}

#[tracing::instrument(skip(store), ret)]
#[put("/locations/{id}")]
pub async fn update_location(
    id: web::Path<Uuid>,
    details: web::Json<payloads::Location>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let location = lock(&store)
        .update_location(&LocationId(*id), details.into_inner())?;
    Ok(ok(location))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/locations/{id}")]
pub async fn delete_location(
    id: web::Path<Uuid>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    lock(&store).delete_location(&LocationId(*id))?;
    Ok(ok(()))
}
