use actix_web::{HttpResponse, get, post, web};
use payloads::BookingId;
use payloads::requests::{BookingListParams, CreateBooking, StatsParams};
use std::sync::Mutex;
use uuid::Uuid;

use crate::store::Store;

use super::{APIError, lock, ok};

#[tracing::instrument(skip(store), ret)]
#[get("/bookings")]
pub async fn list_bookings(
    params: web::Query<BookingListParams>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let page = lock(&store).list_bookings(&params);
    Ok(ok(page))
}

#[tracing::instrument(skip(store), ret)]
#[post("/bookings")]
pub async fn create_booking(
    details: web::Json<CreateBooking>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let booking = lock(&store).create_booking(details.into_inner())?;
    Ok(ok(booking))
}

#[tracing::instrument(skip(store), ret)]
#[get("/bookings/stats")]
pub async fn booking_stats(
    params: web::Query<StatsParams>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let stats = lock(&store).booking_stats(&params);
    Ok(ok(stats))
}

#[tracing::instrument(skip(store), ret)]
#[get("/bookings/{id}")]
pub async fn get_booking(
    id: web::Path<Uuid>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let booking = lock(&store).get_booking(&BookingId(*id))?;
    Ok(ok(booking))
}

#[tracing::instrument(skip(store), ret)]
#[post("/bookings/{id}/cancel")]
pub async fn cancel_booking(
    id: web::Path<Uuid>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let booking = lock(&store).cancel_booking(&BookingId(*id))?;
    Ok(ok(booking))
}
