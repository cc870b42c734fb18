pub mod bookings;
pub mod locations;
pub mod product_types;
pub mod spaces;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, http::StatusCode, web,
};
use payloads::forms::FieldErrors;
use payloads::responses::{ApiErrorBody, ApiResponse};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

use crate::store::{Store, StoreError};
use crate::telemetry::log_error;

pub fn api_services() -> impl HttpServiceFactory {
    // fixed paths are registered before the `{id}` routes they would
    // otherwise be parsed as
    web::scope("/api")
        .service(health_check)
        .service(locations::list_locations)
        .service(locations::create_location)
        .service(locations::get_location)
        .service(locations::update_location)
        .service(locations::delete_location)
        .service(spaces::list_spaces)
        .service(spaces::create_space)
        .service(spaces::space_stats)
        .service(spaces::get_space)
        .service(spaces::update_space)
        .service(spaces::delete_space)
        .service(spaces::space_availability)
        .service(product_types::list_product_types)
        .service(product_types::create_product_type)
        .service(product_types::get_product_type)
        .service(product_types::update_product_type)
        .service(product_types::delete_product_type)
        .service(product_types::generate_spaces)
        .service(bookings::list_bookings)
        .service(bookings::create_booking)
        .service(bookings::booking_stats)
        .service(bookings::get_booking)
        .service(bookings::cancel_booking)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Validation failed")]
    Invalid(FieldErrors),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Invalid(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let (message, errors) = match self {
            Self::Invalid(errors) => {
                (self.to_string(), Some(errors.clone().into_map()))
            }
            Self::BadRequest(e) | Self::NotFound(e) => (e.to_string(), None),
            Self::UnexpectedError(e) => {
                log_error(e);
                (self.to_string(), None)
            }
        };
        HttpResponse::build(self.status_code()).json(ApiErrorBody {
            success: false,
            message,
            errors,
        })
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(errors) => APIError::Invalid(errors),
            StoreError::LocationNotFound
            | StoreError::SpaceNotFound
            | StoreError::ProductTypeNotFound
            | StoreError::BookingNotFound => APIError::NotFound(e.into()),
            StoreError::UnexpectedError(e) => APIError::UnexpectedError(e),
            _ => APIError::BadRequest(e.into()),
        }
    }
}

/// Wrap `data` in the success envelope.
fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(data))
}

/// Every store method leaves its maps consistent before it can fail, so a
/// poisoned lock still guards usable data.
fn lock(store: &web::Data<Mutex<Store>>) -> MutexGuard<'_, Store> {
    store.lock().unwrap_or_else(|poisoned| {
        tracing::error!("store lock poisoned, recovering");
        store.clear_poison();
        poisoned.into_inner()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeSource;
    use payloads::requests::LocationListParams;

    #[test]
    fn poisoned_store_keeps_serving() {
        #[cfg(feature = "mock-time")]
        let time_source = TimeSource::new("2025-01-06T09:00:00Z".parse().unwrap());
        #[cfg(not(feature = "mock-time"))]
        let time_source = TimeSource::new();
        let store = web::Data::new(Mutex::new(Store::new(time_source)));

        let poisoner = store.clone();
        let result = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("handler panicked while holding the store");
        })
        .join();
        assert!(result.is_err());
        assert!(store.is_poisoned());

        let page = lock(&store).list_locations(&LocationListParams::default());
        assert_eq!(page.pagination.total_items, 0);
        assert!(!store.is_poisoned());
    }
}
