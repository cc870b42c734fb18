use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::ProductTypeId;
use payloads::requests::{GenerateSpaces, ProductTypeListParams};
use std::sync::Mutex;
use uuid::Uuid;

use crate::store::Store;

use super::{APIError, lock, ok};

#[tracing::instrument(skip(store), ret)]
#[get("/product-types")]
pub async fn list_product_types(
    params: web::Query<ProductTypeListParams>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let page = lock(&store).list_product_types(&params);
    Ok(ok(page))
}

#[tracing::instrument(skip(store), ret)]
#[post("/product-types")]
pub async fn create_product_type(
    details: web::Json<payloads::ProductType>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let product_type =
        lock(&store).create_product_type(details.into_inner())?;
    Ok(ok(product_type))
}

#[tracing::instrument(skip(store), ret)]
#[get("/product-types/{id}")]
pub async fn get_product_type(
    id: web::Path<Uuid>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let product_type = lock(&store).get_product_type(&ProductTypeId(*id))?;
    Ok(ok(product_type))
}

#[tracing::instrument(skip(store), ret)]
#[put("/product-types/{id}")]
pub async fn update_product_type(
    id: web::Path<Uuid>,
    details: web::Json<payloads::ProductType>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let product_type = lock(&store)
        .update_product_type(&ProductTypeId(*id), details.into_inner())?;
    Ok(ok(product_type))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/product-types/{id}")]
pub async fn delete_product_type(
    id: web::Path<Uuid>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    lock(&store).delete_product_type(&ProductTypeId(*id))?;
    Ok(ok(()))
}

#[tracing::instrument(skip(store), ret)]
#[post("/product-types/{id}/generate-spaces")]
pub async fn generate_spaces(
    id: web::Path<Uuid>,
    details: web::Json<GenerateSpaces>,
    store: web::Data<Mutex<Store>>,
) -> Result<HttpResponse, APIError> {
    let spaces = lock(&store).generate_spaces(&ProductTypeId(*id), &details)?;
    Ok(ok(spaces))
}
