use actix_web::{HttpResponse, HttpResponseBuilder, Responder, web};
use serde::Deserialize;

use crate::dto::products::{DeletedResponse, ErrorResponse};
use crate::forms::products::JsonObject;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::products::{
    MISSING_ID_MESSAGE, create_product as create_product_service,
    delete_product as delete_product_service, get_product as get_product_service,
    list_low_stock_products as list_low_stock_products_service,
    list_products as list_products_service, update_product as update_product_service,
};

/// `action` value selecting the low-stock listing.
pub const LOW_STOCK_ACTION: &str = "low-stock";

#[derive(Deserialize, Debug)]
pub struct ProductsQueryParams {
    action: Option<String>,
}

fn json_error(mut builder: HttpResponseBuilder, message: impl Into<String>) -> HttpResponse {
    builder.json(ErrorResponse::new(message))
}

/// Failure response shared by the list and get-by-id endpoints.
fn read_failure(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::DriverUnavailable(_) => {
            json_error(HttpResponse::InternalServerError(), "Database driver not found")
        }
        ServiceError::Database(message) => json_error(
            HttpResponse::InternalServerError(),
            format!("Database error: {message}"),
        ),
        other => json_error(HttpResponse::InternalServerError(), other.to_string()),
    }
}

pub async fn list_products(
    params: web::Query<ProductsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if params.action.as_deref() == Some(LOW_STOCK_ACTION) {
        return match list_low_stock_products_service(repo.get_ref()) {
            Ok(products) => HttpResponse::Ok().json(products),
            Err(err) => json_error(HttpResponse::InternalServerError(), err.to_string()),
        };
    }

    match list_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => read_failure(err),
    }
}

pub async fn show_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_service(&product_id, repo.get_ref()) {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => HttpResponse::NotFound().json(JsonObject::new()),
        Err(err) => read_failure(err),
    }
}

pub async fn create_product(body: web::Bytes, repo: web::Data<DieselRepository>) -> impl Responder {
    match create_product_service(&body, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::Validation(message)) => json_error(HttpResponse::BadRequest(), message),
        Err(err) => json_error(HttpResponse::InternalServerError(), err.to_string()),
    }
}

/// Store failures on this endpoint answer 400, unlike the other endpoints.
pub async fn update_product(
    product_id: web::Path<String>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_product_service(&product_id, &body, repo.get_ref()) {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => HttpResponse::NotFound().json(JsonObject::new()),
        Err(ServiceError::NotFound) => {
            json_error(HttpResponse::NotFound(), ServiceError::NotFound.to_string())
        }
        Err(err) => json_error(HttpResponse::BadRequest(), err.to_string()),
    }
}

pub async fn delete_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(&product_id, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(DeletedResponse::default()),
        Err(ServiceError::NotFound) => {
            json_error(HttpResponse::NotFound(), ServiceError::NotFound.to_string())
        }
        Err(ServiceError::Validation(message)) => json_error(HttpResponse::BadRequest(), message),
        Err(err) => json_error(HttpResponse::InternalServerError(), err.to_string()),
    }
}

/// `PUT` or `DELETE` on the collection path.
pub async fn missing_product_id() -> impl Responder {
    json_error(HttpResponse::BadRequest(), MISSING_ID_MESSAGE)
}
