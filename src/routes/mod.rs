//! HTTP surface of the service.
//!
//! Every response leaves through [`default_headers`], which stamps the CORS
//! headers and the JSON content type on anything that does not already set
//! one, including preflight and fallback responses. Errors raised by the
//! framework itself (extractor failures, oversized bodies) are rewritten into
//! the `{"error": ...}` shape by [`json_errors`].

use actix_web::dev::ServiceResponse;
use actix_web::error::InternalError;
use actix_web::http::{Method, header};
use actix_web::middleware::{DefaultHeaders, ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::dto::products::ErrorResponse;

pub mod products;

pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
pub const MAX_AGE_SECONDS: &str = "3600";

/// Headers added to every response.
pub fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGIN))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .add((header::ACCESS_CONTROL_MAX_AGE, MAX_AGE_SECONDS))
        .add((header::CONTENT_TYPE, "application/json"))
}

/// Rewrites non-JSON error responses as `{"error": "<message>"}`.
///
/// Must be wrapped inside [`default_headers`] so it sees the response before
/// the JSON content type is stamped on.
pub fn json_errors<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(error_as_json)
}

fn error_as_json<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let message = match res.response().error() {
        Some(err) => err.to_string(),
        None => res
            .status()
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };
    let (req, res) = res.into_parts();
    let res = HttpResponse::build(res.status()).json(ErrorResponse::new(message));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res).map_into_right_body(),
    ))
}

/// Register the product routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        )
        .into()
    }))
    .service(
        web::resource(["/products", "/products/"])
            .route(web::get().to(products::list_products))
            .route(web::post().to(products::create_product))
            .route(web::put().to(products::missing_product_id))
            .route(web::delete().to(products::missing_product_id))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/products/{product_id}")
            .route(web::get().to(products::show_product))
            .route(web::put().to(products::update_product))
            .route(web::delete().to(products::delete_product))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}

/// CORS preflight: headers only.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorResponse::new("Method not allowed"))
}

/// App-wide default service. Answers preflight on any path.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    if *req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}
