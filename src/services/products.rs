//! Business logic behind the `/products` endpoints.
//!
//! Every function here is generic over the repository traits so the HTTP
//! routes stay thin wrappers and the logic can be exercised against the
//! in-memory test repository.

use serde_json::Value;

use crate::domain::product::{NewProduct, Product, ProductChanges};
use crate::domain::types::ProductId;
use crate::dto::products::LowStockProductDto;
use crate::forms::products::{JsonObject, parse_json_object};
use crate::repository::{ProductReader, ProductWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// Message returned when a write addresses no product.
pub const MISSING_ID_MESSAGE: &str = "Product ID is required";

fn require_product_id(product_id: &str) -> ServiceResult<&str> {
    let product_id = product_id.trim();
    if product_id.is_empty() {
        return Err(ServiceError::Validation(MISSING_ID_MESSAGE.to_string()));
    }
    Ok(product_id)
}

/// List all products in ascending identifier order.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    repo.list_products().map_err(|e| {
        log::error!("Failed to list products: {e}");
        e.into()
    })
}

/// List products whose quantity is below the low-stock threshold.
pub fn list_low_stock_products<R>(repo: &R) -> ServiceResult<Vec<LowStockProductDto>>
where
    R: ProductReader,
{
    match repo.list_low_stock_products() {
        Ok(products) => Ok(products.into_iter().map(LowStockProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list low-stock products: {e}");
            Err(e.into())
        }
    }
}

/// Fetch one product. `Ok(None)` when no row matches, including identifiers
/// that are not positive integers and therefore can never match.
pub fn get_product<R>(product_id: &str, repo: &R) -> ServiceResult<Option<Product>>
where
    R: ProductReader,
{
    let Ok(id) = ProductId::parse(product_id) else {
        return Ok(None);
    };

    repo.get_product_by_id(id).map_err(|e| {
        log::error!("Failed to get product {id}: {e}");
        e.into()
    })
}

/// Insert the product described by `body` and echo the body back with the
/// store-generated `id` set.
pub fn create_product<R>(body: &[u8], repo: &R) -> ServiceResult<JsonObject>
where
    R: ProductWriter,
{
    let mut object = parse_json_object(body)?;
    let new_product = NewProduct::try_from(&object)?;

    let id = match repo.create_product(&new_product) {
        Ok(id) => id,
        Err(RepositoryError::NotFound) => {
            log::error!("Insert returned no generated key");
            return Err(ServiceError::Internal(
                "Failed to insert product".to_string(),
            ));
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            return Err(e.into());
        }
    };

    object.insert("id".to_string(), Value::from(id.get()));
    Ok(object)
}

/// Write the fields present in `body` to an existing product and return the
/// product as re-read afterwards.
///
/// The existence check and the update are separate statements; a concurrent
/// delete between them surfaces as `Err(NotFound)` or `Ok(None)`.
pub fn update_product<R>(
    product_id: &str,
    body: &[u8],
    repo: &R,
) -> ServiceResult<Option<Product>>
where
    R: ProductReader + ProductWriter,
{
    let product_id = require_product_id(product_id)?;
    let object = parse_json_object(body)?;
    let changes = ProductChanges::try_from(&object)?;

    let Ok(id) = ProductId::parse(product_id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.product_exists(id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check product {id}: {e}");
            return Err(e.into());
        }
    }

    if changes.is_empty() {
        return Err(ServiceError::Validation("No fields to update".to_string()));
    }

    let affected = repo.update_product(id, &changes).map_err(|e| {
        log::error!("Failed to update product {id}: {e}");
        ServiceError::from(e)
    })?;

    if affected == 0 {
        return Err(ServiceError::NotFound);
    }

    get_product(product_id, repo)
}

/// Delete a product by identifier.
pub fn delete_product<R>(product_id: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = require_product_id(product_id)?;

    let Ok(id) = ProductId::parse(product_id) else {
        return Err(ServiceError::NotFound);
    };

    match repo.delete_product(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product {id}: {e}");
            Err(e.into())
        }
    }
}
