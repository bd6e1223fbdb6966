use serde::Serialize;

use crate::domain::product::Product;

/// Row shape of the low-stock listing.
///
/// Existing consumers of this listing read `product` instead of `products`
/// and a floating-point `cost`, so it does not reuse [`Product`]'s shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockProductDto {
    pub id: i32,
    pub product: String,
    pub category: String,
    pub name: String,
    pub brand: String,
    pub cost: f64,
    pub quantity: i32,
}

impl From<Product> for LowStockProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            product: value.products,
            category: value.category,
            name: value.name,
            brand: value.brand,
            cost: f64::from(value.cost),
            quantity: value.quantity,
        }
    }
}

/// Body of every failed request except a get-by-id miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Acknowledgement returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: &'static str,
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: "Product deleted successfully",
        }
    }
}
