use serde::{Deserialize, Serialize};

use crate::domain::types::ProductId;

/// Products whose stock is strictly below this count are reported as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// A stocked product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    /// Descriptive label, distinct from `name`.
    pub products: String,
    pub category: String,
    pub name: String,
    pub brand: String,
    /// Cost in whole currency units.
    pub cost: i32,
    pub quantity: i32,
}

impl Product {
    /// Whether the stock count is below [`LOW_STOCK_THRESHOLD`].
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProduct {
    pub products: String,
    pub category: String,
    pub name: String,
    pub brand: String,
    pub cost: i32,
    pub quantity: i32,
}

impl NewProduct {
    /// Attach a store-generated identifier.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            products: self.products,
            category: self.category,
            name: self.name,
            brand: self.brand,
            cost: self.cost,
            quantity: self.quantity,
        }
    }
}

/// Partial update of a [`Product`]. `None` leaves the stored value untouched.
///
/// Field order is the order in which columns appear in the generated
/// `UPDATE ... SET` clause.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductChanges {
    pub products: Option<String>,
    pub category: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub cost: Option<i32>,
    pub quantity: Option<i32>,
}

impl ProductChanges {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.products.is_none()
            && self.category.is_none()
            && self.name.is_none()
            && self.brand.is_none()
            && self.cost.is_none()
            && self.quantity.is_none()
    }

    /// Apply the present fields to `product` in place.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(products) = &self.products {
            product.products = products.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(brand) = &self.brand {
            product.brand = brand.clone();
        }
        if let Some(cost) = self.cost {
            product.cost = cost;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
    }
}
