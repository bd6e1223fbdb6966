use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    ProductChanges as DomainProductChanges,
};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `product` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::product)]
pub struct Product {
    pub id: i32,
    pub products: String,
    pub category: String,
    pub name: String,
    pub brand: String,
    pub cost: i32,
    pub quantity: i32,
}

/// Insertable form of [`Product`]; `id` is assigned by SQLite.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product)]
pub struct NewProduct {
    pub products: String,
    pub category: String,
    pub name: String,
    pub brand: String,
    pub cost: i32,
    pub quantity: i32,
}

/// Changeset for partial updates. Diesel skips `None` fields, so the
/// generated `SET` clause lists exactly the present columns, in field order.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::product)]
pub struct ProductChanges {
    pub products: Option<String>,
    pub category: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub cost: Option<i32>,
    pub quantity: Option<i32>,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            products: product.products,
            category: product.category,
            name: product.name,
            brand: product.brand,
            cost: product.cost,
            quantity: product.quantity,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            products: product.products,
            category: product.category,
            name: product.name,
            brand: product.brand,
            cost: product.cost,
            quantity: product.quantity,
        }
    }
}

impl From<DomainProductChanges> for ProductChanges {
    fn from(changes: DomainProductChanges) -> Self {
        Self {
            products: changes.products,
            category: changes.category,
            name: changes.name,
            brand: changes.brand,
            cost: changes.cost,
            quantity: changes.quantity,
        }
    }
}
