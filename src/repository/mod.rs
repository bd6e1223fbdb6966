use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductChanges};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    ///
    /// The connection goes back to the pool when the returned guard is dropped.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List every product ordered by ascending identifier.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// List products with a quantity below the low-stock threshold.
    fn list_low_stock_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Check whether a product with this identifier exists.
    fn product_exists(&self, id: ProductId) -> RepositoryResult<bool>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product and return the identifier the store assigned.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId>;
    /// Write the present fields of `changes`. Returns the number of rows affected.
    fn update_product(&self, id: ProductId, changes: &ProductChanges) -> RepositoryResult<usize>;
    /// Delete a product. Returns the number of rows affected.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
