use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::product::{NewProduct, Product, ProductChanges};
use crate::domain::types::ProductId;
use crate::repository::{ProductReader, ProductWriter, RepositoryError, RepositoryResult};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    products: Mutex<Vec<Product>>,
    next_id: Mutex<i32>,
    failure: Option<RepositoryError>,
    statements: AtomicUsize,
}

impl TestRepository {
    pub fn new(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        Self {
            products: Mutex::new(products),
            next_id: Mutex::new(next_id),
            failure: None,
            statements: AtomicUsize::new(0),
        }
    }

    /// Repository whose every call fails with `error`.
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Number of write statements issued so far.
    pub fn write_statements(&self) -> usize {
        self.statements.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    fn check(&self) -> RepositoryResult<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        self.check()?;
        let mut items = self.snapshot();
        items.sort_by_key(|p| p.id);
        Ok(items)
    }

    fn list_low_stock_products(&self) -> RepositoryResult<Vec<Product>> {
        let mut items = self.list_products()?;
        items.retain(Product::is_low_stock);
        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        self.check()?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    fn product_exists(&self, id: ProductId) -> RepositoryResult<bool> {
        Ok(self.get_product_by_id(id)?.is_some())
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId> {
        self.check()?;
        self.statements.fetch_add(1, Ordering::SeqCst);
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = ProductId::new(*next_id)?;
        self.products
            .lock()
            .unwrap()
            .push(product.clone().with_id(id));
        Ok(id)
    }

    fn update_product(&self, id: ProductId, changes: &ProductChanges) -> RepositoryResult<usize> {
        self.check()?;
        self.statements.fetch_add(1, Ordering::SeqCst);
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                changes.apply_to(product);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        self.check()?;
        self.statements.fetch_add(1, Ordering::SeqCst);
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(before - products.len())
    }
}
