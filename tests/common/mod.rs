//! Helpers for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use inventory_products::db::{ConnectionOptions, DbPool, establish_connection_pool};
use inventory_products::domain::product::NewProduct;
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(
            tempfile.path().to_str().unwrap(),
            ConnectionOptions::default(),
        )
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn url(&self) -> &str {
        self._tempfile.path().to_str().unwrap()
    }
}

#[allow(dead_code)]
pub fn new_product(name: &str, cost: i32, quantity: i32) -> NewProduct {
    NewProduct {
        products: format!("{name} label"),
        category: "Dairy".to_string(),
        name: name.to_string(),
        brand: "Acme".to_string(),
        cost,
        quantity,
    }
}
