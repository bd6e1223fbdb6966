use std::time::Duration;

use serde::Deserialize;

use crate::db::ConnectionOptions;

/// Configuration options specific to the inventory service.
///
/// Supplied once at process startup and injected into the pool and the HTTP
/// server; nothing in the request path reads the environment directly.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Upper bound on pooled database connections.
    pub pool_max_size: u32,
    /// How long a connection waits for SQLite's write lock, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl ServerConfig {
    /// Pool settings derived from this configuration.
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            max_size: self.pool_max_size,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }
}

#[cfg(feature = "server")]
mod loader {
    use config::{Config, ConfigError, Environment, File, FileFormat};

    use super::ServerConfig;
    use crate::db::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_POOL_MAX_SIZE};

    const DEFAULT_ADDRESS: &str = "127.0.0.1";
    const DEFAULT_PORT: i64 = 8080;
    const DEFAULT_DATABASE_URL: &str = "inventory.db";

    impl ServerConfig {
        /// Load settings from `config/default.yaml`, `config/{app_env}.yaml` and
        /// `APP_*` environment variables, later sources overriding earlier ones.
        pub fn load(app_env: &str) -> Result<Self, ConfigError> {
            Config::builder()
                .set_default("address", DEFAULT_ADDRESS)?
                .set_default("port", DEFAULT_PORT)?
                .set_default("database_url", DEFAULT_DATABASE_URL)?
                .set_default("pool_max_size", i64::from(DEFAULT_POOL_MAX_SIZE))?
                .set_default("busy_timeout_ms", DEFAULT_BUSY_TIMEOUT_MS as i64)?
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name(&format!("config/{app_env}")).required(false))
                .add_source(Environment::with_prefix("APP"))
                .build()?
                .try_deserialize()
        }

        /// Parse settings from an in-memory YAML document, filling gaps with defaults.
        pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
            Config::builder()
                .set_default("address", DEFAULT_ADDRESS)?
                .set_default("port", DEFAULT_PORT)?
                .set_default("database_url", DEFAULT_DATABASE_URL)?
                .set_default("pool_max_size", i64::from(DEFAULT_POOL_MAX_SIZE))?
                .set_default("busy_timeout_ms", DEFAULT_BUSY_TIMEOUT_MS as i64)?
                .add_source(File::from_str(source, FileFormat::Yaml))
                .build()?
                .try_deserialize()
        }

        /// `address:port` pair suitable for `HttpServer::bind`.
        pub fn bind_address(&self) -> (String, u16) {
            (self.address.clone(), self.port)
        }
    }

}
