use std::env;

use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;

use inventory_products::db::establish_connection_pool;
use inventory_products::models::config::ServerConfig;
use inventory_products::repository::DieselRepository;
use inventory_products::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(
        &server_config.database_url,
        server_config.connection_options(),
    ) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection pool: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);
    let bind_address = server_config.bind_address();

    log::info!(
        "Starting inventory server on {}:{} ({app_env})",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(routes::json_errors())
            .wrap(routes::default_headers())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
            .default_service(web::to(routes::fallback))
    })
    .bind(bind_address)?
    .run()
    .await
}
