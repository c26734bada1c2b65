//! Task manager HTTP server.
//!
//! Boots configuration from the environment, applies pending migrations and
//! serves the task/project API over a shared diesel-async pool.

use actix_web::{App, HttpServer, middleware, web};
use diesel::{Connection, PgConnection};
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use task_manager::DbPool;
use task_manager::config::Config;
use task_manager::handlers::{self, AppState};
use task_manager::store::PgStore;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });

    run_migrations(&config.database_url);

    let pool = initialize_db_pool(&config).await;
    let port = config.port;
    let state = AppState::new(PgStore::new(pool), config);

    log::info!("starting HTTP server at http://0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure::<PgStore>)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

/// Apply pending migrations with a synchronous connection before the async
/// pool starts serving requests.
fn run_migrations(database_url: &str) {
    let mut conn = PgConnection::establish(database_url).unwrap_or_else(|e| {
        log::error!("Failed to connect to database for migrations: {}", e);
        std::process::exit(1);
    });
    conn.run_pending_migrations(MIGRATIONS).unwrap_or_else(|e| {
        log::error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    });
}

async fn initialize_db_pool(config: &Config) -> DbPool {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);
    DbPool::builder()
        .max_size(config.pool.max_size)
        .connection_timeout(config.pool.connection_timeout)
        .build(manager)
        .await
        .expect("Failed to create database pool")
}
