//! # Blog API Server
//!
//! Posts and comments over HTTP, backed by a SQL store.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    let db = blog_infra::connect(&config.database)
        .await
        .context("connecting to database")?;
    blog_infra::ensure_schema(&db)
        .await
        .context("creating tables")?;

    let state = AppState::new(db);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
