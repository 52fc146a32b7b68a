use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

use super::schema::ensure_schema;

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `sqlite://...` or `postgres://...`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Open a connection pool for `config.url`.
///
/// Foreign keys are enforced on SQLite by the driver's default options.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(
        backend = ?conn.get_database_backend(),
        "Database connected (pool: {})",
        config.max_connections
    );

    Ok(conn)
}

/// A private in-memory SQLite database with both tables created.
///
/// The pool is pinned to a single connection, since every SQLite
/// connection to `:memory:` opens its own empty database.
pub async fn connect_in_memory() -> Result<DbConn, DbErr> {
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();

    let conn = Database::connect(opts).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}
