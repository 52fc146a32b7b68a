//! Table bootstrap for the `post` and `comment` tables.

use sea_orm::{ConnectionTrait, DbBackend, DbConn, DbErr};

const SQLITE_SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS post (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        published_on TIMESTAMP NULL,
        created_on TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS comment (
        id TEXT PRIMARY KEY NOT NULL,
        post_id TEXT NOT NULL REFERENCES post (id),
        content TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS comment_post_id_idx ON comment (post_id)",
];

const POSTGRES_SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS post (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        published_on TIMESTAMPTZ NULL,
        created_on TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE TABLE IF NOT EXISTS comment (
        id TEXT PRIMARY KEY,
        post_id TEXT NOT NULL REFERENCES post (id),
        content TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS comment_post_id_idx ON comment (post_id)",
];

/// Create the tables if they do not exist yet. Safe to run on every start.
pub async fn ensure_schema(conn: &DbConn) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let statements = match backend {
        DbBackend::Postgres => POSTGRES_SCHEMA,
        _ => SQLITE_SCHEMA,
    };

    for sql in statements {
        conn.execute_unprepared(sql).await?;
    }

    tracing::debug!(?backend, "Schema ensured");
    Ok(())
}
