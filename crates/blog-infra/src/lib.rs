//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! A thin SQL store adapter over SeaORM raw statements, table bootstrap,
//! and the post/comment repositories built on top of it.
//!
//! Both SQLite and PostgreSQL URLs are accepted; the backend is picked from
//! the connection URL.

pub mod database;

pub use sea_orm::DbConn;

pub use database::{
    DatabaseConfig, SqlCommentRepository, SqlPostRepository, SqlStore, connect, connect_in_memory,
    ensure_schema,
};
