//! Database module: models and schema for the durable entities.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the storage handle issuing the actual queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{ContactMessage, NewMessage, SiteSettings};
pub use schema::SQLITE_INIT;
pub use sqlite::{SiteStorage, SqlitePool};

use crate::error::SiteError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open (creating if missing) the SQLite database and initialize the schema.
pub async fn connect(database_url: &str) -> Result<SiteStorage, SiteError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(opts).await?;
    let storage = SiteStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}
