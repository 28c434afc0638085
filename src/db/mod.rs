//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and the default category set
//! - `sqlite.rs`: `TriviaStorage`, the query functions used by the handlers

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Category, CategoryMap, NewQuestion, Question, category_map};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TriviaStorage};

use crate::error::TriviaError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open (creating if missing) the SQLite database and apply the schema.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<TriviaStorage, TriviaError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(connect_opts)
        .await?;
    let storage = TriviaStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}
