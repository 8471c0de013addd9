//! Database module: the account record and its SQLite storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring the `users` table
//! - `schema.rs`: SQL DDL that rebuilds the table on startup
//! - `sqlite.rs`: storage handle with the queries the service needs

pub mod models;
pub mod schema;
pub mod sqlite;

pub use sqlite::AccountsStorage;
