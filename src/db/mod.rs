//! Database module: models, schema and the ownership-scoped row access.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and their public projections
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `owned.rs`: lookups and deletes filtered by the owning user
//! - `sqlite.rs`: pool construction and schema bootstrap

pub mod models;
pub mod owned;
pub mod schema;
pub mod sqlite;

pub use models::{CredentialView, DbCategory, DbCredential, DbUser, PublicUser, UserId};
pub use owned::{OwnedRecord, Owner};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, connect, init_schema};
