//! Storage layer for league match data
//!
//! A local SQLite copy of the match store, organized into:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Read/write operations, including the `MatchStore` impl

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::MatchDatabase;
