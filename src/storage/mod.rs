//! Storage layer for the player store CLI
//!
//! This module wraps the SQLite database holding the `player` table:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Add, update, remove and list operations

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::PlayerDatabase;
