//! Data models for the storage layer

use crate::cli::types::{PlayerId, Score};

/// A row of the `player` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: Score,
}
