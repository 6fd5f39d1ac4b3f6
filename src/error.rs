//! Error types for the player store CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PlayerStoreError>;

#[derive(Error, Debug)]
pub enum PlayerStoreError {
    #[error("Error on {context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse player id: {0}")]
    InvalidPlayerId(#[source] std::num::ParseIntError),

    #[error("Failed to parse score: {0}")]
    InvalidScore(#[source] std::num::ParseIntError),
}

/// Attach the label of the failing storage operation to a rusqlite result.
pub trait StorageContext<T> {
    fn on(self, context: &'static str) -> Result<T>;
}

impl<T> StorageContext<T> for rusqlite::Result<T> {
    fn on(self, context: &'static str) -> Result<T> {
        self.map_err(|source| PlayerStoreError::Storage { context, source })
    }
}
