//! ID types for stored players.

use crate::error::{PlayerStoreError, Result};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player row IDs.
///
/// IDs are assigned by the store on insert and never change afterwards.
///
/// # Examples
///
/// ```rust
/// use player_store::PlayerId;
///
/// let id: PlayerId = "42".parse().unwrap();
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = PlayerStoreError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse()
            .map(Self)
            .map_err(PlayerStoreError::InvalidPlayerId)
    }
}
