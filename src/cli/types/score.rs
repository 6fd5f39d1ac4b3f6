//! Player score type.

use crate::error::{PlayerStoreError, Result};
use std::fmt;
use std::str::FromStr;

/// A player's integer score. New players start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub i64);

impl Score {
    pub fn new(score: i64) -> Self {
        Self(score)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Score {
    type Err = PlayerStoreError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse().map(Self).map_err(PlayerStoreError::InvalidScore)
    }
}
