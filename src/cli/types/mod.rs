//! Type-safe wrappers for player store values.

pub mod ids;
pub mod score;


pub use ids::PlayerId;
pub use score::Score;
