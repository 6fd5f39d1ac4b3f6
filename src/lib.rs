//! Player Store
//!
//! Keeps `(id, name, score)` player rows in a local SQLite file and exposes
//! four actions: add a player, set a player's score, remove a player, and
//! list all players ordered by id.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use player_store::{commands::dispatch, cli::Commands, storage::PlayerDatabase, Score};
//!
//! # fn example() -> player_store::Result<()> {
//! let mut db = PlayerDatabase::open(std::path::Path::new("player.db"))?;
//! let mut stdout = std::io::stdout();
//! dispatch(
//!     &mut db,
//!     Commands::Add { name: "Alice".to_string(), score: Score::new(10), extra: Vec::new() },
//!     &mut stdout,
//! )?;
//! dispatch(&mut db, Commands::List { extra: Vec::new() }, &mut stdout)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a different database file:
//! ```bash
//! export PLAYER_DB_PATH=$HOME/.local/share/scores/player.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, Score};
pub use error::{PlayerStoreError, Result};

pub const DB_PATH_ENV_VAR: &str = "PLAYER_DB_PATH";
pub const DEFAULT_DB_PATH: &str = "player.db";
