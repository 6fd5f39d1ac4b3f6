//! Command implementations for the player store CLI

pub mod add_player;
pub mod list_players;
pub mod remove_player;
pub mod update_player;

#[cfg(test)]
mod tests;

use crate::{
    cli::Commands, storage::PlayerDatabase, PlayerId, Result, DB_PATH_ENV_VAR, DEFAULT_DB_PATH,
};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

use add_player::handle_add;
use list_players::handle_list;
use remove_player::handle_remove;
use update_player::handle_update;

/// Resolve the database file from the `PLAYER_DB_PATH` environment variable,
/// falling back to `player.db` in the working directory.
pub fn resolve_database_path() -> PathBuf {
    database_path_from(std::env::var_os(DB_PATH_ENV_VAR))
}

pub(crate) fn database_path_from(value: Option<OsString>) -> PathBuf {
    match value {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DB_PATH),
    }
}

/// Run a single parsed action against the database.
///
/// Table output from `list` is written to `out`; notices go to the log.
pub fn dispatch<W: Write>(db: &mut PlayerDatabase, command: Commands, out: &mut W) -> Result<()> {
    debug!(action = command.action(), "Dispatching action");
    if !command.extra().is_empty() {
        debug!(extra = ?command.extra(), "Ignoring extra arguments");
    }

    match command {
        Commands::Add { name, score, .. } => {
            handle_add(db, &name, score)?;
        }
        Commands::Update { id, score, .. } => {
            handle_update(db, id, score)?;
        }
        Commands::Remove { id, .. } => {
            handle_remove(db, id)?;
        }
        Commands::List { .. } => handle_list(db, out)?,
    }

    Ok(())
}

/// Log the notice for an update or remove that matched no row
pub(crate) fn report_missing_row(found: bool, id: PlayerId) {
    if !found {
        warn!("Could not find any row with id {}", id);
    }
}
