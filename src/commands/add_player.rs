//! Add command implementation

use crate::{storage::PlayerDatabase, PlayerId, Result, Score};
use tracing::debug;

/// Handle the add command
pub fn handle_add(db: &mut PlayerDatabase, name: &str, score: Score) -> Result<PlayerId> {
    let id = db.add_player(name, score)?;
    debug!(%id, name, %score, "Added player");
    Ok(id)
}
