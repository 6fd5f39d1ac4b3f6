//! Remove command implementation

use super::report_missing_row;
use crate::{storage::PlayerDatabase, PlayerId, Result};
use tracing::debug;

/// Handle the remove command.
///
/// Returns whether a row matched. A missing id only logs a notice.
pub fn handle_remove(db: &mut PlayerDatabase, id: PlayerId) -> Result<bool> {
    let found = db.remove_player(id)?;
    report_missing_row(found, id);
    if found {
        debug!(%id, "Removed player");
    }
    Ok(found)
}
