//! Score update command implementation

use super::report_missing_row;
use crate::{storage::PlayerDatabase, PlayerId, Result, Score};
use tracing::debug;

/// Handle the updated command.
///
/// Returns whether a row matched. A missing id only logs a notice.
pub fn handle_update(db: &mut PlayerDatabase, id: PlayerId, score: Score) -> Result<bool> {
    let found = db.update_score(id, score)?;
    report_missing_row(found, id);
    if found {
        debug!(%id, %score, "Updated player score");
    }
    Ok(found)
}
