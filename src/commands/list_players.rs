//! List command implementation

use crate::{
    storage::{Player, PlayerDatabase},
    Result,
};
use std::io::Write;

pub const LIST_HEADER: &str = "id | name | score";

/// Handle the list command
pub fn handle_list<W: Write>(db: &PlayerDatabase, out: &mut W) -> Result<()> {
    let players = db.list_players()?;
    write_player_table(&players, out)
}

/// Write the header line followed by one `<id> | <name> | <score>` line per player
pub fn write_player_table<W: Write>(players: &[Player], out: &mut W) -> Result<()> {
    writeln!(out, "{}", LIST_HEADER)?;
    for player in players {
        writeln!(out, "{} | {} | {}", player.id, player.name, player.score)?;
    }
    out.flush()?;
    Ok(())
}
