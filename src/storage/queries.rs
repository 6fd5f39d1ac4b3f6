//! Basic database query operations

use super::{models::*, schema::PlayerDatabase};
use crate::error::{Result, StorageContext};
use crate::{PlayerId, Score};
use rusqlite::{params, Row};

impl PlayerDatabase {
    /// Insert a new player and return the id the store assigned to it
    pub fn add_player(&mut self, name: &str, score: Score) -> Result<PlayerId> {
        self.conn
            .execute(
                "INSERT INTO player (name, score) VALUES (?, ?)",
                params![name, score.as_i64()],
            )
            .on("insert into player")?;
        Ok(PlayerId::new(self.conn.last_insert_rowid()))
    }

    /// Set the score of a player.
    /// Returns false when no row has the given id.
    pub fn update_score(&mut self, id: PlayerId, score: Score) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE player SET score = ? WHERE id = ?",
                params![score.as_i64(), id.as_i64()],
            )
            .on("update player")?;
        Ok(rows_affected > 0)
    }

    /// Delete a player.
    /// Returns false when no row has the given id.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM player WHERE id = ?", params![id.as_i64()])
            .on("delete from player")?;
        Ok(rows_affected > 0)
    }

    /// Get a single player by id
    #[cfg(test)]
    pub(crate) fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        use rusqlite::OptionalExtension;

        self.conn
            .query_row(
                "SELECT id, name, score FROM player WHERE id = ?",
                params![id.as_i64()],
                Self::row_to_player,
            )
            .optional()
            .on("select from player")
    }

    /// Get all players in ascending id order
    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, score FROM player ORDER BY id ASC")
            .on("select from player")?;

        let rows = stmt
            .query_map([], Self::row_to_player)
            .on("select from player")?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row.on("scan player select")?);
        }
        Ok(players)
    }

    fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            id: PlayerId::new(row.get(0)?),
            name: row.get(1)?,
            score: Score::new(row.get(2)?),
        })
    }
}
