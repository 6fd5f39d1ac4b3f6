//! CLI argument definitions and parsing.
//!
//! Every action takes positional arguments only. The update action is spelled
//! `updated` on the command line. Tokens past the ones an action needs are
//! collected into a hidden `extra` list and ignored.

pub mod types;


use clap::{Parser, Subcommand};
use types::{PlayerId, Score};

#[derive(Debug, Parser)]
#[clap(
    name = "player-store",
    about = "Manage player scores in a local SQLite database",
    subcommand_required = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct PlayerStoreCli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Add a new player with an optional starting score
    Add {
        /// Player name, stored as given.
        #[clap(allow_hyphen_values = true)]
        name: String,

        /// Starting score.
        #[clap(allow_negative_numbers = true, default_value_t = Score::default())]
        score: Score,

        #[clap(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Set the score of an existing player
    #[clap(name = "updated")]
    Update {
        /// ID of the player to update.
        #[clap(allow_negative_numbers = true)]
        id: PlayerId,

        /// New score.
        #[clap(allow_negative_numbers = true)]
        score: Score,

        #[clap(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Remove a player
    Remove {
        /// ID of the player to remove.
        #[clap(allow_negative_numbers = true)]
        id: PlayerId,

        #[clap(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// List all players ordered by id
    List {
        #[clap(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        extra: Vec<String>,
    },
}

impl Commands {
    /// The literal action token as typed on the command line.
    pub fn action(&self) -> &'static str {
        match self {
            Commands::Add { .. } => "add",
            Commands::Update { .. } => "updated",
            Commands::Remove { .. } => "remove",
            Commands::List { .. } => "list",
        }
    }

    /// Trailing tokens the action does not use.
    pub fn extra(&self) -> &[String] {
        match self {
            Commands::Add { extra, .. }
            | Commands::Update { extra, .. }
            | Commands::Remove { extra, .. }
            | Commands::List { extra } => extra,
        }
    }
}
