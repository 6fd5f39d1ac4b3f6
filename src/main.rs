//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use player_store::{
    cli::PlayerStoreCli,
    commands::{dispatch, resolve_database_path},
    logging::init_tracing,
    storage::PlayerDatabase,
    Result,
};
use std::process::ExitCode;
use tracing::error;

/// Run the CLI.
fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let app = match PlayerStoreCli::try_parse() {
        Ok(app) => app,
        Err(e) => {
            let _ = e.print();
            // Usage errors exit 1; --help and --version exit 0
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: PlayerStoreCli) -> Result<()> {
    let mut db = PlayerDatabase::open(&resolve_database_path())?;
    let mut stdout = std::io::stdout().lock();
    dispatch(&mut db, app.command, &mut stdout)
}
