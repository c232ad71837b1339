//! Command dispatch logic extracted from the binary.

use super::{
    args::Commands,
    handlers::{handle_rules, handle_scan},
};
use crate::exit::SpscanExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<SpscanExit> {
    match command {
        Commands::Scan(args) => handle_scan(&args),
        Commands::Rules { root, config } => handle_rules(&root, config.as_deref()),
    }
}
