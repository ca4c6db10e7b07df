//! Command-line interface.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use conduit::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, TuiOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

use std::sync::Arc;

use color_eyre::Result;

use crate::adapters::FileStore;
use crate::auth::Session;
use crate::config::AppConfig;

/// Run a command that does not need the TUI.
///
/// Returns `None` for [`CliCommand::RunTui`]. `Version` and `Help` exit the
/// process.
pub fn run_cli_command(command: &CliCommand, config: &AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Logout => Some(handle_logout_command(config)),
        CliCommand::RunTui(_) => None,
    }
}

/// Forget the stored token.
pub fn handle_logout_command(config: &AppConfig) -> Result<()> {
    let store = Arc::new(FileStore::in_dir(&config.data_dir));
    let session = Session::restore(store);
    let was_logged_in = session.is_logged_in();
    session.clear();
    if was_logged_in {
        println!("Logged out.");
    } else {
        println!("No stored session.");
    }
    Ok(())
}
