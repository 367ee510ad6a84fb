//! Character sheet command line.
//!
//! Creates, levels up, shows and stores RPG characters as flat text files.
//!
//! # Examples
//!
//! ```bash
//! # New mage saved in the slot "aria" under the save directory
//! cargo run -p charsheet-client -- create Aria Mage
//!
//! # Gain three levels and write back
//! cargo run -p charsheet-client -- level-up aria --times 3
//!
//! # Inspect an arbitrary file
//! cargo run -p charsheet-client -- show ./my_character.txt --format json
//! ```

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Create, Demo, LevelUp, List, Show, Store};
use config::ClientConfig;

/// Create and manage RPG character sheets
#[derive(Parser)]
#[command(name = "charsheet")]
#[command(about = "Create, level up and store RPG characters", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding save slots (overrides SAVE_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create a new level 1 character
    Create(Create),

    /// Show a saved character
    Show(Show),

    /// Level up a saved character
    LevelUp(LevelUp),

    /// List save slots
    List(List),

    /// Create, level up, save and reload a sample character
    Demo(Demo),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SAVE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.runtime.save_data_dir = dir;
    }

    let _log_guard = logging::setup_logging(
        logging::level_for_verbosity(cli.verbose),
        config.log_dir.as_deref(),
    )?;

    tracing::debug!(
        "Save directory: {}",
        config.runtime.save_data_dir.display()
    );

    let store = Store::new(config.runtime);

    match cli.command {
        Command::Create(cmd) => cmd.execute(&store),
        Command::Show(cmd) => cmd.execute(&store),
        Command::LevelUp(cmd) => cmd.execute(&store),
        Command::List(cmd) => cmd.execute(&store),
        Command::Demo(cmd) => cmd.execute(&store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["charsheet", "list", "--data-dir", "/tmp/saves", "-vv"])
            .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/saves")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn level_up_rejects_zero_times() {
        assert!(Cli::try_parse_from(["charsheet", "level-up", "aria", "--times", "0"]).is_err());
    }
}
