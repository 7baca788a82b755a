//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// A terminal world clock
///
/// Search a catalog of cities, keep a personal list of the ones you care
/// about, and see their local time side by side. The list is saved between
/// runs.
#[derive(Parser)]
#[command(version, about, name = "wclock")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/worldclock/worldclock.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, `list` is run.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current time in every watched city
    #[command(alias = "ls")]
    List,
    /// Search the city catalog by name
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Add a catalog city to your world clock
    #[command(alias = "a")]
    Add(AddArgs),
    /// Remove a city from your world clock
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// Move a city to another position
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Keep the clock on screen, refreshing every second
    #[command(alias = "w")]
    Watch(WatchArgs),
}

#[derive(ClapArgs)]
pub struct SearchArgs {
    /// Case-insensitive part of a city name; omit to list the whole catalog
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(ClapArgs)]
pub struct AddArgs {
    /// Catalog ID of the city (see `wclock search`)
    pub id: String,
}

#[derive(ClapArgs)]
pub struct RemoveArgs {
    /// ID of the watched city to remove
    pub id: String,
}

/// Positions are zero-based, as shown by `wclock list`.
#[derive(ClapArgs)]
pub struct MoveArgs {
    /// Current position of the city
    pub from: usize,
    /// Position the city should end up at
    pub to: usize,
}

#[derive(ClapArgs)]
pub struct WatchArgs {
    /// Stop after this many refreshes instead of waiting for Ctrl-C
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let args = Args::try_parse_from(["wclock", "--no-color"]).unwrap();
        assert!(args.no_color);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_move_parses_positions() {
        let args = Args::try_parse_from(["wclock", "mv", "2", "0"]).unwrap();
        match args.command {
            Some(Commands::Move(MoveArgs { from, to })) => assert_eq!((from, to), (2, 0)),
            _ => panic!("expected move command"),
        }
    }

    #[test]
    fn test_watch_rejects_zero_count() {
        assert!(Args::try_parse_from(["wclock", "watch", "--count", "0"]).is_err());
    }
}
