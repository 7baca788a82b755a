//! World clock CLI application
//!
//! Command-line front end for the world clock: search the catalog, manage the
//! watch list, and display local times.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use worldclock_core::{Catalog, WatchListStoreBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = WatchListStoreBuilder::new()
        .with_database_path(database_file)
        .open()
        .await
        .context("Failed to open watch list")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("World clock started with {} cities", store.len());

    let mut cli = Cli::new(store, Catalog::builtin(), renderer);
    match command {
        None | Some(List) => cli.list(),
        Some(Search(args)) => cli.search(args),
        Some(Add(args)) => cli.add(args).await,
        Some(Remove(args)) => cli.remove(args).await,
        Some(Move(args)) => cli.move_city(args).await,
        Some(Watch(args)) => cli.watch(args).await,
    }
}
