//! Command handlers for the world clock CLI.
//!
//! Each handler forwards one user intent to the core and renders what came
//! back:
//!
//! ```text
//! CLI Args (clap) → Cli handler → WatchListStore / Catalog → markdown → Renderer
//! ```
//!
//! Mutating handlers flush the store before returning so the process can
//! exit without losing the write.

use std::time::Duration;

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::debug;
use worldclock_core::{
    clock_rows, Catalog, City, ClockBoard, Notice, RemoveOutcome, ReorderOutcome,
    SearchHit, SearchResults, WatchListStore,
};

use crate::{
    args::{AddArgs, MoveArgs, RemoveArgs, SearchArgs, WatchArgs},
    renderer::TerminalRenderer,
};

/// Interval between redraws in `watch` mode.
const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

pub struct Cli {
    store: WatchListStore,
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: WatchListStore, catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self {
            store,
            catalog,
            renderer,
        }
    }

    /// Prints every watched city with its current local time.
    pub fn list(&self) -> Result<()> {
        self.render_board(&self.store.list(), Timestamp::now())
    }

    /// Prints catalog cities whose name contains the query.
    pub fn search(&self, args: SearchArgs) -> Result<()> {
        let results = SearchResults(
            self.catalog
                .search(&args.query)
                .into_iter()
                .map(|entry| SearchHit {
                    entry,
                    watched: self.store.contains(entry.id()),
                })
                .collect(),
        );
        debug!("Search {:?} matched {} cities", args.query, results.len());

        self.renderer.render(&format!("# Cities\n\n{results}"))
    }

    pub async fn add(&mut self, args: AddArgs) -> Result<()> {
        let city: City = self
            .catalog
            .require(&args.id)
            .context("Cannot add city")?
            .into();

        let outcome = self.store.add(city);
        self.store.flush().await;

        match Notice::for_add(&outcome) {
            Some(notice) => self.renderer.render(&notice.to_string()),
            None => {
                debug!("Add produced no notice: {outcome:?}");
                Ok(())
            }
        }
    }

    pub async fn remove(&mut self, args: RemoveArgs) -> Result<()> {
        let outcome = self.store.remove(&args.id);
        self.store.flush().await;

        match (&outcome, Notice::for_remove(&outcome)) {
            (_, Some(notice)) => self.renderer.render(&notice.to_string()),
            (RemoveOutcome::NotFound, None) => self.renderer.render(&format!(
                "City {} is not in your world clock.\n",
                args.id
            )),
            (_, None) => Ok(()),
        }
    }

    pub async fn move_city(&mut self, args: MoveArgs) -> Result<()> {
        let outcome = self.store.reorder(args.from, args.to);
        self.store.flush().await;

        match outcome {
            ReorderOutcome::Reordered => {
                self.renderer.render(&format!(
                    "Moved city from position {} to {}.\n\n",
                    args.from, args.to
                ))?;
                self.list()
            }
            ReorderOutcome::Rejected | ReorderOutcome::Queued => {
                self.renderer.render("Nothing to move.\n")
            }
        }
    }

    /// Redraws the clock every second until Ctrl-C or `--count` redraws.
    pub async fn watch(&self, args: WatchArgs) -> Result<()> {
        let changes = self.store.subscribe();
        let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
        let mut remaining = args.count;

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let cities = changes.borrow().clone();
                    self.renderer.clear()?;
                    self.render_board(&cities, Timestamp::now())?;

                    if let Some(left) = remaining.as_mut() {
                        *left -= 1;
                        if *left == 0 {
                            break;
                        }
                    }
                }
                result = &mut shutdown => {
                    result.context("Failed to listen for Ctrl-C")?;
                    debug!("Watch interrupted");
                    break;
                }
            }
        }
        Ok(())
    }

    fn render_board(&self, cities: &[City], now: Timestamp) -> Result<()> {
        let board = ClockBoard(clock_rows(cities, now));
        self.renderer.render(&format!("# World Clock\n\n{board}"))
    }
}
