//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use slor_core::controller::{CombinationController, LoadReport};
use slor_core::error::Result;
use slor_core::store::Store;

use super::trace_command;

/// Discover or open a store based on CLI configuration
pub fn discover_or_open_store(cli: &Cli, root: &Path) -> Result<Store> {
    match &cli.store {
        Some(path) => Store::open(&resolve_against(root, path)),
        None => Store::discover(root),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_store(&self) -> Result<Store> {
        let store = discover_or_open_store(self.cli, self.root)?;
        trace_command!(self.cli, self.start, "discover_store");
        Ok(store)
    }

    /// Open the store, read the catalog and load the persisted selection
    pub fn mount(&self) -> Result<(Store, CombinationController)> {
        let (store, controller, _) = self.mount_with_report()?;
        Ok((store, controller))
    }

    /// [`Self::mount`], also returning what the load did
    pub fn mount_with_report(&self) -> Result<(Store, CombinationController, LoadReport)> {
        let store = self.discover_or_open_store()?;
        let catalog_override = self
            .cli
            .catalog
            .as_deref()
            .map(|path| resolve_against(self.root, path));
        let catalog = store.load_catalog(catalog_override.as_deref())?;
        trace_command!(self.cli, self.start, "load_catalog");

        let (controller, report) = store.mount_controller(catalog);
        trace_command!(self.cli, self.start, "mount_controller");
        Ok((store, controller, report))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("slor {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Select, combine and tag-filter SLOs.");
        println!();
        println!("Run `slor --help` for usage information.");
        Ok(())
    }
}
