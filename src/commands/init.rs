//! `slor init` command - create a new store
//!
//! Idempotent: an existing config, catalog and selection are kept.

use crate::cli::paths::resolve_against;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use slor_core::error::Result;
use slor_core::store::Store;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let store = match cli.store.as_ref() {
        Some(path) => Store::init_at(&resolve_against(ctx.root, path))?,
        None => Store::init(ctx.root)?,
    };

    output_by_format_result!(cli.format,
        json => {
            print_json(&serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "catalog_dir": store.catalog_dir().display().to_string(),
                "message": "Store initialized"
            }))
        },
        human => {
            println!("Initialized slor store at {}", store.root().display());
            if !cli.quiet {
                println!();
                println!(
                    "Add SLO files (JSON or YAML) under {}",
                    store.catalog_dir().display()
                );
            }
        },
        records => {
            print_records_header(store.root(), "init", "status=ok");
        }
    )
}
