//! `slor tags` command - distinct tags across the catalog

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_json, print_records_header};
use slor_core::error::Result;

/// Execute the tags command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let (store, controller) = ctx.mount()?;
    let tags = controller.unique_tags();

    output_by_format_result!(cli.format,
        json => {
            let output: Vec<_> = tags
                .iter()
                .map(|tag| {
                    serde_json::json!({
                        "key": tag.key,
                        "value": tag.first_value(),
                    })
                })
                .collect();
            print_json(&output)
        },
        human => {
            if tags.is_empty() {
                if !cli.quiet {
                    println!("No tags found");
                }
            } else {
                for tag in &tags {
                    println!("{}", tag);
                }
            }
        },
        records => {
            print_records_header(store.root(), "tags", &format!("tags={}", tags.len()));
            for tag in &tags {
                println!("T {}", tag);
            }
        }
    )
}
