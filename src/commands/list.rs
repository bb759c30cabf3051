//! `slor list` command - the catalog under the tag filter
//!
//! - `--tag key=value` may repeat; an SLO must carry every tag given
//! - SLOs in the saved selection are marked

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    output_by_format_result, print_json, print_records_header, slo_human_line, slo_json,
};
use slor_core::error::Result;
use slor_core::records::slo_line;
use slor_core::tags::Tag;

/// Execute the list command
pub fn execute(ctx: &CommandContext, tag_args: &[String]) -> Result<()> {
    let cli = ctx.cli;
    let tags = tag_args
        .iter()
        .map(|raw| Tag::parse(raw))
        .collect::<Result<Vec<_>>>()?;

    let (store, mut controller) = ctx.mount()?;
    controller.set_tag_filter(tags)?;
    let view = controller.view();

    output_by_format_result!(cli.format,
        json => {
            let output: Vec<_> = view
                .display_list
                .iter()
                .map(|slo| slo_json(slo, view.is_combined(slo)))
                .collect();
            print_json(&output)
        },
        human => {
            if view.display_list.is_empty() {
                if !cli.quiet {
                    println!("No SLOs found");
                }
            } else {
                for slo in &view.display_list {
                    println!("{}", slo_human_line(slo, view.is_combined(slo)));
                }
            }
        },
        records => {
            print_records_header(
                store.root(),
                "list",
                &format!("slos={}", view.display_list.len()),
            );
            for slo in &view.display_list {
                println!("{}", slo_line(slo, view.is_combined(slo)));
            }
        }
    )
}
