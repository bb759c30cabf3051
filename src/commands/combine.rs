//! `slor combine` commands - show and edit the combined selection
//!
//! Edits go through the controller: ids are toggled in order and the
//! pending selection is saved only when it differs from the saved one.

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{
    output_by_format_result, print_json, print_records_header, slo_human_line, slo_json,
};
use slor_core::controller::{CombinationController, Completion, LoadReport, SaveOutcome};
use slor_core::error::{Result, SlorError};
use slor_core::reconcile::Reconciliation;
use slor_core::records::slo_line;
use slor_core::store::Store;

/// What an edit ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum EditStatus {
    Saved,
    Unchanged,
    DryRun,
}

impl EditStatus {
    fn as_str(self) -> &'static str {
        match self {
            EditStatus::Saved => "saved",
            EditStatus::Unchanged => "unchanged",
            EditStatus::DryRun => "dry_run",
        }
    }
}

/// `slor combine show`
pub fn show(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let (store, controller) = ctx.mount()?;
    let combined = controller.combined();
    let saved_at = store
        .storage()
        .last_saved(&store.document_key())?
        .map(|at| at.to_rfc3339());

    output_by_format_result!(cli.format,
        json => {
            let slos: Vec<_> = combined.iter().map(|slo| slo_json(slo, true)).collect();
            print_json(&serde_json::json!({
                "selected_ids": controller.aggregated(),
                "saved_at": saved_at,
                "combined": slos,
            }))
        },
        human => {
            if combined.is_empty() {
                if !cli.quiet {
                    println!("No SLOs combined");
                }
            } else {
                if !cli.quiet {
                    println!("Combined SLOs ({}):", combined.len());
                }
                for slo in &combined {
                    println!("{}", slo_human_line(slo, true));
                }
            }
            if let (Some(at), false) = (&saved_at, cli.quiet) {
                println!("Last saved: {}", at);
            }
        },
        records => {
            print_records_header(
                store.root(),
                "combine.show",
                &format!("slos={}", combined.len()),
            );
            for slo in &combined {
                println!("{}", slo_line(slo, true));
            }
        }
    )
}

/// `slor combine toggle <id>...`
///
/// Every id must exist in the catalog before anything is toggled.
pub fn toggle(ctx: &CommandContext, ids: &[String], dry_run: bool) -> Result<()> {
    let (mut store, mut controller, report) = ctx.mount_with_report()?;

    if let Some(unknown) = ids
        .iter()
        .find(|id| !controller.catalog().iter().any(|slo| &slo.id == *id))
    {
        return Err(SlorError::not_found("SLO", unknown));
    }

    for id in ids {
        controller.toggle(id)?;
    }

    let status = finish_edit(&mut store, &mut controller, &report, dry_run)?;
    output_edit(ctx.cli, &store, &controller, "combine.toggle", status)
}

/// `slor combine clear`
///
/// Ids already pruned from the catalog are removed from storage too, even
/// when nothing else was selected.
pub fn clear(ctx: &CommandContext) -> Result<()> {
    let (mut store, mut controller, report) = ctx.mount_with_report()?;

    let selected: Vec<String> = controller.pending().iter().cloned().collect();
    for id in &selected {
        controller.toggle(id)?;
    }

    let status = finish_edit(&mut store, &mut controller, &report, false)?;
    output_edit(ctx.cli, &store, &controller, "combine.clear", status)
}

/// Save the pending selection when it is dirty.
///
/// A clean selection is still written back when mounting pruned ids, so
/// storage stops listing SLOs that left the catalog. A failed save leaves
/// the controller dirty and surfaces as a retryable failure.
fn finish_edit(
    store: &mut Store,
    controller: &mut CombinationController,
    report: &LoadReport,
    dry_run: bool,
) -> Result<EditStatus> {
    if dry_run {
        return Ok(if controller.is_dirty() {
            EditStatus::DryRun
        } else {
            EditStatus::Unchanged
        });
    }

    if !controller.is_dirty() {
        let pruned = report
            .reconciliation
            .as_ref()
            .is_some_and(Reconciliation::changed);
        if !pruned {
            return Ok(EditStatus::Unchanged);
        }
        store.write_back(controller).map_err(|e| SlorError::FailedOperation {
            operation: "save selection".to_string(),
            reason: e.to_string(),
        })?;
        return Ok(EditStatus::Saved);
    }

    save_status(controller.save(store.storage_mut())?)
}

/// Map a completed save onto the command result
fn save_status(completion: Completion<SaveOutcome>) -> Result<EditStatus> {
    match completion {
        Completion::Applied(SaveOutcome::Saved) => Ok(EditStatus::Saved),
        Completion::Applied(SaveOutcome::Failed { reason }) => Err(SlorError::FailedOperation {
            operation: "save selection".to_string(),
            reason,
        }),
        Completion::Discarded => Err(SlorError::FailedOperation {
            operation: "save selection".to_string(),
            reason: "save was superseded".to_string(),
        }),
    }
}

fn output_edit(
    cli: &Cli,
    store: &Store,
    controller: &CombinationController,
    mode: &str,
    status: EditStatus,
) -> Result<()> {
    let selected = controller.pending();

    output_by_format_result!(cli.format,
        json => {
            print_json(&serde_json::json!({
                "status": status,
                "selected_ids": selected,
                "dirty": controller.is_dirty(),
            }))
        },
        human => {
            if !cli.quiet {
                match status {
                    EditStatus::Saved => println!("Saved {} combined SLO(s)", selected.len()),
                    EditStatus::Unchanged => println!("Selection unchanged"),
                    EditStatus::DryRun => {
                        println!("Dry run: {} SLO(s) would be combined", selected.len())
                    }
                }
            }
            for id in selected.iter() {
                println!("{}", id);
            }
        },
        records => {
            print_records_header(
                store.root(),
                mode,
                &format!("status={} selected={}", status.as_str(), selected.len()),
            );
            for id in selected.iter() {
                println!("C {}", id);
            }
        }
    )
}
