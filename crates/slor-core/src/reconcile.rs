//! Pruning of selections that point at SLOs gone from the catalog

use std::collections::HashSet;

use serde::Serialize;

use crate::selection::{SelectionSet, SelectionState};
use crate::slo::{SloId, SloRecord};

/// Outcome of one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Selection both sides were reset to
    pub kept: SelectionSet,
    /// Ids dropped because the catalog no longer lists them
    pub pruned: Vec<SloId>,
}

impl Reconciliation {
    pub fn changed(&self) -> bool {
        !self.pruned.is_empty()
    }
}

/// Ids from `selection` that still exist in `catalog`, plus those that don't
pub fn prune(selection: &SelectionSet, catalog: &[SloRecord]) -> Reconciliation {
    let live: HashSet<&str> = catalog.iter().map(|slo| slo.id.as_str()).collect();

    let kept = selection.retained(|id| live.contains(id));
    let pruned = selection
        .iter()
        .filter(|id| !live.contains(id.as_str()))
        .cloned()
        .collect();

    Reconciliation { kept, pruned }
}

/// Reset both sides of `state` to the pending ids still present in `catalog`.
///
/// Unsaved edits are discarded even when nothing is pruned, so the state is
/// clean afterwards.
pub fn reconcile(state: &mut SelectionState, catalog: &[SloRecord]) -> Reconciliation {
    let report = prune(state.pending(), catalog);
    state.reset(report.kept.clone());

    if report.changed() {
        tracing::info!(
            pruned = ?report.pruned,
            kept = report.kept.len(),
            "pruned selections missing from catalog"
        );
    }

    report
}
