//! Pending vs. aggregated SLO selection
//!
//! The pending selection is what the user is editing; the aggregated one is
//! what was last persisted. Both are owned [`SelectionSet`] values that are
//! replaced wholesale, never edited through a shared handle.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::slo::SloId;

/// Ordered, duplicate-free list of SLO ids.
///
/// Order follows selection order for display. Equality for dirty tracking
/// goes through [`SelectionSet::same_members`], which ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SloId>", into = "Vec<SloId>")]
pub struct SelectionSet {
    ids: Vec<SloId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[SloId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &SloId> {
        self.ids.iter()
    }

    /// New set with `id` removed if present, appended otherwise
    pub fn toggled(&self, id: &str) -> SelectionSet {
        let ids = if self.contains(id) {
            self.ids.iter().filter(|i| *i != id).cloned().collect()
        } else {
            let mut ids = self.ids.clone();
            ids.push(id.to_string());
            ids
        };
        SelectionSet { ids }
    }

    /// New set keeping only ids accepted by `keep`, order preserved
    pub fn retained(&self, mut keep: impl FnMut(&str) -> bool) -> SelectionSet {
        SelectionSet {
            ids: self.ids.iter().filter(|id| keep(id.as_str())).cloned().collect(),
        }
    }

    /// Ids in sorted order, the canonical form for comparison
    pub fn sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Order-insensitive value comparison
    pub fn same_members(&self, other: &SelectionSet) -> bool {
        self.sorted() == other.sorted()
    }
}

impl<S: Into<SloId>> FromIterator<S> for SelectionSet {
    /// Collect ids, dropping repeats after the first occurrence
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let ids = iter
            .into_iter()
            .map(Into::into)
            .filter(|id: &SloId| seen.insert(id.clone()))
            .collect();
        SelectionSet { ids }
    }
}

/// Persisted lists go through the same de-duplication as collected ones
impl From<Vec<SloId>> for SelectionSet {
    fn from(ids: Vec<SloId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<SloId> {
    fn from(set: SelectionSet) -> Self {
        set.ids
    }
}

/// Working selection alongside the last persisted one
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pending: SelectionSet,
    aggregated: SelectionSet,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both sides seeded from the same persisted set
    pub fn from_persisted(persisted: SelectionSet) -> Self {
        Self {
            pending: persisted.clone(),
            aggregated: persisted,
        }
    }

    pub fn pending(&self) -> &SelectionSet {
        &self.pending
    }

    pub fn aggregated(&self) -> &SelectionSet {
        &self.aggregated
    }

    /// Flip membership of `id` in the pending selection.
    ///
    /// Ids unknown to the catalog are accepted; catalog membership is
    /// enforced by reconciliation, not here.
    pub fn toggle(&mut self, id: &str) {
        self.pending = self.pending.toggled(id);
    }

    pub fn is_dirty(&self) -> bool {
        !self.pending.same_members(&self.aggregated)
    }

    /// Aggregated := snapshot of pending
    pub fn commit(&mut self) {
        self.aggregated = self.pending.clone();
    }

    /// Aggregated := a snapshot taken earlier, e.g. the one a save carried
    pub fn commit_snapshot(&mut self, snapshot: SelectionSet) {
        self.aggregated = snapshot;
    }

    /// Pending := snapshot of aggregated
    pub fn revert(&mut self) {
        self.pending = self.aggregated.clone();
    }

    /// Replace both sides, discarding any unsaved edits
    pub fn reset(&mut self, selection: SelectionSet) {
        self.pending = selection.clone();
        self.aggregated = selection;
    }
}
