//! Combination controller
//!
//! Drives the selection through its lifecycle:
//!
//! ```text
//! Unmounted --begin_load--> Loading --complete_load--> Ready(Clean)
//! Ready(Clean) --toggle--> Ready(Dirty) --cancel / saved--> Ready(Clean)
//! ```
//!
//! `saving` is orthogonal to Clean/Dirty. Gateway calls are split into a
//! `begin_*` step that hands out a ticket and a `complete_*` step that
//! applies the result, so the caller owns the suspension in between. A
//! ticket from an earlier mount, or one completed after `unmount`, is
//! discarded without touching state.

mod view;

pub use view::CombinationView;

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SlorError};
use crate::gateway::{DocumentKey, PersistenceGateway, SelectionDocument};
use crate::reconcile::{prune, reconcile, Reconciliation};
use crate::selection::{SelectionSet, SelectionState};
use crate::slo::SloRecord;
use crate::tags::{self, Tag};

/// Lifecycle phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Unmounted,
    Loading,
    Ready,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Unmounted => write!(f, "unmounted"),
            Phase::Loading => write!(f, "loading"),
            Phase::Ready => write!(f, "ready"),
        }
    }
}

/// Token for an in-flight load
#[derive(Debug)]
pub struct LoadTicket {
    generation: u64,
    key: DocumentKey,
}

impl LoadTicket {
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }
}

/// Token for an in-flight save, owning the snapshot being written
#[derive(Debug)]
pub struct SaveTicket {
    generation: u64,
    key: DocumentKey,
    snapshot: SelectionSet,
}

impl SaveTicket {
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }

    pub fn snapshot(&self) -> &SelectionSet {
        &self.snapshot
    }

    /// Document to hand to the gateway
    pub fn document(&self) -> SelectionDocument {
        SelectionDocument::new(self.snapshot.clone())
    }
}

/// Result of completing an asynchronous step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<T> {
    Applied(T),
    /// Stale response; nothing was changed
    Discarded,
}

/// What a completed load did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Set when the gateway failed and the selection fell back to empty
    pub degraded: Option<String>,
    /// Pruning applied against the catalog known at completion
    pub reconciliation: Option<Reconciliation>,
}

/// What a completed save did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Nothing was committed; the selection stays dirty for a retry
    Failed { reason: String },
}

/// Owns the selection state, the catalog view and the tag filter
#[derive(Debug)]
pub struct CombinationController {
    key: DocumentKey,
    phase: Phase,
    generation: u64,
    selection: SelectionState,
    catalog: Option<Vec<SloRecord>>,
    tag_filter: Vec<Tag>,
    saving: bool,
}

impl CombinationController {
    pub fn new(key: DocumentKey) -> Self {
        Self {
            key,
            phase: Phase::Unmounted,
            generation: 0,
            selection: SelectionState::new(),
            catalog: None,
            tag_filter: Vec::new(),
            saving: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_dirty(&self) -> bool {
        self.is_ready() && self.selection.is_dirty()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn pending(&self) -> &SelectionSet {
        self.selection.pending()
    }

    pub fn aggregated(&self) -> &SelectionSet {
        self.selection.aggregated()
    }

    pub fn tag_filter(&self) -> &[Tag] {
        &self.tag_filter
    }

    pub fn catalog(&self) -> &[SloRecord] {
        self.catalog.as_deref().unwrap_or(&[])
    }

    /// Phase label used in transition errors
    fn state_label(&self) -> String {
        match self.phase {
            Phase::Ready if self.saving => "saving".to_string(),
            Phase::Ready if self.selection.is_dirty() => "dirty".to_string(),
            Phase::Ready => "clean".to_string(),
            other => other.to_string(),
        }
    }

    fn require_ready(&self, operation: &'static str) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(SlorError::InvalidTransition {
                operation,
                phase: self.state_label(),
            })
        }
    }

    fn require_dirty(&self, operation: &'static str) -> Result<()> {
        self.require_ready(operation)?;
        if self.selection.is_dirty() {
            Ok(())
        } else {
            Err(SlorError::InvalidTransition {
                operation,
                phase: self.state_label(),
            })
        }
    }

    /// Enter `Loading` and hand out the ticket for the gateway read.
    ///
    /// Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.saving = false;
        self.selection = SelectionState::new();
        tracing::debug!(generation = self.generation, "load_started");

        LoadTicket {
            generation: self.generation,
            key: self.key.clone(),
        }
    }

    /// Apply the gateway read and enter `Ready`.
    ///
    /// A failed read is swallowed: the selection starts empty and the
    /// failure is only logged. The result is reconciled against the catalog
    /// when one is known.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Option<SelectionDocument>>,
    ) -> Completion<LoadReport> {
        if ticket.generation != self.generation || self.phase != Phase::Loading {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale load"
            );
            return Completion::Discarded;
        }

        let mut report = LoadReport::default();
        let persisted = match result {
            Ok(doc) => doc.map(|d| d.selected_ids).unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load selection, starting empty");
                report.degraded = Some(e.to_string());
                SelectionSet::new()
            }
        };

        self.selection = SelectionState::from_persisted(persisted);
        self.phase = Phase::Ready;

        if let Some(catalog) = &self.catalog {
            report.reconciliation = Some(reconcile(&mut self.selection, catalog));
        }

        tracing::debug!(
            selected = self.selection.aggregated().len(),
            "load_completed"
        );
        Completion::Applied(report)
    }

    /// Load through `gateway` in one step
    pub fn mount<G: PersistenceGateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Completion<LoadReport> {
        let ticket = self.begin_load();
        let result = gateway.load(ticket.key());
        self.complete_load(ticket, result)
    }

    /// Replace the catalog.
    ///
    /// When the new catalog differs by value and the controller is `Ready`,
    /// selections are reconciled before this returns. During `Loading` the
    /// pass is deferred to `complete_load`.
    pub fn set_catalog(&mut self, catalog: Vec<SloRecord>) -> Option<Reconciliation> {
        if self.catalog.as_ref() == Some(&catalog) {
            return None;
        }

        tracing::debug!(records = catalog.len(), "catalog_changed");
        let catalog = self.catalog.insert(catalog);

        if self.phase == Phase::Ready {
            Some(reconcile(&mut self.selection, catalog))
        } else {
            None
        }
    }

    pub fn toggle(&mut self, id: &str) -> Result<()> {
        self.require_ready("toggle")?;
        self.selection.toggle(id);
        tracing::debug!(id, dirty = self.selection.is_dirty(), "toggled");
        Ok(())
    }

    /// Drop unsaved edits
    pub fn cancel(&mut self) -> Result<()> {
        self.require_dirty("cancel")?;
        self.selection.revert();
        Ok(())
    }

    /// Set `saving` and snapshot the pending selection for the gateway write
    pub fn begin_save(&mut self) -> Result<SaveTicket> {
        self.require_dirty("save")?;
        if self.saving {
            return Err(SlorError::InvalidTransition {
                operation: "save",
                phase: self.state_label(),
            });
        }

        self.saving = true;
        Ok(SaveTicket {
            generation: self.generation,
            key: self.key.clone(),
            snapshot: self.selection.pending().clone(),
        })
    }

    /// Apply the gateway write and clear `saving`.
    ///
    /// Success commits the ticket's snapshot, not the current pending
    /// selection, so toggles made meanwhile stay dirty for the next save.
    pub fn complete_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<()>,
    ) -> Completion<SaveOutcome> {
        if ticket.generation != self.generation || self.phase != Phase::Ready {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale save"
            );
            return Completion::Discarded;
        }

        self.saving = false;

        match result {
            Ok(()) => {
                // The catalog may have moved on while the write was in flight
                let committed = match &self.catalog {
                    Some(catalog) => prune(&ticket.snapshot, catalog).kept,
                    None => ticket.snapshot,
                };
                self.selection.commit_snapshot(committed);
                tracing::debug!(
                    selected = self.selection.aggregated().len(),
                    dirty = self.selection.is_dirty(),
                    "save_completed"
                );
                Completion::Applied(SaveOutcome::Saved)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save selection");
                Completion::Applied(SaveOutcome::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Save through `gateway` in one step
    pub fn save<G: PersistenceGateway + ?Sized>(
        &mut self,
        gateway: &mut G,
    ) -> Result<Completion<SaveOutcome>> {
        let ticket = self.begin_save()?;
        let result = gateway.save(ticket.key(), &ticket.document());
        Ok(self.complete_save(ticket, result))
    }

    /// Replace the active tag filter; selections are untouched
    pub fn set_tag_filter(&mut self, tags: Vec<Tag>) -> Result<()> {
        self.require_ready("filter by tag")?;
        let mut filter: Vec<Tag> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !filter.contains(&tag) {
                filter.push(tag);
            }
        }
        self.tag_filter = filter;
        Ok(())
    }

    /// Tear down; in-flight tickets become stale
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.phase = Phase::Unmounted;
        self.selection = SelectionState::new();
        self.tag_filter.clear();
        self.saving = false;
    }

    /// Catalog entries to list under the current tag filter
    pub fn display_list(&self) -> Vec<&SloRecord> {
        tags::display(self.catalog(), &self.tag_filter)
    }

    /// Catalog entries in the committed selection, in catalog order.
    ///
    /// Pending toggles never show up here until saved.
    pub fn combined(&self) -> Vec<&SloRecord> {
        let aggregated = self.selection.aggregated();
        self.catalog()
            .iter()
            .filter(|slo| aggregated.contains(&slo.id))
            .collect()
    }

    pub fn unique_tags(&self) -> Vec<Tag> {
        tags::unique_tags(self.catalog())
    }

    /// Everything the rendering side needs in one value
    pub fn view(&self) -> CombinationView<'_> {
        CombinationView {
            phase: self.phase,
            display_list: self.display_list(),
            selected_ids: self.selection.pending(),
            aggregated_ids: self.selection.aggregated(),
            dirty: self.is_dirty(),
            saving: self.saving,
            unique_tags: self.unique_tags(),
            tag_filter: &self.tag_filter,
            combined: self.combined(),
        }
    }
}
