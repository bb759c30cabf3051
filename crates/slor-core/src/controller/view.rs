use serde::Serialize;

use super::Phase;
use crate::selection::SelectionSet;
use crate::slo::SloRecord;
use crate::tags::Tag;

/// Snapshot handed to the rendering side
#[derive(Debug, Serialize)]
pub struct CombinationView<'a> {
    pub phase: Phase,
    /// Catalog after the tag filter
    pub display_list: Vec<&'a SloRecord>,
    /// Pending selection, drives the checkboxes
    pub selected_ids: &'a SelectionSet,
    /// Committed selection
    pub aggregated_ids: &'a SelectionSet,
    /// Save/cancel controls are shown while true
    pub dirty: bool,
    pub saving: bool,
    pub unique_tags: Vec<Tag>,
    pub tag_filter: &'a [Tag],
    /// SLOs in the committed selection
    pub combined: Vec<&'a SloRecord>,
}

impl CombinationView<'_> {
    pub fn is_selected(&self, slo: &SloRecord) -> bool {
        self.selected_ids.contains(&slo.id)
    }

    pub fn is_combined(&self, slo: &SloRecord) -> bool {
        self.aggregated_ids.contains(&slo.id)
    }
}
