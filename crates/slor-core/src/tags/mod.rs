//! Tag identity and tag-intersection filtering
//!
//! A tag carries a key and an ordered list of values, but only the first
//! value takes part in identity: `env=[prod, eu]` and `env=[prod]` are the
//! same tag for de-duplication and filtering.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::bail_usage;
use crate::error::Result;
use crate::slo::SloRecord;

/// Key/values attribute attached to an SLO document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: vec![value.into()],
        }
    }

    /// The only value that takes part in tag identity
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Parse `key=value` as typed on the command line.
    ///
    /// Splits at the first `=`, so values may themselves contain `=`.
    pub fn parse(input: &str) -> Result<Self> {
        let Some((key, value)) = input.split_once('=') else {
            bail_usage!(format!("invalid tag '{}': expected key=value", input));
        };
        let key = key.trim();
        if key.is_empty() {
            bail_usage!(format!("invalid tag '{}': key is empty", input));
        }
        Ok(Tag::new(key, value.trim()))
    }

    fn identity(&self) -> (&str, Option<&str>) {
        (self.key.as_str(), self.first_value())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.first_value().unwrap_or(""))
    }
}

/// Distinct tags across the catalog, in first-seen order.
///
/// Feeds the tag picker; SLOs without a tags attribute contribute nothing.
pub fn unique_tags(catalog: &[SloRecord]) -> Vec<Tag> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for tag in catalog.iter().flat_map(|slo| slo.tags()) {
        if seen.insert(tag) {
            tags.push(tag.clone());
        }
    }

    tags
}

/// Matcher for a set of selected tags (AND semantics)
#[derive(Debug, Clone, Copy)]
pub struct TagFilter<'a> {
    selected: &'a [Tag],
}

impl<'a> TagFilter<'a> {
    pub fn new(selected: &'a [Tag]) -> Self {
        Self { selected }
    }

    /// No tags selected; every SLO matches vacuously
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check that every selected tag appears among the SLO's tags
    pub fn matches(&self, slo: &SloRecord) -> bool {
        let slo_tags = slo.tags();
        self.selected
            .iter()
            .all(|wanted| slo_tags.iter().any(|tag| tag == wanted))
    }
}

/// Catalog entries whose tags are a superset of `selected`, in catalog order.
///
/// Always strict intersection. An SLO without tags has an empty tag set and
/// so drops out of any non-empty selection.
pub fn filter<'c>(catalog: &'c [SloRecord], selected: &[Tag]) -> Vec<&'c SloRecord> {
    let matcher = TagFilter::new(selected);
    catalog.iter().filter(|slo| matcher.matches(slo)).collect()
}

/// What the list should show: everything when no tag is selected, the
/// filtered subsequence otherwise.
pub fn display<'c>(catalog: &'c [SloRecord], selected: &[Tag]) -> Vec<&'c SloRecord> {
    if selected.is_empty() {
        catalog.iter().collect()
    } else {
        filter(catalog, selected)
    }
}
