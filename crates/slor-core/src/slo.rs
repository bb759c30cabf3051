//! SLO record types
//!
//! Records come from the catalog and are read-only to the engine. Only `id`
//! and `document.tags` drive selection and filtering; the remaining document
//! fields are carried for display.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tags::Tag;

/// Opaque SLO identifier, stable across catalog refreshes
pub type SloId = String;

/// A single SLO as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SloRecord {
    pub id: SloId,
    #[serde(default)]
    pub document: SloDocument,
}

impl SloRecord {
    pub fn new(id: impl Into<SloId>, document: SloDocument) -> Self {
        Self {
            id: id.into(),
            document,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, falling back to the id when the document has none
    pub fn name(&self) -> &str {
        self.document.name.as_deref().unwrap_or(&self.id)
    }

    /// Tags on the document; a missing tags attribute reads as no tags
    pub fn tags(&self) -> &[Tag] {
        self.document.tags.as_deref().unwrap_or(&[])
    }
}

/// Document payload written by the SLO definition form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SloDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    /// Indicator kind (`error_budget`, `latency_budget`, `availability`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    /// Target attainment percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Fields the engine does not interpret, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SloDocument {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }
}
