//! Utilities for records output format
//!
//! Each line starts with a one-letter kind:
//! - `H` header
//! - `S` an SLO
//! - `T` a tag
//! - `C` an id in the combined selection

use crate::slo::SloRecord;
use crate::tags::Tag;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Comma-separated `key=value` list, `-` when empty
pub fn tags_csv(tags: &[Tag]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.iter()
            .map(Tag::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// `S` line for one SLO
pub fn slo_line(slo: &SloRecord, selected: bool) -> String {
    format!(
        "S {} \"{}\" indicator={} tags={} selected={}",
        slo.id,
        escape_quotes(slo.name()),
        slo.document.indicator.as_deref().unwrap_or("-"),
        tags_csv(slo.tags()),
        if selected { "yes" } else { "no" }
    )
}
