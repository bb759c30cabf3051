//! Shared output helpers for commands

pub use crate::output_by_format_result;

use slor_core::error::Result;
use slor_core::slo::SloRecord;

/// Pretty-print a serializable value to stdout
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Records header line shared by every command
pub fn print_records_header(store_root: &std::path::Path, mode: &str, extra: &str) {
    if extra.is_empty() {
        println!(
            "H slor=1 records=1 store={} mode={}",
            store_root.display(),
            mode
        );
    } else {
        println!(
            "H slor=1 records=1 store={} mode={} {}",
            store_root.display(),
            mode,
            extra
        );
    }
}

/// JSON object for one SLO as listed by the CLI
pub fn slo_json(slo: &SloRecord, selected: bool) -> serde_json::Value {
    serde_json::json!({
        "id": slo.id(),
        "name": slo.name(),
        "indicator": slo.document.indicator,
        "target": slo.document.target,
        "tags": slo.tags().iter().map(|t| t.to_string()).collect::<Vec<_>>(),
        "selected": selected,
    })
}

/// Human line for one SLO: marker, id, name and tags
pub fn slo_human_line(slo: &SloRecord, selected: bool) -> String {
    let marker = if selected { "[x]" } else { "[ ]" };
    let tags = slo.tags();
    if tags.is_empty() {
        format!("{} {} {}", marker, slo.id(), slo.name())
    } else {
        let tags: Vec<_> = tags.iter().map(|t| t.to_string()).collect();
        format!(
            "{} {} {} ({})",
            marker,
            slo.id(),
            slo.name(),
            tags.join(", ")
        )
    }
}
