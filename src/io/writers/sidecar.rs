//! Optional JSON summary sidecar written next to the report file.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::ReportSummary;
use crate::error::Result;
use crate::types::ReportEntry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidecarSummary {
    pub entries: usize,
    pub skipped: usize,
    pub malformed: usize,
    pub report: Vec<ReportEntry>,
}

/// Sidecar path for a given report path: `output.txt` -> `output.txt.json`.
fn sidecar_path(report: &Path) -> PathBuf {
    let mut name = report.as_os_str().to_os_string();
    name.push(".json");
    PathBuf::from(name)
}

/// Serialize the entries and summary counts as pretty JSON beside `report`.
pub fn write_summary_sidecar(
    report: &Path,
    entries: &[ReportEntry],
    summary: ReportSummary,
) -> Result<PathBuf> {
    let path = sidecar_path(report);
    let payload = SidecarSummary {
        entries: summary.entries,
        skipped: summary.skipped,
        malformed: summary.malformed,
        report: entries.to_vec(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&path, json)?;
    info!("Wrote summary sidecar: {:?}", path);
    Ok(path)
}
