//! High-level, ergonomic library API: process an expression file to a report
//! file, process in-memory text to entries, and per-line helpers. Prefer
//! these entrypoints over the low-level core/io modules when embedding
//! ROMANCALC in another application.
use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::eval::Expression;
use crate::core::params::ReportOptions;
use crate::core::words::integer_to_words;
use crate::error::Result;
use crate::io::reader::ExpressionReader;
use crate::io::writers::report::ReportWriter;
use crate::io::writers::sidecar::write_summary_sidecar;
use crate::types::{MalformedPolicy, ReportEntry};

/// Processing report counters
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportSummary {
    /// Report blocks written
    pub entries: usize,
    /// Empty input lines skipped
    pub skipped: usize,
    /// Lines that evaluated permissively rather than parsing cleanly
    pub malformed: usize,
}

/// Result of in-memory processing
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

/// Evaluate one line into its report entry.
pub fn entry_for_line(line: &str) -> ReportEntry {
    let value = Expression::parse(line).evaluate();
    ReportEntry {
        expression: line.to_string(),
        value,
        words: integer_to_words(value),
    }
}

fn classify_line(line: &str, options: &ReportOptions, summary: &mut ReportSummary) {
    if Expression::parse(line).is_well_formed() {
        return;
    }
    summary.malformed += 1;
    if options.on_malformed == MalformedPolicy::Warn {
        warn!("Line does not parse cleanly, evaluating permissively: {:?}", line);
    }
}

/// Process expression text to in-memory entries (no disk I/O)
pub fn process_text(text: &str, options: &ReportOptions) -> Report {
    let mut report = Report::default();

    for line in text.lines() {
        if line.is_empty() {
            report.summary.skipped += 1;
            continue;
        }
        classify_line(line, options, &mut report.summary);
        report.entries.push(entry_for_line(line));
        report.summary.entries += 1;
    }

    report
}

/// Process an expression file into a formatted report file.
///
/// The input is opened before the output is created, so a missing input
/// never leaves a report file behind. Each non-empty line yields exactly
/// one report block; empty lines are skipped and counted.
pub fn process_file_to_path(
    input: &Path,
    output: &Path,
    options: &ReportOptions,
) -> Result<ReportSummary> {
    let mut reader = ExpressionReader::open(input, options.max_line_len)?;
    let mut writer = ReportWriter::create(output)?;

    let mut summary = ReportSummary::default();
    let mut sidecar_entries: Vec<ReportEntry> = Vec::new();

    while let Some(line) = reader.next_line() {
        let line = line?;
        if line.is_empty() {
            summary.skipped += 1;
            continue;
        }

        classify_line(&line, options, &mut summary);
        let entry = entry_for_line(&line);
        debug!("{} = {}", entry.expression, entry.value);
        writer.write_entry(&entry)?;
        summary.entries += 1;

        if options.sidecar {
            sidecar_entries.push(entry);
        }
    }

    writer.finish()?;

    if options.sidecar {
        write_summary_sidecar(output, &sidecar_entries, summary)?;
    }

    info!(
        "Processed {} lines: {} entries, {} skipped, {} malformed",
        reader.lines_read(),
        summary.entries,
        summary.skipped,
        summary.malformed
    );

    Ok(summary)
}
