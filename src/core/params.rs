use serde::{Deserialize, Serialize};

use crate::types::MalformedPolicy;

/// Report options suitable for config files and CLI presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    pub on_malformed: MalformedPolicy,
    /// Maximum accepted input line length in bytes; longer lines abort
    /// processing instead of growing the read buffer without bound
    pub max_line_len: usize,
    /// If true, write a JSON summary sidecar next to the report
    pub sidecar: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            on_malformed: MalformedPolicy::Warn,
            max_line_len: 64 * 1024,
            sidecar: false,
        }
    }
}
