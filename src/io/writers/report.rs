//! Formatted report writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::ReportEntry;

/// Writes one four-line block per entry:
///
/// ```text
/// Expression: <original line>
/// Decimal Result: <integer>
/// Word Form: <words>
/// <blank line>
/// ```
pub struct ReportWriter {
    inner: BufWriter<File>,
}

impl ReportWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::CreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }

    pub fn write_entry(&mut self, entry: &ReportEntry) -> Result<()> {
        writeln!(self.inner, "Expression: {}", entry.expression)?;
        writeln!(self.inner, "Decimal Result: {}", entry.value)?;
        writeln!(self.inner, "Word Form: {}", entry.words)?;
        writeln!(self.inner)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");

        let mut writer = ReportWriter::create(&path).unwrap();
        writer
            .write_entry(&ReportEntry {
                expression: "II + III".to_string(),
                value: 5,
                words: "Five".to_string(),
            })
            .unwrap();
        writer.finish().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Expression: II + III\nDecimal Result: 5\nWord Form: Five\n\n"
        );
    }

    #[test]
    fn test_create_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("output.txt");
        match ReportWriter::create(&path) {
            Err(Error::CreateOutput { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected CreateOutput, got {:?}", other.map(|_| ())),
        }
    }
}
