//! Line-oriented reader over an expression file.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Reads an expression file line by line, stripping terminators and
/// bounding the accepted line length.
pub struct ExpressionReader {
    inner: BufReader<File>,
    line_no: usize,
    max_line_len: usize,
}

impl ExpressionReader {
    /// Open `path` for reading. Failure names the path so the caller can
    /// surface one diagnostic and stop before any output is created.
    pub fn open(path: &Path, max_line_len: usize) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened input file: {:?}", path);
        Ok(Self {
            inner: BufReader::new(file),
            line_no: 0,
            max_line_len,
        })
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Next line with its `\n` or `\r\n` terminator stripped, `None` at end
    /// of input. A line longer than the configured bound is an error rather
    /// than an unbounded buffer.
    pub fn next_line(&mut self) -> Option<Result<String>> {
        let mut line = String::new();
        match self.inner.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                if line.len() > self.max_line_len {
                    return Some(Err(Error::LineTooLong {
                        line: self.line_no,
                        max: self.max_line_len,
                    }));
                }
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn reader_over(content: &str) -> (tempfile::TempDir, ExpressionReader) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let reader = ExpressionReader::open(&path, 1024).unwrap();
        (dir, reader)
    }

    #[test]
    fn test_strips_terminators() {
        let (_dir, mut reader) = reader_over("II + III\r\nX - IV\nV * IV");
        assert_eq!(reader.next_line().unwrap().unwrap(), "II + III");
        assert_eq!(reader.next_line().unwrap().unwrap(), "X - IV");
        assert_eq!(reader.next_line().unwrap().unwrap(), "V * IV");
        assert!(reader.next_line().is_none());
        assert_eq!(reader.lines_read(), 3);
    }

    #[test]
    fn test_missing_input_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.txt");
        match ExpressionReader::open(&missing, 1024) {
            Err(Error::OpenInput { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected OpenInput, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_oversized_line_fails_predictably() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all("I + I\n".as_bytes()).unwrap();
        file.write_all("M".repeat(2048).as_bytes()).unwrap();
        file.write_all(b"\n").unwrap();

        let mut reader = ExpressionReader::open(&path, 1024).unwrap();
        assert_eq!(reader.next_line().unwrap().unwrap(), "I + I");
        match reader.next_line().unwrap() {
            Err(Error::LineTooLong { line, max }) => {
                assert_eq!(line, 2);
                assert_eq!(max, 1024);
            }
            other => panic!("expected LineTooLong, got {:?}", other.map(|_| ())),
        }
    }
}
