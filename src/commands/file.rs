//! The file exercises: overwrite, append, read back, and filename
//! extension validation.
//!
//! Each operation opens the file, does its one job, and drops the handle.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;

use super::Output;
use crate::{Error, Result};

/// The two lines written by the write exercise, in order.
pub const WRITE_LINES: [&str; 2] = ["This is a sample file.", "Created by the write exercise."];

/// The line added by the append exercise.
pub const APPEND_LINE: &str = "This line was appended at the end.";

/// Extension accepted by the check exercise.
pub const REQUIRED_EXTENSION: &str = "txt";

/// Report for `file write`.
#[derive(Debug, Serialize)]
pub struct WriteReport {
    pub path: String,
    pub lines_written: usize,
}

/// Report for `file append`.
#[derive(Debug, Serialize)]
pub struct AppendReport {
    pub path: String,
    pub line: String,
}

/// Report for `file read`.
#[derive(Debug, Serialize)]
pub struct ReadReport {
    pub path: String,
    pub content: String,
}

/// Report for `file check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub filename: String,
    pub valid: bool,
}

/// Create or truncate the file and write the two fixed lines.
pub fn write(path: &Path) -> Result<WriteReport> {
    let mut file = File::create(path)?;
    for line in WRITE_LINES {
        writeln!(file, "{}", line)?;
    }

    Ok(WriteReport {
        path: path.display().to_string(),
        lines_written: WRITE_LINES.len(),
    })
}

/// Append the fixed line, creating the file if it does not exist yet.
pub fn append(path: &Path) -> Result<AppendReport> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", APPEND_LINE)?;

    Ok(AppendReport {
        path: path.display().to_string(),
        line: APPEND_LINE.to_string(),
    })
}

/// Read the file's full contents.
///
/// A missing file is reported as `Error::FileNotFound` so callers can
/// distinguish it from other IO failures.
pub fn read(path: &Path) -> Result<ReadReport> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::FileNotFound(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    Ok(ReadReport {
        path: path.display().to_string(),
        content,
    })
}

/// Validate that a filename ends in the required extension.
///
/// Only the name is inspected; the file is never opened.
pub fn check(filename: &str) -> Result<CheckReport> {
    if !filename.ends_with(&format!(".{}", REQUIRED_EXTENSION)) {
        return Err(Error::InvalidExtension(filename.to_string()));
    }

    Ok(CheckReport {
        filename: filename.to_string(),
        valid: true,
    })
}

impl Output for WriteReport {
    fn to_human(&self) -> String {
        format!("File created and written: {}", self.path)
    }
}

impl Output for AppendReport {
    fn to_human(&self) -> String {
        format!("New line appended: {}", self.path)
    }
}

impl Output for ReadReport {
    fn to_human(&self) -> String {
        format!("File content:\n\n{}", self.content)
    }
}

impl Output for CheckReport {
    fn to_human(&self) -> String {
        format!("Filename is valid: {}", self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_produces_two_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");

        let report = write(&path).unwrap();
        assert_eq!(report.lines_written, 2);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "This is a sample file.\nCreated by the write exercise.\n"
        );
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");
        fs::write(&path, "old content\nmore old content\n").unwrap();

        write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old content"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_append_after_write_gives_three_lines_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");

        write(&path).unwrap();
        append(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![WRITE_LINES[0], WRITE_LINES[1], APPEND_LINE]);
    }

    #[test]
    fn test_append_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.txt");

        append(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}\n", APPEND_LINE));
    }

    #[test]
    fn test_read_round_trips_exact_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.txt");
        fs::write(&path, "line one\nline two\n").unwrap();

        let report = read(&path).unwrap();
        assert_eq!(report.content, "line one\nline two\n");
    }

    #[test]
    fn test_read_missing_file_is_distinct_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read(&path).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_check_accepts_txt() {
        let report = check("notes.txt").unwrap();
        assert!(report.valid);
    }

    #[test]
    fn test_check_rejects_csv() {
        let err = check("data.csv").unwrap_err();
        assert!(matches!(err, Error::InvalidExtension(name) if name == "data.csv"));
    }

    #[test]
    fn test_check_rejects_bare_extension_lookalike() {
        // "txt" without the dot is not a .txt filename
        assert!(check("txt").is_err());
        assert!(check("notes.txt.bak").is_err());
    }
}
