//! The full lesson: division first, then the file round-trip, in the
//! original linear order.
//!
//! Every recognized failure is recovered where it happens and recorded in
//! the report, so the lesson itself only fails on unexpected IO errors.

use std::path::Path;

use serde::Serialize;

use super::divide::{DivideReport, divide_line};
use super::file::{self, AppendReport, WriteReport};
use super::Output;
use crate::{Error, Result};

/// Filename deliberately checked to trip the extension error.
pub const BAD_FILENAME: &str = "data.csv";

/// Report for a full lesson run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub divide: DivideReport,
    pub write: WriteReport,
    pub append: AppendReport,
    pub read: ReadOutcome,
    pub check: CheckOutcome,
}

/// Read step outcome: a missing file is recovered, not fatal.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadOutcome {
    Ok { content: String },
    FileNotFound { path: String },
}

/// Check step outcome: the lesson always checks `data.csv`, so the
/// expected result is the recovered extension error.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Ok { filename: String },
    InvalidExtension { filename: String, message: String },
}

/// Run the whole lesson on one line of stdin input.
pub fn run(numerator: i64, raw_input: &str, path: &Path) -> Result<RunReport> {
    let divide = divide_line(numerator, raw_input);

    let write = file::write(path)?;
    let append = file::append(path)?;

    let read = match file::read(path) {
        Ok(report) => ReadOutcome::Ok {
            content: report.content,
        },
        Err(Error::FileNotFound(path)) => ReadOutcome::FileNotFound { path },
        Err(e) => return Err(e),
    };

    let check = match file::check(BAD_FILENAME) {
        Ok(report) => CheckOutcome::Ok {
            filename: report.filename,
        },
        Err(e @ Error::InvalidExtension(_)) => CheckOutcome::InvalidExtension {
            filename: BAD_FILENAME.to_string(),
            message: e.to_string(),
        },
        Err(e) => return Err(e),
    };

    Ok(RunReport {
        divide,
        write,
        append,
        read,
        check,
    })
}

impl Output for RunReport {
    fn to_human(&self) -> String {
        let mut out = String::new();

        out.push_str("=== Division Exercise ===\n");
        out.push_str(&self.divide.to_human());
        out.push_str("\n\n=== File Exercise ===\n");
        out.push_str(&self.write.to_human());
        out.push('\n');
        out.push_str(&self.append.to_human());
        out.push('\n');

        match &self.read {
            ReadOutcome::Ok { content } => {
                out.push_str("File content:\n\n");
                out.push_str(content);
            }
            ReadOutcome::FileNotFound { path } => {
                out.push_str(&format!("Error: the file was not found: {}\n", path));
            }
        }

        match &self.check {
            CheckOutcome::Ok { filename } => {
                out.push_str(&format!("Filename is valid: {}", filename));
            }
            CheckOutcome::InvalidExtension { message, .. } => {
                out.push_str(&format!("Custom error: {}", message));
            }
        }

        out
    }
}
