//! Command implementations for the kata CLI.
//!
//! This module contains the business logic for each CLI command.
//! Commands are organized by exercise:
//! - `divide` - division with structured error recovery
//! - `file` - write/append/read round-trip and filename validation
//! - `run` - the full lesson in the original linear order
//!
//! Each command returns a serializable report; the binary decides whether
//! to render it as JSON or human-readable text.

pub mod divide;
pub mod file;
pub mod run;

use serde::Serialize;

pub use divide::{DivideOutcome, DivideReport, divide, divide_line, parse_divisor};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Overview shown when kata is invoked with no subcommand.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub name: String,
    pub version: String,
    pub exercises: Vec<String>,
}

/// Build the no-args overview.
pub fn overview() -> Overview {
    Overview {
        name: "kata".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        exercises: vec![
            "divide - division with error recovery (reads stdin)".to_string(),
            "file write|append|read|check - file round-trip exercises".to_string(),
            "run - the full lesson in order".to_string(),
        ],
    }
}

impl Output for Overview {
    fn to_human(&self) -> String {
        let mut out = format!("Kata {}\n\nExercises:\n", self.version);
        for exercise in &self.exercises {
            out.push_str(&format!("  {}\n", exercise));
        }
        out.push_str("\nStart with `kata run`.");
        out
    }
}
