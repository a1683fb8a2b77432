//! Action logging for kata commands.
//!
//! Every invocation is appended as one JSONL record so a session of
//! practice runs can be reviewed afterwards. Logging is best-effort and
//! never fails a command.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest argument string recorded verbatim.
const MAX_ARG_LEN: usize = 100;

/// Represents a single action log entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionLog {
    /// ISO 8601 timestamp when the command ran
    pub timestamp: DateTime<Utc>,

    /// Working directory of the invocation
    pub cwd: String,

    /// Command name (e.g., "divide", "file read")
    pub command: String,

    /// Command arguments as JSON
    pub args: serde_json::Value,

    /// Whether the command succeeded
    pub success: bool,

    /// Error message if the command failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Command execution duration in milliseconds
    pub duration_ms: u64,

    /// User who executed the command
    pub user: String,
}

/// Log an action to the configured log file.
///
/// Silently returns on any failure so logging can never break a command.
/// Set `KATA_LOG_DISABLED=1` to turn logging off.
pub fn log_action(
    command: &str,
    args: serde_json::Value,
    success: bool,
    error: Option<String>,
    duration_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("KATA_LOG_DISABLED").is_ok_and(|v| v == "1") {
        return Ok(());
    }

    let log_path = match log_path() {
        Some(path) => path,
        None => return Ok(()),
    };

    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| ".".to_string());

    let entry = ActionLog {
        timestamp: Utc::now(),
        cwd,
        command: command.to_string(),
        args: truncate_args(&args),
        success,
        error,
        duration_ms,
        user: current_user(),
    };

    if let Err(e) = write_log_entry(&log_path, &entry) {
        eprintln!("Warning: failed to write action log: {}", e);
    }

    Ok(())
}

/// Resolve the log file path.
///
/// `KATA_LOG_DIR` overrides the default of `~/.local/share/kata/`.
fn log_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("KATA_LOG_DIR") {
        return Some(PathBuf::from(dir).join("action.log"));
    }

    let home = dirs::home_dir()?;
    Some(home.join(".local/share/kata/action.log"))
}

/// Write a log entry to the log file.
fn write_log_entry(path: &Path, entry: &ActionLog) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(entry)?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", json)?;

    Ok(())
}

/// Truncate long strings inside the argument JSON before logging.
fn truncate_args(args: &serde_json::Value) -> serde_json::Value {
    match args {
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), truncate_args(v)))
                .collect(),
        ),
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(truncate_args).collect())
        }
        serde_json::Value::String(s) if s.len() > MAX_ARG_LEN => serde_json::Value::String(
            format!("{}... ({} chars)", truncate_on_char_boundary(s, MAX_ARG_LEN - 3), s.len()),
        ),
        _ => args.clone(),
    }
}

/// Take the longest prefix of `s` that fits in `max` bytes without
/// splitting a multi-byte character.
fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    let mut end = max.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Get the current user's username.
fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
