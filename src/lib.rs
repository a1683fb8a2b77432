//! Kata - a practice library for error recovery and file round-trips.
//!
//! This library provides the core functionality for the `kata` CLI tool:
//! a division exercise with structured error recovery, and a file
//! write/append/read exercise with a custom validation error.

pub mod action_log;
pub mod cli;
pub mod commands;

/// Library-level error type for kata operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("not a valid number: {0:?}")]
    InvalidNumber(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("only .txt files are allowed: {0}")]
    InvalidExtension(String),
}

/// Result type alias for kata operations.
pub type Result<T> = std::result::Result<T, Error>;
