//! CLI argument definitions for kata.

use clap::{Parser, Subcommand};

/// Kata - a practice tool for error recovery and file round-trips.
///
/// Run `kata` with no arguments to list the available exercises, then
/// `kata run` to work through the whole lesson in order.
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about = "A CLI tool for practicing error recovery and file round-trips", long_about = None)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("KATA_GIT_COMMIT"), " ", env!("KATA_BUILD_TIMESTAMP"), ")"
))]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Divide a numerator by a number read from standard input
    ///
    /// Division by zero and non-numeric input are recovered and reported;
    /// the command still exits successfully. A completion line is printed
    /// regardless of outcome.
    Divide {
        /// Numerator to divide by the input value
        #[arg(long, default_value_t = 100)]
        numerator: i64,
    },

    /// File exercises (write, append, read, check)
    File {
        #[command(subcommand)]
        command: FileCommands,
    },

    /// Run the full lesson: divide, then write/append/read/check
    Run {
        /// Numerator for the division exercise
        #[arg(long, default_value_t = 100)]
        numerator: i64,

        /// File used by the write/append/read steps
        #[arg(long, default_value = "sample.txt")]
        path: String,
    },
}

/// File exercise subcommands
#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Overwrite the file with two fixed lines
    Write {
        /// Target file
        #[arg(default_value = "sample.txt")]
        path: String,
    },

    /// Append one fixed line to the file (created if absent)
    Append {
        /// Target file
        #[arg(default_value = "sample.txt")]
        path: String,
    },

    /// Print the file's full contents
    Read {
        /// Target file
        #[arg(default_value = "sample.txt")]
        path: String,
    },

    /// Validate that a filename ends in .txt
    Check {
        /// Filename to validate (not opened, only the name is inspected)
        filename: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // This will panic if the CLI is misconfigured
        Cli::command().debug_assert();
    }
}
