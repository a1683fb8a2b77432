//! Kata CLI - a practice tool for error recovery and file round-trips.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser;
use kata::action_log;
use kata::cli::{Cli, Commands, FileCommands};
use kata::commands::{self, Output};

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    // Serialize command for logging
    let (cmd_name, args_json) = serialize_command(&cli.command);

    // Start timing
    let start = Instant::now();

    // Execute command
    let result = run_command(cli.command, human);

    // Calculate duration
    let duration = start.elapsed().as_millis() as u64;

    // Determine success/error
    let (success, error) = match &result {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };

    // Log the action (silently fails if logging is disabled or encounters errors)
    let _ = action_log::log_action(&cmd_name, args_json, success, error, duration);

    // Handle result
    if let Err(e) = result {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

fn run_command(command: Option<Commands>, human: bool) -> Result<(), kata::Error> {
    match command {
        Some(Commands::Divide { numerator }) => {
            let line = read_input_line(human, numerator)?;
            // Both failure kinds are folded into the report; the command
            // itself succeeds so the completion line always follows.
            let report = commands::divide_line(numerator, &line);
            output(&report, human);
        }

        Some(Commands::File { command }) => match command {
            FileCommands::Write { path } => {
                let report = commands::file::write(Path::new(&path))?;
                output(&report, human);
            }
            FileCommands::Append { path } => {
                let report = commands::file::append(Path::new(&path))?;
                output(&report, human);
            }
            FileCommands::Read { path } => {
                let report = commands::file::read(Path::new(&path))?;
                output(&report, human);
            }
            FileCommands::Check { filename } => {
                let report = commands::file::check(&filename)?;
                output(&report, human);
            }
        },

        Some(Commands::Run { numerator, path }) => {
            let line = read_input_line(human, numerator)?;
            let report = commands::run::run(numerator, &line, Path::new(&path))?;
            output(&report, human);
        }

        None => {
            output(&commands::overview(), human);
        }
    }

    Ok(())
}

/// Read one line from stdin for the division exercise, prompting first in
/// human mode.
fn read_input_line(human: bool, numerator: i64) -> Result<String, kata::Error> {
    if human {
        print!("Enter a number to divide {}: ", numerator);
        io::stdout().flush()?;
    }

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}

fn serialize_command(command: &Option<Commands>) -> (String, serde_json::Value) {
    match command {
        Some(Commands::Divide { numerator }) => (
            "divide".to_string(),
            serde_json::json!({ "numerator": numerator }),
        ),

        Some(Commands::File { command }) => match command {
            FileCommands::Write { path } => (
                "file write".to_string(),
                serde_json::json!({ "path": path }),
            ),
            FileCommands::Append { path } => (
                "file append".to_string(),
                serde_json::json!({ "path": path }),
            ),
            FileCommands::Read { path } => (
                "file read".to_string(),
                serde_json::json!({ "path": path }),
            ),
            FileCommands::Check { filename } => (
                "file check".to_string(),
                serde_json::json!({ "filename": filename }),
            ),
        },

        Some(Commands::Run { numerator, path }) => (
            "run".to_string(),
            serde_json::json!({ "numerator": numerator, "path": path }),
        ),

        None => ("overview".to_string(), serde_json::json!({})),
    }
}
