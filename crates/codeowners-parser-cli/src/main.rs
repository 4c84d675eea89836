//! CODEOWNERS Parser CLI
//!
//! A command-line tool that prints the path to owner mappings of a
//! CODEOWNERS file.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, write_human, write_json};

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let exit_code = run(&args);

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the parser with the given arguments.
fn run(args: &Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let config = ValidatedConfig::from_args(args);
    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Reading CODEOWNERS from {}", config.source);

    let mappings = match config.load() {
        Ok(mappings) => mappings,
        Err(e) => {
            let mut output = HumanOutput::new(&mut stderr, io::stderr().is_terminal());
            let _ = output.write_error(&e.to_string());
            return ExitCode::from(&e);
        }
    };

    info!("Parsed {} mapping(s)", mappings.len());

    let written = if config.json_output {
        write_json(&mut stdout, &mappings)
    } else {
        write_human(&mut stdout, &mappings, use_colors)
    };

    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    ExitCode::Success
}
