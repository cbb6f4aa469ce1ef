#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use selpoltools::cli::args::CliArgs;
use selpoltools::cli::driver;

fn main() -> Result<ExitCode> {
    // Initialize tracing if SELPOL_LOG or RUST_LOG is set.
    // Supports SELPOL_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    selpoltools::tracing_config::init_tracing();

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let args = CliArgs::parse();
    let output = driver::execute(&args.command)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;

    if let Some(message) = output.failure {
        eprintln!("{}: {}", "error".red().bold(), message.trim_end());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
