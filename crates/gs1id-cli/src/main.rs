mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use std::io::Write as _;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::error::CliError;
use crate::format::FormatterConfig;
use crate::logging::LogConfig;

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_flags(cli.quiet, cli.verbose, cli.no_color);
    if let Err(e) = logging::init_logging(&log_config) {
        eprintln!("warning: logging unavailable: {e}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed command.
fn run(cli: &Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.format, cli.no_color, cli.quiet);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Command::Validate {
            value,
            identifier_type,
            extended,
        } => {
            tracing::info!(command = "validate", extended, "starting");
            cmd::validate::run(&mut out, value, identifier_type, *extended, &config)
        }
        Command::Batch { file, extended } => {
            tracing::info!(command = "batch", source = %file, extended, "starting");
            let content = io::read_input(file, cli.max_file_size)?;
            let stderr = std::io::stderr();
            let mut err_out = stderr.lock();
            cmd::batch::run(
                &mut out,
                &mut err_out,
                &content,
                &file.to_string(),
                *extended,
                &config,
            )
        }
        Command::CheckDigit { payload } => {
            tracing::info!(command = "check-digit", "starting");
            cmd::check_digit::run(&mut out, payload, &config)
        }
        Command::Types { extended } => {
            tracing::info!(command = "types", extended, "starting");
            cmd::types::run(&mut out, *extended, &config)
        }
    };
    out.flush().map_err(|e| CliError::stdout(&e))?;
    result
}
