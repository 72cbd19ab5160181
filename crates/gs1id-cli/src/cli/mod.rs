//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for PathOrStdin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits readable text to stdout.  `Json` emits one JSON object per
/// line (NDJSON).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `gs1id` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Validate a single identifier.
    Validate {
        /// The identifier value, taken verbatim.
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
        /// Identifier type: GTIN, GLN, SSCC, GRAI, GIAI, GSRN, GDTI or OTHER
        /// (case-insensitive).
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        identifier_type: String,
        /// Also run the extended GS1 rules (every check digit, GDTI serial).
        #[arg(long)]
        extended: bool,
    },

    /// Validate a batch of requests from a JSON array or NDJSON file.
    Batch {
        /// Path to the request file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Also run the extended GS1 rules (every check digit, GDTI serial).
        #[arg(long)]
        extended: bool,
    },

    /// Compute the GS1 check digit for a numeric payload.
    #[command(name = "check-digit")]
    CheckDigit {
        /// The key without its check digit, e.g. the first 12 digits of a GTIN-13.
        #[arg(value_name = "PAYLOAD", allow_hyphen_values = true)]
        payload: String,
    },

    /// List every identifier type and the rules it is validated against.
    Types {
        /// Show the extended rule profile.
        #[arg(long)]
        extended: bool,
    },
}

/// Root CLI struct for the `gs1id` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "gs1id",
    version,
    about = "GS1 identifier validator",
    long_about = "Structural and check-digit validation for GS1 identifiers.\n\
                  Validates GTIN, GLN, SSCC, GRAI, GIAI, GSRN, GDTI and generic\n\
                  identifiers, one at a time or in batches."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress everything on stderr except errors, and print only one line
    /// per outcome (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log progress and per-identifier events to stderr
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum batch input size in bytes.
    ///
    /// Can also be set via the `GS1ID_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "GS1ID_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Setting the `NO_COLOR` environment variable to any value has the same
    /// effect (<https://no-color.org>); it is read by the formatter and the
    /// logger rather than parsed here.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests;
