#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::{CommandFactory, Parser};

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["gs1id"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for name in ["validate", "batch", "check-digit", "types"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for flag in [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--no-color",
        "--help",
        "--version",
    ] {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

#[test]
fn test_cli_debug_assert() {
    Cli::command().debug_assert();
}

#[test]
fn test_validate_parses_value_and_type() {
    let cli = parse(&["validate", "4006381333931", "--type", "gtin"]);
    match cli.command {
        Command::Validate {
            value,
            identifier_type,
            extended,
        } => {
            assert_eq!(value, "4006381333931");
            assert_eq!(identifier_type, "gtin");
            assert!(!extended);
        }
        _ => panic!("expected Validate"),
    }
}

#[test]
fn test_validate_accepts_short_type_and_extended() {
    let cli = parse(&["validate", "ABC-123", "-t", "OTHER", "--extended"]);
    match cli.command {
        Command::Validate { extended, .. } => assert!(extended),
        _ => panic!("expected Validate"),
    }
}

#[test]
fn test_validate_requires_type() {
    assert!(Cli::try_parse_from(["gs1id", "validate", "4006381333931"]).is_err());
}

/// Parsing `batch -` should produce `PathOrStdin::Stdin`.
#[test]
fn test_batch_dash_is_stdin() {
    let cli = parse(&["batch", "-"]);
    match cli.command {
        Command::Batch { file, .. } => match file {
            PathOrStdin::Stdin => {}
            PathOrStdin::Path(p) => panic!("expected Stdin, got Path({p:?})"),
        },
        _ => panic!("expected Batch"),
    }
}

/// Parsing a real path should produce `PathOrStdin::Path`.
#[test]
fn test_batch_path() {
    let cli = parse(&["batch", "requests.ndjson"]);
    match cli.command {
        Command::Batch { file, .. } => match file {
            PathOrStdin::Path(p) => assert_eq!(p, PathBuf::from("requests.ndjson")),
            PathOrStdin::Stdin => panic!("expected Path, got Stdin"),
        },
        _ => panic!("expected Batch"),
    }
}

#[test]
fn test_check_digit_subcommand_name() {
    let cli = parse(&["check-digit", "400638133393"]);
    match cli.command {
        Command::CheckDigit { payload } => assert_eq!(payload, "400638133393"),
        _ => panic!("expected CheckDigit"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["types", "--format", "json", "--quiet", "--no-color"]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.quiet);
    assert!(cli.no_color);
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["gs1id", "-q", "-v", "types"]).is_err());
}

#[test]
fn test_max_file_size_flag() {
    let cli = parse(&["--max-file-size", "1024", "batch", "-"]);
    assert_eq!(cli.max_file_size, 1024);
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["gs1id", "--format", "xml", "types"]).is_err());
}

#[test]
fn test_path_or_stdin_display() {
    assert_eq!(PathOrStdin::Stdin.to_string(), "-");
    assert_eq!(
        PathOrStdin::Path(PathBuf::from("a/b.json")).to_string(),
        "a/b.json"
    );
}

/// `NO_COLOR` takes any value, so clap must not parse it as a bool.
#[test]
fn test_no_color_flag_is_not_bound_to_env() {
    let cmd = Cli::command();
    let arg = cmd
        .get_arguments()
        .find(|a| a.get_id() == "no_color")
        .expect("--no-color is defined");
    assert!(arg.get_env().is_none());
    assert!(!parse(&["types"]).no_color);
}
