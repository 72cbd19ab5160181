/// Command module for the `gs1id` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and an output writer, and returns
/// `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod batch;
pub mod check_digit;
pub mod types;
pub mod validate;
