//! Command implementations for the tagsync CLI
//!
//! Each command lives in its own module; `shared` carries the logging setup
//! and report rendering used by more than one of them.

pub mod apply;
pub mod decode;
pub mod shared;
pub mod summary;
pub mod validate;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the appropriate subcommand handler
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Apply(apply_args) => {
            shared::setup_logging(apply_args.get_log_level(), apply_args.quiet)?;
            apply::run_apply(apply_args)
        }
        Commands::Validate(validate_args) => {
            shared::setup_logging(validate_args.get_log_level(), validate_args.quiet)?;
            validate::run_validate(validate_args)
        }
        Commands::Decode(decode_args) => {
            shared::setup_logging(decode_args.get_log_level(), false)?;
            decode::run_decode(decode_args)
        }
        Commands::Summary(summary_args) => {
            shared::setup_logging(summary_args.get_log_level(), false)?;
            summary::run_summary(summary_args)
        }
    }
}
