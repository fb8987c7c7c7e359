//! Command-line argument definitions for tagsync
//!
//! The complete CLI interface using the clap derive API. Each args struct
//! carries a `validate()` method checking path existence and value ranges
//! before the command runs.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the tagsync instrumentation database tool
///
/// Resolves ISA-5.1 instrument tags, applies equipment-driven IO patterns
/// and validates cross-references across an instrumentation database.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tagsync",
    version,
    about = "Resolve instrument tags and keep instrumentation databases consistent",
    long_about = "Decodes ISA-5.1 instrument tags, normalizes multi-unit equipment tags, \
                  applies equipment-driven IO patterns (including motor-control instrument \
                  synthesis) and validates equipment, P&ID, loop, IO-point and tag \
                  cross-references across a YAML instrumentation database."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Apply IO patterns to the instrument database (dedup, motor synthesis, patterns)
    Apply(ApplyArgs),
    /// Validate cross-references in the instrument database
    Validate(ValidateArgs),
    /// Decode a single ISA-5.1 tag string
    Decode(DecodeArgs),
    /// Summarize IO point counts and spare capacity
    Summary(SummaryArgs),
}

/// Arguments for the apply command
#[derive(Debug, Clone, Parser)]
pub struct ApplyArgs {
    /// Path to the instrument database YAML file
    #[arg(short = 'd', long = "database", value_name = "FILE")]
    pub database: PathBuf,

    /// Path to the equipment list (.qmd frontmatter or plain YAML)
    #[arg(short = 'e', long = "equipment", value_name = "FILE")]
    pub equipment: PathBuf,

    /// Path to the IO pattern table YAML file
    #[arg(short = 'p', long = "patterns", value_name = "FILE")]
    pub patterns: PathBuf,

    /// Output path for the updated database
    ///
    /// If not specified, the input database file is overwritten.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Treat warnings (e.g. missing feeder_type) as fatal
    #[arg(long = "strict")]
    pub strict: bool,

    /// Run the pipeline without writing the database back
    #[arg(long = "dry-run", help = "Show what would change without writing output")]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Path to the instrument database YAML file
    #[arg(short = 'd', long = "database", value_name = "FILE")]
    pub database: PathBuf,

    /// Path to the equipment list; enables the equipment-reference check
    #[arg(short = 'e', long = "equipment", value_name = "FILE")]
    pub equipment: Option<PathBuf>,

    /// Attempt to auto-fix orphan equipment references and write back
    #[arg(long = "fix", requires = "equipment")]
    pub fix: bool,

    /// Treat warnings as fatal
    #[arg(long = "strict")]
    pub strict: bool,

    /// Output format for the validation report
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// The tag string to decode (e.g. "300-LAH-02")
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Emit the decoded structure as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Validate letters only, exit nonzero on invalid letters
    #[arg(long = "check", conflicts_with = "json")]
    pub check: bool,

    /// Logging verbosity level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Path to the instrument database YAML file
    #[arg(short = 'd', long = "database", value_name = "FILE")]
    pub database: PathBuf,

    /// Spare capacity percentage added on top of counted IO points
    #[arg(long = "spare-pct", value_name = "PCT", default_value_t = 20)]
    pub spare_pct: u32,

    /// Output format for the summary
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

fn require_file(path: &PathBuf, what: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "{} does not exist: {}",
            what,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "{} is not a file: {}",
            what,
            path.display()
        )));
    }
    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ApplyArgs {
    /// Validate the apply command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        require_file(&self.database, "Database file")?;
        require_file(&self.equipment, "Equipment file")?;
        require_file(&self.patterns, "Patterns file")?;

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        require_file(&self.database, "Database file")?;
        if let Some(equipment) = &self.equipment {
            require_file(equipment, "Equipment file")?;
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl DecodeArgs {
    /// Validate the decode command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.tag.trim().is_empty() {
            return Err(Error::configuration("Tag cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

impl SummaryArgs {
    /// Validate the summary command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.spare_pct > 100 {
            return Err(Error::configuration(
                "Spare percentage cannot exceed 100".to_string(),
            ));
        }
        require_file(&self.database, "Database file")
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}
