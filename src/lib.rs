//! Tagsync Library
//!
//! A Rust library for resolving ISA-5.1 instrument tags and keeping
//! instrumentation databases referentially consistent.
//!
//! This library provides tools for:
//! - Decoding and generating ISA-5.1 instrument tag strings
//! - Normalizing multi-unit equipment tags (comma lists, paired suffixes,
//!   inferred siblings) into an alias index
//! - Resolving equipment and feeder types to IO pattern templates
//! - Synthesizing motor-control instruments for motorized equipment
//! - Applying IO patterns across an instrument collection in ordered phases
//! - Validating equipment, P&ID, loop, IO-point and tag cross-references
//! - Best-effort repair of orphaned equipment references

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cross_ref;
        pub mod equipment_registry;
        pub mod loader;
        pub mod pattern_applicator;
        pub mod pattern_resolver;
        pub mod tag_codec;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Database, Equipment, Instrument, InstrumentTag};
pub use config::RunConfig;

/// Result type alias for tagsync
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for database loading and structural validation
///
/// Malformed tag strings are not errors: `tag_codec::decode` returns
/// `None` and the caller decides on severity. Semantic cross-reference
/// findings are collected as `Finding` values, never raised as errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML decoding error
    #[error("YAML error in file '{file}': {message}")]
    YamlParsing { file: String, message: String },

    /// QMD frontmatter format error
    #[error("QMD format error in file '{file}': {message}")]
    QmdFormat { file: String, message: String },

    /// Database failed structural validation
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// Configuration or CLI argument error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// A run finished with fatal findings (errors, or warnings under strict)
    #[error("Validation failed with {count} finding(s)")]
    StrictFindings { count: usize },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a YAML parsing error with context
    pub fn yaml_parsing(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::YamlParsing {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a QMD frontmatter format error
    pub fn qmd_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QmdFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a strict-mode failure from a finding count
    pub fn strict_findings(count: usize) -> Self {
        Self::StrictFindings { count }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Self::YamlParsing {
            file: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}
