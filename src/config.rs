//! Run configuration for apply and validate passes.
//!
//! Collects the behavioural toggles that commands pass down into the
//! services, keeping CLI parsing separate from the processing code.

use serde::{Deserialize, Serialize};

/// Behavioural configuration for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Promote warnings and findings to a fatal exit
    pub strict: bool,

    /// Attempt auto-fixes for orphaned equipment references before
    /// validating equipment links
    pub auto_fix: bool,

    /// Show progress bars during long passes
    pub show_progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strict: false,
            auto_fix: false,
            show_progress: true,
        }
    }
}

impl RunConfig {
    /// Configuration for non-interactive use (tests, JSON output)
    pub fn quiet() -> Self {
        Self {
            show_progress: false,
            ..Self::default()
        }
    }
}
