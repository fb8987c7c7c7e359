//! Cross-reference validation and orphan-reference repair
//!
//! [`validator`] runs five independent referential checks over a finished
//! database and accumulates findings without ever stopping early.
//! [`auto_fix`] optionally rewrites orphaned equipment references before the
//! equipment check runs; its rewrites are advisory and re-validated, never
//! trusted blind.

use std::fmt;

pub mod auto_fix;
pub mod validator;

#[cfg(test)]
pub mod tests;

pub use auto_fix::{AutoFixReport, apply_auto_fixes};
pub use validator::CrossRefValidator;

/// How serious one finding is
///
/// Errors are broken references; warnings are missing-but-expected data;
/// info findings are advisory notes (auto-fix rewrites, manual-review
/// items). Only errors fail a normal run; strict mode promotes warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Which of the validator's checks produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    EquipmentRefs,
    PidRefs,
    LoopIntegrity,
    IoPointUniqueness,
    TagConsistency,
    AutoFix,
}

impl Check {
    /// Human-readable check name for report headings
    pub fn name(&self) -> &'static str {
        match self {
            Check::EquipmentRefs => "equipment references",
            Check::PidRefs => "P&ID references",
            Check::LoopIntegrity => "loop keys",
            Check::IoPointUniqueness => "IO point IDs",
            Check::TagConsistency => "tag consistency",
            Check::AutoFix => "auto-fix",
        }
    }
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub check: Check,
    pub message: String,
}

impl Finding {
    pub fn error(check: Check, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            check,
            message: message.into(),
        }
    }

    pub fn warning(check: Check, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            check,
            message: message.into(),
        }
    }

    pub fn info(check: Check, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            check,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Accumulated outcome of one validation run
///
/// All findings from every check are collected together; nothing is
/// truncated at the first failure.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,

    /// Equipment references rewritten by the auto-fix pass
    pub fixes_applied: usize,
}

impl ValidationReport {
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Pass/fail status: errors always fail, warnings fail in strict mode
    pub fn passed(&self, strict: bool) -> bool {
        if strict {
            self.error_count() == 0 && self.warning_count() == 0
        } else {
            self.error_count() == 0
        }
    }

    /// Findings produced by one specific check, in run order
    pub fn findings_for(&self, check: Check) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.check == check)
    }
}
