//! Shared components for CLI commands
//!
//! Logging setup and validation-report rendering used across the command
//! implementations.

use crate::Result;
use crate::app::services::cross_ref::{Check, Severity, ValidationReport};
use colored::Colorize;

/// Set up structured logging for a command
///
/// `RUST_LOG` overrides the level derived from the verbosity flags. Quiet
/// mode drops timestamps for minimal output.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tagsync={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Checks rendered in their run order
const REPORT_CHECKS: &[Check] = &[
    Check::AutoFix,
    Check::EquipmentRefs,
    Check::PidRefs,
    Check::LoopIntegrity,
    Check::IoPointUniqueness,
    Check::TagConsistency,
];

/// Print a validation report grouped by check, colored by severity
pub fn print_report(report: &ValidationReport) {
    for check in REPORT_CHECKS {
        let findings: Vec<_> = report.findings_for(*check).collect();
        if findings.is_empty() {
            continue;
        }

        println!("\n{} ({} finding(s)):", check.name(), findings.len());
        for finding in findings {
            let line = format!("  - {}", finding);
            match finding.severity {
                Severity::Error => println!("{}", line.red()),
                Severity::Warning => println!("{}", line.yellow()),
                Severity::Info => println!("{}", line),
            }
        }
    }
}

/// Print the pass/fail summary line
pub fn print_summary(report: &ValidationReport, strict: bool) {
    println!("{}", "=".repeat(50));
    if report.passed(strict) {
        if report.findings.is_empty() {
            println!("{}", "Validation passed - no issues found".green());
        } else {
            println!(
                "{}",
                format!(
                    "Validation passed with {} warning(s)",
                    report.warning_count()
                )
                .green()
            );
        }
    } else {
        println!(
            "{}",
            format!(
                "Validation completed with {} error(s), {} warning(s)",
                report.error_count(),
                report.warning_count()
            )
            .red()
        );
    }
}
