//! Validate command: five-part cross-reference check with optional auto-fix

use crate::app::services::cross_ref::{CrossRefValidator, ValidationReport, apply_auto_fixes};
use crate::app::services::equipment_registry::EquipmentRegistry;
use crate::app::services::loader;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::RunConfig;
use crate::{Error, Result};
use serde_json::json;

use super::shared;

/// Run cross-reference validation, optionally auto-fixing orphans first
pub fn run_validate(args: ValidateArgs) -> Result<()> {
    args.validate()?;

    let mut database = loader::load_database(&args.database)?;

    let registry = match &args.equipment {
        Some(path) => Some(EquipmentRegistry::from_list(loader::load_equipment(path)?)),
        None => None,
    };

    let config = RunConfig {
        strict: args.strict,
        auto_fix: args.fix,
        show_progress: false,
    };

    let mut report = ValidationReport::default();

    if config.auto_fix {
        // requires = "equipment" guarantees the registry here
        if let Some(registry) = &registry {
            let fix_report = apply_auto_fixes(&mut database, registry);
            report.fixes_applied = fix_report.fixed;
            report.extend(fix_report.findings);
            if report.fixes_applied > 0 {
                loader::save_database(&database, &args.database)?;
            }
        }
    }

    let validator = CrossRefValidator::new(registry.as_ref());
    let validation = validator.validate(&database);
    report.extend(validation.findings);

    match args.format {
        OutputFormat::Human => {
            shared::print_report(&report);
            shared::print_summary(&report, config.strict);
        }
        OutputFormat::Json => {
            let findings: Vec<_> = report
                .findings
                .iter()
                .map(|f| {
                    json!({
                        "severity": f.severity.to_string(),
                        "check": f.check.name(),
                        "message": f.message,
                    })
                })
                .collect();
            let output = json!({
                "passed": report.passed(config.strict),
                "errors": report.error_count(),
                "warnings": report.warning_count(),
                "fixes_applied": report.fixes_applied,
                "findings": findings,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
    }

    if !report.passed(config.strict) {
        let count = report.error_count()
            + if config.strict { report.warning_count() } else { 0 };
        return Err(Error::strict_findings(count));
    }

    Ok(())
}
