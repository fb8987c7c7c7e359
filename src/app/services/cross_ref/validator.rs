//! Five independent referential checks over a finished database

use crate::app::models::Database;
use crate::app::services::equipment_registry::{EquipmentRegistry, base_tag};
use crate::app::services::tag_codec;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use tracing::info;

use super::{Check, Finding, ValidationReport};

/// Trailing parenthetical description: "200-T-06 (Digester Tank No. 6)"
static TRAILING_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*\)\s*$").expect("valid parenthetical pattern"));

/// Pure referential validator; never mutates the database
///
/// The equipment check only runs when a registry is supplied, matching a
/// validation invocation without an equipment list.
#[derive(Debug)]
pub struct CrossRefValidator<'a> {
    registry: Option<&'a EquipmentRegistry>,
}

impl<'a> CrossRefValidator<'a> {
    pub fn new(registry: Option<&'a EquipmentRegistry>) -> Self {
        Self { registry }
    }

    /// Run every check in order and accumulate all findings
    pub fn validate(&self, database: &Database) -> ValidationReport {
        let mut report = ValidationReport::default();

        if let Some(registry) = self.registry {
            report.extend(check_equipment_refs(database, registry));
        }
        report.extend(check_pid_refs(database));
        report.extend(check_loop_integrity(database));
        report.extend(check_io_point_uniqueness(database));
        report.extend(check_tag_consistency(database));

        info!(
            "Validation complete: {} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        );

        report
    }
}

/// Every non-empty equipment reference must resolve in the alias index
///
/// A trailing parenthetical description is stripped first, then the bare
/// reference and its paired-suffix-stripped base are both tried.
pub fn check_equipment_refs(database: &Database, registry: &EquipmentRegistry) -> Vec<Finding> {
    let mut findings = Vec::new();

    for instrument in &database.instruments {
        let Some(equipment_tag) = instrument.equipment_tag.as_deref() else {
            continue;
        };
        if equipment_tag.trim().is_empty() {
            continue;
        }

        let cleaned = TRAILING_PAREN.replace(equipment_tag, "").trim().to_string();
        let base = base_tag(&cleaned);

        if !registry.contains(&cleaned) && !registry.contains(&base) {
            findings.push(Finding::error(
                Check::EquipmentRefs,
                format!(
                    "{}: References unknown equipment '{}'",
                    instrument.full_tag(),
                    equipment_tag
                ),
            ));
        }
    }

    findings
}

/// Every declared P&ID reference must be a registered source P&ID
pub fn check_pid_refs(database: &Database) -> Vec<Finding> {
    let source_pids: HashSet<&str> = database
        .source_pids
        .iter()
        .map(|p| p.pid_number.as_str())
        .collect();

    let mut findings = Vec::new();
    for instrument in &database.instruments {
        let Some(pid_ref) = instrument.location.pid_reference.as_deref() else {
            continue;
        };
        if !pid_ref.is_empty() && !source_pids.contains(pid_ref) {
            findings.push(Finding::error(
                Check::PidRefs,
                format!(
                    "{}: P&ID '{}' not in source_pids",
                    instrument.full_tag(),
                    pid_ref
                ),
            ));
        }
    }

    findings
}

/// Loop keys must be unique and every instrument's loop must exist and
/// carry the instrument's measured variable
pub fn check_loop_integrity(database: &Database) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut loop_variables: HashMap<&str, &str> = HashMap::new();

    for loop_record in &database.loops {
        let Some(loop_key) = loop_record.loop_key.as_deref() else {
            findings.push(Finding::error(
                Check::LoopIntegrity,
                "Loop missing required loop_key field",
            ));
            continue;
        };

        if loop_variables.contains_key(loop_key) {
            findings.push(Finding::error(
                Check::LoopIntegrity,
                format!("Duplicate loop_key: {}", loop_key),
            ));
        } else {
            loop_variables.insert(loop_key, &loop_record.variable);
        }
    }

    for instrument in &database.instruments {
        let Some(loop_key) = instrument.loop_key.as_deref() else {
            findings.push(Finding::error(
                Check::LoopIntegrity,
                format!("{}: Missing required loop_key field", instrument.full_tag()),
            ));
            continue;
        };

        let Some(expected_variable) = loop_variables.get(loop_key) else {
            findings.push(Finding::error(
                Check::LoopIntegrity,
                format!(
                    "{}: References non-existent loop_key '{}'",
                    instrument.full_tag(),
                    loop_key
                ),
            ));
            continue;
        };

        let variable = instrument.tag.variable();
        if !expected_variable.is_empty() && variable != *expected_variable {
            findings.push(Finding::error(
                Check::LoopIntegrity,
                format!(
                    "{}: Variable '{}' doesn't match loop variable '{}'",
                    instrument.full_tag(),
                    variable,
                    expected_variable
                ),
            ));
        }
    }

    findings
}

/// Every io_point_id must be globally unique across all instruments
///
/// A collision is reported once, naming both owning tags.
pub fn check_io_point_uniqueness(database: &Database) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for instrument in &database.instruments {
        for signal in &instrument.io_signals {
            if signal.io_point_id.is_empty() {
                continue;
            }
            match owners.get(signal.io_point_id.as_str()) {
                Some(owner) => findings.push(Finding::error(
                    Check::IoPointUniqueness,
                    format!(
                        "Duplicate io_point_id '{}' in {} (also in {})",
                        signal.io_point_id,
                        instrument.full_tag(),
                        owner
                    ),
                )),
                None => {
                    owners.insert(&signal.io_point_id, instrument.full_tag());
                }
            }
        }
    }

    findings
}

/// A structured tag's full_tag must equal the canonical concatenation of
/// its parts; raw tags have nothing to check
pub fn check_tag_consistency(database: &Database) -> Vec<Finding> {
    let mut findings = Vec::new();

    for instrument in &database.instruments {
        let Some(tag) = instrument.tag.structured() else {
            continue;
        };
        if tag.full_tag.is_empty() {
            continue;
        }

        let expected = tag_codec::generate_from(tag);
        if tag.full_tag.to_uppercase() != expected {
            findings.push(Finding::error(
                Check::TagConsistency,
                format!("Tag mismatch: {} vs computed {}", tag.full_tag, expected),
            ));
        }
    }

    findings
}
