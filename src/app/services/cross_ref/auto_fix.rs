//! Best-effort repair of orphaned equipment references
//!
//! Two deterministic strategies only: strip a trailing paired-suffix group,
//! then probe sibling sequence numbers at small offsets within the same
//! equipment-type code. Rewrites are advisory; the equipment-reference
//! check re-validates every rewritten reference afterward, so a wrong
//! guess still surfaces as a finding.

use crate::app::models::Database;
use crate::app::services::equipment_registry::EquipmentRegistry;
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

use super::{Check, Finding};

/// One or more trailing /NN groups
static PAIRED_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)(/\d+)+$").expect("valid paired-suffix pattern"));

/// ISA-formatted equipment tag: prefix, type code, sequence
static ISA_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]?\d{3,4})-([A-Z]{1,5})-(\d+)$").expect("valid ISA tag pattern")
});

/// Sibling sequence offsets, probed in order
const SIBLING_OFFSETS: &[i64] = &[1, -1, 2, -2];

/// Outcome of one auto-fix pass
#[derive(Debug, Default, Clone)]
pub struct AutoFixReport {
    /// References rewritten to a known equipment tag
    pub fixed: usize,

    /// Advisory findings: one per rewrite, plus manual-review notes for
    /// non-ISA references that cannot be fixed
    pub findings: Vec<Finding>,
}

/// Rewrite orphaned equipment references where a deterministic fix exists
///
/// Never matches across different equipment-type codes and never probes
/// below sequence 1. References that resist both strategies are left
/// untouched and annotated for manual review.
pub fn apply_auto_fixes(database: &mut Database, registry: &EquipmentRegistry) -> AutoFixReport {
    let mut report = AutoFixReport::default();

    for instrument in database.instruments.iter_mut() {
        let Some(equipment_tag) = instrument.equipment_tag.clone() else {
            continue;
        };
        if equipment_tag.is_empty() || registry.contains(&equipment_tag) {
            continue;
        }

        let full_tag = instrument.full_tag().to_string();

        // Strategy 1: strip the paired suffix
        if let Some(caps) = PAIRED_SUFFIX.captures(&equipment_tag) {
            let base = caps[1].to_string();
            if registry.contains(&base) {
                report.findings.push(Finding::info(
                    Check::AutoFix,
                    format!(
                        "[fix] {}: '{}' -> '{}' (stripped paired suffix)",
                        full_tag, equipment_tag, base
                    ),
                ));
                instrument.equipment_tag = Some(base);
                report.fixed += 1;
                continue;
            }
        }

        // Strategy 2: sibling sequence offsets within the same type code
        if let Some(caps) = ISA_TAG.captures(&equipment_tag) {
            let prefix = &caps[1];
            let code = &caps[2];
            let seq_str = &caps[3];
            let seq = seq_str.parse::<i64>().unwrap_or(0);
            let width = seq_str.len();

            let sibling = SIBLING_OFFSETS.iter().find_map(|offset| {
                let sibling_seq = seq + offset;
                if sibling_seq < 1 {
                    return None;
                }
                let candidate = format!("{prefix}-{code}-{sibling_seq:0width$}");
                registry.contains(&candidate).then_some((candidate, *offset))
            });

            if let Some((sibling_tag, offset)) = sibling {
                report.findings.push(Finding::info(
                    Check::AutoFix,
                    format!(
                        "[fix] {}: '{}' -> '{}' (sibling offset {:+})",
                        full_tag, equipment_tag, sibling_tag, offset
                    ),
                ));
                instrument.equipment_tag = Some(sibling_tag);
                report.fixed += 1;
            }
            continue;
        }

        // Non-ISA reference: nothing deterministic to try
        report.findings.push(Finding::info(
            Check::AutoFix,
            format!(
                "[info] {}: non-ISA equipment_tag '{}' - skipped (manual review)",
                full_tag, equipment_tag
            ),
        ));
    }

    if report.fixed > 0 {
        info!("Auto-fix rewrote {} orphan reference(s)", report.fixed);
    }

    report
}
