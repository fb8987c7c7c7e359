//! (equipment type, feeder type) -> pattern name lookup

use crate::app::models::Equipment;
use crate::constants::{feeder_display, feeder_patterns_for};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Long-form equipment tag: optional letter + 3-4 digit area, code, sequence
static LONG_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]?\d{3,4}-([A-Z]+)-\d+").expect("valid long-form pattern"));

/// Short-form equipment tag: code and sequence only ("MOV-01")
static SHORT_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)-\d+").expect("valid short-form pattern"));

/// Extract the equipment type code from a tag (e.g. "200-P-01" -> "P")
///
/// Long form is tried first, then short form; first match wins. Inputs
/// matching both forms with different codes keep the long-form code, with
/// a trace note for the ambiguity.
pub fn equipment_type_code(tag: &str) -> Option<String> {
    let tag = tag.trim();

    if let Some(caps) = LONG_FORM.captures(tag) {
        let code = caps[1].to_string();
        if let Some(short) = SHORT_FORM.captures(tag) {
            if short[1] != *code {
                debug!(
                    "Ambiguous equipment tag '{}': long form '{}' vs short form '{}', keeping long form",
                    tag, code, &short[1]
                );
            }
        }
        return Some(code);
    }

    SHORT_FORM.captures(tag).map(|caps| caps[1].to_string())
}

/// Pure two-level lookup: equipment type code, then normalized feeder type
///
/// The feeder table falls back to its `DEFAULT` entry when the feeder type
/// is absent; no match at either level yields `None`.
pub fn resolve_pattern(equipment_type: &str, feeder_type: &str) -> Option<&'static str> {
    let table = feeder_patterns_for(equipment_type)?;
    let feeder = feeder_type.trim().to_uppercase();
    table
        .get(feeder.as_str())
        .or_else(|| table.get("DEFAULT"))
        .copied()
}

/// Resolve the IO pattern and feeder display label for an equipment record
///
/// Returns `None` when the equipment has no feeder type, its tag carries no
/// recognizable type code, or the code/feeder combination is unmapped.
pub fn resolve_pattern_for_equipment(equipment: &Equipment) -> Option<(&'static str, String)> {
    let feeder = equipment.feeder_type.trim().to_uppercase();
    if feeder.is_empty() {
        return None;
    }

    let code = equipment_type_code(&equipment.tag)?;
    let pattern = resolve_pattern(&code, &feeder)?;

    Some((pattern, feeder_display(&feeder)))
}
