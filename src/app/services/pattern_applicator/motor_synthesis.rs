//! Motor-control instrument synthesis
//!
//! Motorized equipment needs a motor-control instrument carrying the
//! starter/drive IO even when no such instrument was extracted from the
//! P&IDs. This pass creates the missing records, skipping equipment whose
//! motor instrument already exists under any normalized tag variant.

use crate::app::models::{Database, Instrument, Location, PatternTable, Provenance, TagField};
use crate::app::services::equipment_registry::{
    EquipmentRegistry, all_variants, base_tag, expand_tag_variants,
};
use crate::app::services::pattern_resolver::{generate_io_signals, resolve_pattern_for_equipment};
use crate::constants::{AUTO_GENERATED_SOURCE, MOTOR_TAG_SUFFIX, MOTOR_TYPE_KEYWORDS};
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

/// Outcome of one motor synthesis run
#[derive(Debug, Default, Clone)]
pub struct MotorSynthesisReport {
    /// Tags of the instruments created, in creation order
    pub created_tags: Vec<String>,

    /// Non-fatal problems (missing patterns etc.)
    pub warnings: Vec<String>,
}

/// True for instruments that already act as a motor-control record
fn is_motor_instrument(instrument: &Instrument) -> bool {
    if instrument.full_tag().ends_with(MOTOR_TAG_SUFFIX) {
        return true;
    }
    let instrument_type = instrument.instrument_type.to_lowercase();
    MOTOR_TYPE_KEYWORDS.iter().any(|kw| instrument_type.contains(kw))
}

/// Create missing motor-control instruments for motorized equipment
///
/// For each equipment record with a non-empty feeder type and a resolvable
/// IO pattern: if no existing motor instrument covers any of its normalized
/// tag variants, append a new instrument tagged `{base_tag}-M` with the
/// pattern's signals. Synthesized records carry the `auto_generated`
/// provenance marker that later passes rely on to exclude them.
pub fn synthesize_motor_instruments(
    database: &mut Database,
    registry: &EquipmentRegistry,
    patterns: &PatternTable,
) -> MotorSynthesisReport {
    let mut report = MotorSynthesisReport::default();

    // Index existing motor instruments by their normalized equipment variants
    let mut motor_covered: HashSet<String> = HashSet::new();
    for instrument in &database.instruments {
        if !is_motor_instrument(instrument) {
            continue;
        }
        if let Some(equipment_tag) = &instrument.equipment_tag {
            motor_covered.extend(expand_tag_variants(equipment_tag));
        }
    }

    for equipment in registry.equipment() {
        if equipment.feeder_type.trim().is_empty() {
            continue;
        }

        let Some((pattern_name, feeder_label)) = resolve_pattern_for_equipment(equipment) else {
            continue;
        };

        let variants = all_variants(equipment);
        if variants.iter().any(|v| motor_covered.contains(v)) {
            debug!("Motor instrument already exists for {}", equipment.tag);
            continue;
        }

        let Some(pattern) = patterns.get(pattern_name) else {
            report.warnings.push(format!(
                "Pattern '{}' not found in pattern table (equipment {})",
                pattern_name, equipment.tag
            ));
            continue;
        };

        let base = base_tag(equipment.tag.split(',').next().unwrap_or(&equipment.tag).trim());
        let motor_tag = format!("{base}{MOTOR_TAG_SUFFIX}");

        let mut io_signals = generate_io_signals(pattern, &motor_tag, &feeder_label);
        for signal in &mut io_signals {
            signal.pattern_source = Some(pattern_name.to_string());
        }

        debug!(
            "Synthesizing motor instrument {} ({} [{}], {} IO)",
            motor_tag,
            pattern_name,
            feeder_label,
            io_signals.len()
        );

        database.instruments.push(Instrument {
            instrument_id: Uuid::new_v4().to_string(),
            equipment_tag: Some(base),
            tag: TagField::Raw(motor_tag.clone()),
            instrument_type: "Motor Control".to_string(),
            loop_key: None,
            location: Location::default(),
            io_signals,
            provenance: Provenance {
                extraction_source: AUTO_GENERATED_SOURCE.to_string(),
            },
        });

        // Cover the new instrument's variants so alias-overlapping
        // equipment entries do not synthesize twice
        motor_covered.extend(variants);
        report.created_tags.push(motor_tag);
    }

    if !report.created_tags.is_empty() {
        info!(
            "Motor synthesis complete: created {} instrument(s)",
            report.created_tags.len()
        );
    }

    report
}
