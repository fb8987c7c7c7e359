//! Ordered pattern application pipeline

use crate::app::models::{Database, PatternTable};
use crate::config::RunConfig;
use crate::app::services::equipment_registry::{EquipmentRegistry, expand_tag_variants};
use crate::app::services::pattern_resolver::{
    equipment_type_code, generate_io_signals, resolve_pattern_for_equipment,
};
use crate::constants::{feeder_display, is_pattern_equipment_type};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::classifier;
use super::deduplication::deduplicate_instruments;
use super::motor_synthesis::synthesize_motor_instruments;
use super::stats::ApplyStats;

/// Drives dedup, motor synthesis and pattern application over one database
///
/// The phases run strictly in order over the shared instrument collection;
/// phase 3 reads the provenance marker phase 2 writes and never reprocesses
/// synthesized records.
#[derive(Debug)]
pub struct PatternApplicator<'a> {
    registry: &'a EquipmentRegistry,
    patterns: &'a PatternTable,
}

impl<'a> PatternApplicator<'a> {
    /// Create an applicator over an equipment registry and pattern table
    pub fn new(registry: &'a EquipmentRegistry, patterns: &'a PatternTable) -> Self {
        Self { registry, patterns }
    }

    /// Run the full pipeline, mutating the database in place
    pub fn apply(&self, database: &mut Database, config: &RunConfig) -> ApplyStats {
        let mut stats = ApplyStats::default();

        info!(
            "Applying IO patterns: {} instruments, {} equipment records",
            database.instruments.len(),
            self.registry.equipment_count()
        );

        // Equipment that should drive IO generation but cannot
        for equipment in self.registry.equipment() {
            if equipment.feeder_type.trim().is_empty() {
                if let Some(code) = equipment_type_code(&equipment.tag) {
                    if is_pattern_equipment_type(&code) {
                        stats.warnings.push(format!(
                            "Missing feeder_type for {} (required for IO generation)",
                            equipment.tag
                        ));
                    }
                }
            }
        }

        // Phase 1: dedup by full_tag, lowest index wins
        let instruments = std::mem::take(&mut database.instruments);
        let (deduplicated, removed) = deduplicate_instruments(instruments);
        database.instruments = deduplicated;
        stats.duplicates_removed = removed;

        // Phase 2: synthesize missing motor-control instruments
        let motor_report = synthesize_motor_instruments(database, self.registry, self.patterns);
        stats.motors_created = motor_report.created_tags.len();
        stats.warnings.extend(motor_report.warnings);

        // Phase 3: per-instrument pattern application
        let progress = if config.show_progress {
            let pb = ProgressBar::new(database.instruments.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message("Applying patterns");
            Some(pb)
        } else {
            None
        };

        for instrument in database.instruments.iter_mut() {
            if let Some(pb) = &progress {
                pb.inc(1);
            }

            // Never reprocess the previous phase's output
            if instrument.is_auto_generated() {
                continue;
            }
            if !instrument.io_signals.is_empty() {
                stats.skipped_existing += 1;
                continue;
            }
            if classifier::is_local(instrument) {
                stats.skipped_local += 1;
                continue;
            }

            // Resolve equipment: exact match first, then normalized variants
            let equipment = instrument.equipment_tag.as_deref().and_then(|raw| {
                self.registry.resolve(raw).or_else(|| {
                    expand_tag_variants(raw)
                        .iter()
                        .find_map(|variant| self.registry.resolve(variant))
                })
            });

            let mut resolved = None;
            if let Some(equipment) = equipment {
                if !classifier::is_field_instrument(instrument) {
                    if let Some((pattern_name, label)) = resolve_pattern_for_equipment(equipment) {
                        resolved = Some((pattern_name, label, true));
                    }
                }
            }

            // No equipment-driven pattern: fall back to the field classifier
            if resolved.is_none() {
                if let Some(pattern_name) = classifier::infer_pattern(instrument) {
                    resolved = Some((pattern_name, feeder_display("DEFAULT"), false));
                }
            }

            let Some((pattern_name, feeder_label, from_equipment)) = resolved else {
                stats.unmatched += 1;
                continue;
            };

            let Some(pattern) = self.patterns.get(pattern_name) else {
                stats.warnings.push(format!(
                    "Pattern '{}' not found in pattern table (instrument {})",
                    pattern_name,
                    instrument.full_tag()
                ));
                continue;
            };

            let mut io_signals =
                generate_io_signals(pattern, instrument.full_tag(), &feeder_label);
            for signal in &mut io_signals {
                signal.pattern_source = Some(pattern_name.to_string());
            }

            debug!(
                "{}: {} [{}] ({} IO)",
                instrument.full_tag(),
                pattern_name,
                feeder_label,
                io_signals.len()
            );

            stats.signals_generated += io_signals.len();
            if from_equipment {
                stats.equipment_patterns_applied += 1;
            } else {
                stats.field_patterns_applied += 1;
            }
            instrument.io_signals = io_signals;
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Pattern application complete");
        }

        // Motor synthesis also generates signals
        stats.signals_generated += database
            .instruments
            .iter()
            .filter(|i| i.is_auto_generated())
            .map(|i| i.io_signals.len())
            .sum::<usize>();

        stats.total_instruments = database.instruments.len();
        info!("Pattern application complete: {}", stats.summary());

        stats
    }
}
