//! Counters for one pattern application run

/// Per-phase counters and collected warnings for an apply run
#[derive(Debug, Default, Clone)]
pub struct ApplyStats {
    /// Instruments present after deduplication
    pub total_instruments: usize,

    /// Duplicate records removed in phase 1
    pub duplicates_removed: usize,

    /// Motor-control instruments synthesized in phase 2
    pub motors_created: usize,

    /// Instruments that received an equipment-driven pattern
    pub equipment_patterns_applied: usize,

    /// Instruments that received a field-classifier pattern
    pub field_patterns_applied: usize,

    /// IO signals generated across all phases
    pub signals_generated: usize,

    /// Instruments skipped because they already carry IO signals
    pub skipped_existing: usize,

    /// Local instruments skipped (no PLC connection)
    pub skipped_local: usize,

    /// Instruments that matched neither path; left without signals
    pub unmatched: usize,

    /// Non-fatal problems collected during the run
    pub warnings: Vec<String>,
}

impl ApplyStats {
    /// Total patterns applied across both paths
    pub fn patterns_applied(&self) -> usize {
        self.equipment_patterns_applied + self.field_patterns_applied
    }

    /// One-line summary for logs and terminal output
    pub fn summary(&self) -> String {
        format!(
            "{} instruments | {} duplicates removed | {} motors created | \
             {} patterns applied ({} equipment, {} field) | {} signals | \
             {} skipped (existing), {} local, {} unmatched",
            self.total_instruments,
            self.duplicates_removed,
            self.motors_created,
            self.patterns_applied(),
            self.equipment_patterns_applied,
            self.field_patterns_applied,
            self.signals_generated,
            self.skipped_existing,
            self.skipped_local,
            self.unmatched
        )
    }
}
