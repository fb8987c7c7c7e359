//! Pattern application pipeline for the instrument collection
//!
//! This module mutates the instrument database in three strictly ordered
//! phases over one shared collection:
//!
//! 1. **Dedup** - collapse instruments sharing a `full_tag`, keeping the
//!    lowest-index occurrence
//! 2. **Motor synthesis** - create missing motor-control instruments for
//!    motorized equipment
//! 3. **Pattern application** - attach IO signals to instruments via the
//!    equipment-driven pattern or the field-instrument heuristics
//!
//! Phase 3 reads the `auto_generated` provenance marker written by phase 2
//! and never reprocesses synthesized records. An instrument receiving no
//! pattern from either path is left without signals; that is not an error.

pub mod applicator;
pub mod classifier;
pub mod deduplication;
pub mod motor_synthesis;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use applicator::PatternApplicator;
pub use classifier::{infer_pattern, is_field_instrument, is_local};
pub use deduplication::deduplicate_instruments;
pub use motor_synthesis::synthesize_motor_instruments;
pub use stats::ApplyStats;
