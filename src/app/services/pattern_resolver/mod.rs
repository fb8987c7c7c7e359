//! Equipment-to-IO-pattern resolution and signal generation
//!
//! [`resolver`] maps an equipment record (type code extracted from its tag,
//! plus its electrical feeder type) to a named IO pattern and a display
//! label. [`signal_generator`] instantiates a pattern's templates into
//! concrete IO signal records for one base tag.
//!
//! An unmappable equipment/feeder combination is not an error: it simply
//! receives no generated signals.

pub mod resolver;
pub mod signal_generator;

#[cfg(test)]
pub mod tests;

pub use resolver::{equipment_type_code, resolve_pattern, resolve_pattern_for_equipment};
pub use signal_generator::generate_io_signals;
