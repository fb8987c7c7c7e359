//! Instrument deduplication by canonical tag

use crate::app::models::Instrument;
use std::collections::HashSet;
use tracing::{debug, info};

/// Collapse instruments sharing a `full_tag`
///
/// For each group of duplicates only the lowest-index occurrence survives;
/// collection order is otherwise preserved. Returns the deduplicated
/// collection and the number of records removed.
pub fn deduplicate_instruments(instruments: Vec<Instrument>) -> (Vec<Instrument>, usize) {
    let input_count = instruments.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(input_count);
    let mut deduplicated = Vec::with_capacity(input_count);

    for instrument in instruments {
        let full_tag = instrument.full_tag().to_string();
        if seen.insert(full_tag.clone()) {
            deduplicated.push(instrument);
        } else {
            debug!("Removing duplicate instrument {}", full_tag);
        }
    }

    let removed = input_count - deduplicated.len();
    if removed > 0 {
        info!(
            "Deduplication complete: removed {} duplicate(s), {} instruments remaining",
            removed,
            deduplicated.len()
        );
    }

    (deduplicated, removed)
}
