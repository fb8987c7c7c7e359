//! Tests for equipment tag normalization and the alias registry

use crate::app::models::Equipment;

pub mod registry_tests;

/// Build an equipment entry with just a tag and feeder type
pub fn equipment(tag: &str, feeder_type: &str) -> Equipment {
    Equipment {
        tag: tag.to_string(),
        feeder_type: feeder_type.to_string(),
        ..Default::default()
    }
}
