//! Tests for the referential validator and the auto-fix pass

mod validator_tests;

use crate::app::models::{
    Database, Equipment, Instrument, Location, Loop, Provenance, Revision, SourcePid, TagField,
};
use crate::app::services::equipment_registry::EquipmentRegistry;
use crate::app::services::tag_codec;

/// Registry over plain-tag equipment records
pub fn registry(tags: &[&str]) -> EquipmentRegistry {
    EquipmentRegistry::from_list(
        tags.iter()
            .map(|tag| Equipment {
                tag: tag.to_string(),
                ..Equipment::default()
            })
            .collect(),
    )
}

/// Instrument with a decoded tag and an equipment reference
pub fn instrument(tag: &str, equipment_tag: Option<&str>) -> Instrument {
    let field = match tag_codec::decode(tag) {
        Some(structured) => TagField::Structured(structured),
        None => TagField::Raw(tag.to_string()),
    };
    Instrument {
        instrument_id: format!("test-{tag}"),
        equipment_tag: equipment_tag.map(str::to_string),
        tag: field,
        instrument_type: String::new(),
        loop_key: None,
        location: Location::default(),
        io_signals: Vec::new(),
        provenance: Provenance::default(),
    }
}

/// Database shell with instruments, loops and source P&IDs
pub fn database(
    instruments: Vec<Instrument>,
    loops: Vec<Loop>,
    source_pids: &[&str],
) -> Database {
    Database {
        project_id: "TEST".to_string(),
        revision: Revision::default(),
        instruments,
        loops,
        source_pids: source_pids
            .iter()
            .map(|p| SourcePid {
                pid_number: p.to_string(),
            })
            .collect(),
    }
}

/// Loop record with a key and variable
pub fn control_loop(loop_key: &str, variable: &str) -> Loop {
    Loop {
        loop_key: Some(loop_key.to_string()),
        variable: variable.to_string(),
    }
}
