//! Tests for deduplication, motor synthesis and pattern application

mod motor_synthesis_tests;

use crate::app::models::{
    Database, Equipment, Instrument, Location, Pattern, PatternTable, Provenance, Revision,
    SignalTemplate, TagField,
};
use crate::app::services::tag_codec;

/// Build a bare instrument from a raw tag and type string
pub fn instrument(tag: &str, instrument_type: &str) -> Instrument {
    let field = match tag_codec::decode(tag) {
        Some(structured) => TagField::Structured(structured),
        None => TagField::Raw(tag.to_string()),
    };
    Instrument {
        instrument_id: format!("test-{tag}"),
        equipment_tag: None,
        tag: field,
        instrument_type: instrument_type.to_string(),
        loop_key: None,
        location: Location::default(),
        io_signals: Vec::new(),
        provenance: Provenance {
            extraction_source: "test".to_string(),
        },
    }
}

/// Equipment record with a tag and feeder type
pub fn equipment(tag: &str, feeder_type: &str) -> Equipment {
    Equipment {
        tag: tag.to_string(),
        feeder_type: feeder_type.to_string(),
        quantity: None,
        quantity_note: String::new(),
        description: String::new(),
        area: String::new(),
    }
}

/// Empty database shell for pipeline tests
pub fn database(instruments: Vec<Instrument>) -> Database {
    Database {
        project_id: "TEST".to_string(),
        revision: Revision {
            number: "A".to_string(),
            date: "2026-01-01".to_string(),
            by: "test".to_string(),
        },
        instruments,
        loops: Vec::new(),
        source_pids: Vec::new(),
    }
}

/// Minimal pump_vfd pattern table used across tests
pub fn pump_vfd_table() -> PatternTable {
    let mut table = PatternTable::new();
    table.insert(
        "pump_vfd".to_string(),
        Pattern {
            signals: vec![
                SignalTemplate {
                    suffix: "RUN".to_string(),
                    function: Some("Run Status".to_string()),
                    io_type: Some("DI".to_string()),
                    signal_type: None,
                    component: Some("VFD".to_string()),
                    description: Some("Running feedback".to_string()),
                    protocol: None,
                },
                SignalTemplate {
                    suffix: "SPD".to_string(),
                    function: Some("Speed Reference".to_string()),
                    io_type: Some("AO".to_string()),
                    signal_type: Some("4-20mA".to_string()),
                    component: Some("VFD".to_string()),
                    description: None,
                    protocol: None,
                },
            ],
        },
    );
    table.insert(
        "transmitter".to_string(),
        Pattern {
            signals: vec![SignalTemplate {
                suffix: "PV".to_string(),
                function: Some("Process Value".to_string()),
                io_type: Some("AI".to_string()),
                signal_type: Some("4-20mA".to_string()),
                component: None,
                description: None,
                protocol: None,
            }],
        },
    );
    table
}
