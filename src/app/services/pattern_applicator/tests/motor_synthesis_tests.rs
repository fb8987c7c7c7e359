//! Motor instrument synthesis tests

use super::{database, equipment, instrument, pump_vfd_table};
use crate::app::services::equipment_registry::EquipmentRegistry;
use crate::app::services::pattern_applicator::synthesize_motor_instruments;
use crate::constants::AUTO_GENERATED_SOURCE;

#[test]
fn test_synthesizes_missing_motor_instrument() {
    let registry = EquipmentRegistry::from_list(vec![equipment("300-P-01", "VFD")]);
    let patterns = pump_vfd_table();
    let mut db = database(Vec::new());

    let report = synthesize_motor_instruments(&mut db, &registry, &patterns);

    assert_eq!(report.created_tags, vec!["300-P-01-M"]);
    assert_eq!(db.instruments.len(), 1);

    let motor = &db.instruments[0];
    assert_eq!(motor.full_tag(), "300-P-01-M");
    assert_eq!(motor.equipment_tag.as_deref(), Some("300-P-01"));
    assert_eq!(motor.instrument_type, "Motor Control");
    assert!(motor.is_auto_generated());
    assert_eq!(motor.provenance.extraction_source, AUTO_GENERATED_SOURCE);

    assert_eq!(motor.io_signals.len(), 2);
    let run = &motor.io_signals[0];
    assert_eq!(run.plc_tag, "300-P-01-M-RUN");
    assert_eq!(run.pattern_source.as_deref(), Some("pump_vfd"));
    assert_eq!(run.electrical.feeder_type, "VFD");
}

#[test]
fn test_existing_motor_instrument_suppresses_synthesis() {
    let registry = EquipmentRegistry::from_list(vec![equipment("300-P-01", "VFD")]);
    let patterns = pump_vfd_table();

    let mut existing = instrument("300-P-01-M", "Motor Starter");
    existing.equipment_tag = Some("300-P-01".to_string());
    let mut db = database(vec![existing]);

    let report = synthesize_motor_instruments(&mut db, &registry, &patterns);

    assert!(report.created_tags.is_empty());
    assert_eq!(db.instruments.len(), 1);
}

#[test]
fn test_existing_motor_under_paired_suffix_variant() {
    // The extracted record points at "300-P-01/02"; equipment is "300-P-01"
    let registry = EquipmentRegistry::from_list(vec![equipment("300-P-01/02", "DOL")]);
    let patterns = {
        let mut t = pump_vfd_table();
        let dol = t["pump_vfd"].clone();
        t.insert("pump_dol".to_string(), dol);
        t
    };

    let mut existing = instrument("300-P-01-M", "Motor Control");
    existing.equipment_tag = Some("300-P-01/02".to_string());
    let mut db = database(vec![existing]);

    let report = synthesize_motor_instruments(&mut db, &registry, &patterns);
    assert!(report.created_tags.is_empty());
}

#[test]
fn test_missing_pattern_is_warned_not_fatal() {
    let registry = EquipmentRegistry::from_list(vec![equipment("300-P-01", "VFD")]);
    let patterns = crate::app::models::PatternTable::new();
    let mut db = database(Vec::new());

    let report = synthesize_motor_instruments(&mut db, &registry, &patterns);

    assert!(report.created_tags.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("pump_vfd"));
    assert!(db.instruments.is_empty());
}

#[test]
fn test_equipment_without_feeder_type_is_skipped() {
    let registry = EquipmentRegistry::from_list(vec![equipment("300-P-01", "")]);
    let patterns = pump_vfd_table();
    let mut db = database(Vec::new());

    let report = synthesize_motor_instruments(&mut db, &registry, &patterns);
    assert!(report.created_tags.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_paired_suffix_equipment_uses_base_tag() {
    let registry = EquipmentRegistry::from_list(vec![equipment("400-MX-01/02", "DOL")]);
    let mut patterns = pump_vfd_table();
    let motor = patterns["pump_vfd"].clone();
    patterns.insert("pump_dol".to_string(), motor);

    let mut db = database(Vec::new());
    let report = synthesize_motor_instruments(&mut db, &registry, &patterns);

    assert_eq!(report.created_tags, vec!["400-MX-01-M"]);
    assert_eq!(db.instruments[0].equipment_tag.as_deref(), Some("400-MX-01"));
}
