//! Tests for equipment type extraction and pattern lookup

use crate::app::models::Equipment;
use crate::app::services::pattern_resolver::{
    equipment_type_code, resolve_pattern, resolve_pattern_for_equipment,
};

fn equipment(tag: &str, feeder_type: &str) -> Equipment {
    Equipment {
        tag: tag.to_string(),
        feeder_type: feeder_type.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_equipment_type_code_long_form() {
    assert_eq!(equipment_type_code("200-P-01"), Some("P".to_string()));
    assert_eq!(equipment_type_code("1200-MOV-03"), Some("MOV".to_string()));
    assert_eq!(equipment_type_code("A200-CV-01"), Some("CV".to_string()));
    // Paired suffixes do not disturb code extraction
    assert_eq!(equipment_type_code("202-B-01/02"), Some("B".to_string()));
}

#[test]
fn test_equipment_type_code_short_form() {
    assert_eq!(equipment_type_code("MOV-01"), Some("MOV".to_string()));
    assert_eq!(equipment_type_code("SOV-12"), Some("SOV".to_string()));
}

#[test]
fn test_equipment_type_code_unrecognized() {
    assert_eq!(equipment_type_code("FEED TANK"), None);
    assert_eq!(equipment_type_code(""), None);
    assert_eq!(equipment_type_code("200-P"), None);
}

#[test]
fn test_resolve_pattern_lookup() {
    assert_eq!(resolve_pattern("P", "VFD"), Some("pump_vfd"));
    assert_eq!(resolve_pattern("P", "DOL"), Some("pump_dol"));
    // DEFAULT fallback for unknown feeders
    assert_eq!(resolve_pattern("MOV", "UNKNOWN"), Some("valve_onoff_electric"));
    // Unknown equipment type yields nothing
    assert_eq!(resolve_pattern("ZZ", "DOL"), None);
    // Known type without matching feeder and no DEFAULT yields nothing
    assert_eq!(resolve_pattern("P", "HYDRAULIC"), None);
}

#[test]
fn test_resolve_pattern_normalizes_feeder() {
    assert_eq!(resolve_pattern("P", " vfd "), Some("pump_vfd"));
    assert_eq!(resolve_pattern("CV", "onoff-electric"), Some("valve_onoff_electric"));
}

#[test]
fn test_resolve_for_equipment() {
    let (pattern, display) = resolve_pattern_for_equipment(&equipment("300-P-01", "VFD")).unwrap();
    assert_eq!(pattern, "pump_vfd");
    assert_eq!(display, "VFD");

    let (pattern, display) =
        resolve_pattern_for_equipment(&equipment("200-BL-02", "SOFT-STARTER")).unwrap();
    assert_eq!(pattern, "motor_soft_starter");
    assert_eq!(display, "Soft-Starter");
}

#[test]
fn test_resolve_for_equipment_missing_pieces() {
    // No feeder type
    assert!(resolve_pattern_for_equipment(&equipment("300-P-01", "")).is_none());
    // No recognizable type code
    assert!(resolve_pattern_for_equipment(&equipment("FEED TANK", "DOL")).is_none());
    // Unmapped type code
    assert!(resolve_pattern_for_equipment(&equipment("200-TK-01", "DOL")).is_none());
}

#[test]
fn test_unknown_feeder_display_falls_back_to_raw() {
    let (_, display) = resolve_pattern_for_equipment(&equipment("200-MOV-01", "HYDRAULIC")).unwrap();
    assert_eq!(display, "HYDRAULIC");
}
