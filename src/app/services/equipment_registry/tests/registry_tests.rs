//! Tests for the alias index over the equipment list

use super::equipment;
use crate::app::models::Equipment;
use crate::app::services::equipment_registry::EquipmentRegistry;

#[test]
fn test_paired_tags_resolve_to_same_record() {
    let registry = EquipmentRegistry::from_list(vec![equipment("202-B-01/02", "DOL")]);

    assert!(registry.contains("202-B-01"));
    assert!(registry.contains("202-B-02"));
    assert!(registry.contains("202-B-01/02"));
    assert!(registry.same_equipment("202-B-01", "202-B-02"));

    let resolved = registry.resolve("202-B-02").unwrap();
    assert_eq!(resolved.tag, "202-B-01/02");
}

#[test]
fn test_first_registration_wins() {
    // Both entries claim 300-P-02; the earlier entry keeps the alias
    let registry = EquipmentRegistry::from_list(vec![
        equipment("300-P-01/02", "VFD"),
        equipment("300-P-02", "DOL"),
    ]);

    let resolved = registry.resolve("300-P-02").unwrap();
    assert_eq!(resolved.feeder_type, "VFD");
    assert_eq!(resolved.tag, "300-P-01/02");
}

#[test]
fn test_quantity_note_sibling_synthesis() {
    let eq = Equipment {
        tag: "200-P-01".to_string(),
        feeder_type: "DOL".to_string(),
        quantity: Some(3),
        quantity_note: "3 units, duty/standby".to_string(),
        ..Default::default()
    };
    let registry = EquipmentRegistry::from_list(vec![eq]);

    assert!(registry.contains("200-P-01"));
    assert!(registry.contains("200-P-02"));
    assert!(registry.contains("200-P-03"));
    assert!(!registry.contains("200-P-04"));
    assert!(registry.same_equipment("200-P-01", "200-P-03"));
}

#[test]
fn test_quantity_without_sibling_note_is_not_expanded() {
    let eq = Equipment {
        tag: "200-P-01".to_string(),
        quantity: Some(3),
        quantity_note: "spares on skid".to_string(),
        ..Default::default()
    };
    let registry = EquipmentRegistry::from_list(vec![eq]);

    assert!(registry.contains("200-P-01"));
    assert!(!registry.contains("200-P-02"));
}

#[test]
fn test_empty_and_unknown_tags() {
    let registry = EquipmentRegistry::from_list(vec![
        equipment("", "DOL"),
        equipment("200-T-06", ""),
    ]);

    assert_eq!(registry.equipment_count(), 2);
    assert!(registry.resolve("200-T-06").is_some());
    assert!(registry.resolve("999-X-99").is_none());
    assert!(!registry.contains(""));
}

#[test]
fn test_comma_list_aliases() {
    let registry = EquipmentRegistry::from_list(vec![equipment("200-P-01, 200-P-02", "VFD")]);

    assert!(registry.same_equipment("200-P-01", "200-P-02"));
    assert!(registry.contains("200-P-01, 200-P-02"));
    assert_eq!(registry.alias_count(), 3);
}
