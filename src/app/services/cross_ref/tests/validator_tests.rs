//! Referential check tests

use super::{control_loop, database, instrument, registry};
use crate::app::models::{Electrical, IOSignal, InstrumentTag, TagField};
use crate::app::services::cross_ref::validator::{
    check_equipment_refs, check_io_point_uniqueness, check_loop_integrity, check_pid_refs,
    check_tag_consistency,
};
use crate::app::services::cross_ref::{Check, CrossRefValidator, Severity};

fn signal(io_point_id: &str) -> IOSignal {
    IOSignal {
        io_point_id: io_point_id.to_string(),
        signal_function: "Status".to_string(),
        io_type: "DI".to_string(),
        signal_type: "24V DC".to_string(),
        termination: "PLC".to_string(),
        component_type: String::new(),
        plc_tag: String::new(),
        field_tag: String::new(),
        suffix: String::new(),
        description: String::new(),
        protocol: None,
        marshalling: None,
        pattern_source: None,
        electrical: Electrical::default(),
    }
}

#[test]
fn test_known_equipment_reference_passes() {
    let reg = registry(&["300-P-01"]);
    let db = database(vec![instrument("300-PIT-01", Some("300-P-01"))], Vec::new(), &[]);
    assert!(check_equipment_refs(&db, &reg).is_empty());
}

#[test]
fn test_unknown_equipment_reference_flagged() {
    let reg = registry(&["300-P-01"]);
    let db = database(vec![instrument("300-PIT-01", Some("300-P-99"))], Vec::new(), &[]);
    let findings = check_equipment_refs(&db, &reg);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("300-P-99"));
    assert_eq!(findings[0].severity, Severity::Error);
}

#[test]
fn test_parenthetical_description_stripped() {
    let reg = registry(&["200-T-06"]);
    let db = database(
        vec![instrument("200-LIT-06", Some("200-T-06 (Digester Tank No. 6)"))],
        Vec::new(),
        &[],
    );
    assert!(check_equipment_refs(&db, &reg).is_empty());
}

#[test]
fn test_paired_suffix_reference_resolves_via_alias() {
    // "202-B-01/02" indexes as "202-B-01" and "202-B-02"
    let reg = registry(&["202-B-01/02"]);
    let db = database(vec![instrument("202-XV-02", Some("202-B-02"))], Vec::new(), &[]);
    assert!(check_equipment_refs(&db, &reg).is_empty());
}

#[test]
fn test_pid_reference_checked_against_source_pids() {
    let mut with_pid = instrument("200-FIT-01", None);
    with_pid.location.pid_reference = Some("PID-002".to_string());
    let db = database(vec![with_pid], Vec::new(), &["PID-001"]);

    let findings = check_pid_refs(&db);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("PID-002"));
}

#[test]
fn test_missing_pid_reference_is_not_a_finding() {
    let db = database(vec![instrument("200-FIT-01", None)], Vec::new(), &["PID-001"]);
    assert!(check_pid_refs(&db).is_empty());
}

#[test]
fn test_duplicate_loop_key_and_missing_loop_are_distinct_findings() {
    let mut orphan = instrument("200-FIT-01", None);
    orphan.loop_key = Some("FIT-99".to_string());

    let db = database(
        vec![orphan],
        vec![control_loop("FIT-01", "F"), control_loop("FIT-01", "F")],
        &[],
    );

    let findings = check_loop_integrity(&db);
    assert_eq!(findings.len(), 2);
    assert!(findings[0].message.contains("Duplicate loop_key: FIT-01"));
    assert!(findings[1].message.contains("non-existent loop_key 'FIT-99'"));
}

#[test]
fn test_loop_variable_mismatch_flagged() {
    let mut inst = instrument("200-FIT-01", None);
    inst.loop_key = Some("LIT-01".to_string());

    let db = database(vec![inst], vec![control_loop("LIT-01", "L")], &[]);

    let findings = check_loop_integrity(&db);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("doesn't match loop variable 'L'"));
}

#[test]
fn test_missing_loop_key_on_instrument_flagged() {
    let db = database(vec![instrument("200-FIT-01", None)], Vec::new(), &[]);
    let findings = check_loop_integrity(&db);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("Missing required loop_key"));
}

#[test]
fn test_duplicate_io_point_reports_both_owners() {
    let mut a = instrument("200-FIT-01", None);
    a.io_signals = vec![signal("io-1")];
    let mut b = instrument("200-LIT-02", None);
    b.io_signals = vec![signal("io-1")];

    let db = database(vec![a, b], Vec::new(), &[]);
    let findings = check_io_point_uniqueness(&db);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("200-FIT-01"));
    assert!(findings[0].message.contains("200-LIT-02"));
}

#[test]
fn test_tag_consistency_mismatch_flagged() {
    let mut inst = instrument("200-FIT-01", None);
    if let TagField::Structured(tag) = &mut inst.tag {
        tag.loop_number = "02".to_string();
    }

    let db = database(vec![inst], Vec::new(), &[]);
    let findings = check_tag_consistency(&db);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("200-FIT-02"));
}

#[test]
fn test_raw_tags_skip_consistency_check() {
    let raw = instrument("FEED TANK LEVEL", None);
    let db = database(vec![raw], Vec::new(), &[]);
    assert!(check_tag_consistency(&db).is_empty());
}

#[test]
fn test_consistency_is_case_insensitive() {
    let tag = InstrumentTag {
        area: "200".to_string(),
        variable: "F".to_string(),
        function: "IT".to_string(),
        modifier: String::new(),
        loop_number: "01".to_string(),
        suffix: String::new(),
        full_tag: "200-fit-01".to_string(),
    };
    let mut inst = instrument("200-FIT-01", None);
    inst.tag = TagField::Structured(tag);

    let db = database(vec![inst], Vec::new(), &[]);
    assert!(check_tag_consistency(&db).is_empty());
}

#[test]
fn test_full_run_accumulates_across_checks() {
    let reg = registry(&["300-P-01"]);

    let mut orphan = instrument("300-PIT-09", Some("300-P-99"));
    orphan.loop_key = Some("PIT-09".to_string());

    let db = database(vec![orphan], Vec::new(), &[]);
    let report = CrossRefValidator::new(Some(&reg)).validate(&db);

    assert_eq!(report.error_count(), 2);
    assert_eq!(report.findings_for(Check::EquipmentRefs).count(), 1);
    assert_eq!(report.findings_for(Check::LoopIntegrity).count(), 1);
    assert!(!report.passed(false));
}

#[test]
fn test_clean_database_passes() {
    let reg = registry(&["300-P-01"]);
    let mut inst = instrument("300-PIT-01", Some("300-P-01"));
    inst.loop_key = Some("PIT-01".to_string());
    inst.location.pid_reference = Some("PID-001".to_string());

    let db = database(vec![inst], vec![control_loop("PIT-01", "P")], &["PID-001"]);
    let report = CrossRefValidator::new(Some(&reg)).validate(&db);
    assert!(report.passed(true));
}
