//! Tests for IO signal generation from templates

use super::pattern;
use crate::app::models::{Pattern, SignalTemplate};
use crate::app::services::pattern_resolver::generate_io_signals;
use std::collections::HashSet;

#[test]
fn test_generates_one_signal_per_template_in_order() {
    let pattern = pattern(&[
        ("RUN", "Status", "DI"),
        ("FLT", "Fault", "DI"),
        ("START", "Command", "DO"),
    ]);

    let signals = generate_io_signals(&pattern, "300-P-01-M", "VFD");
    assert_eq!(signals.len(), 3);
    assert_eq!(signals[0].signal_function, "Status");
    assert_eq!(signals[1].signal_function, "Fault");
    assert_eq!(signals[2].io_type, "DO");
}

#[test]
fn test_suffix_concatenation() {
    let pattern = pattern(&[("RUN", "Status", "DI")]);
    let signals = generate_io_signals(&pattern, "300-P-01-M", "VFD");

    assert_eq!(signals[0].plc_tag, "300-P-01-M-RUN");
    assert_eq!(signals[0].field_tag, "300-P-01-M-RUN");
    assert_eq!(signals[0].suffix, "RUN");
}

#[test]
fn test_empty_suffix_keeps_base_tag() {
    let pattern = Pattern {
        signals: vec![SignalTemplate::default()],
    };
    let signals = generate_io_signals(&pattern, "200-FIT-01", "Direct");

    assert_eq!(signals[0].plc_tag, "200-FIT-01");
    assert_eq!(signals[0].field_tag, "200-FIT-01");
}

#[test]
fn test_template_defaults() {
    let pattern = Pattern {
        signals: vec![SignalTemplate::default()],
    };
    let signals = generate_io_signals(&pattern, "200-FIT-01", "Direct");

    let signal = &signals[0];
    assert_eq!(signal.signal_function, "Status");
    assert_eq!(signal.io_type, "DI");
    assert_eq!(signal.signal_type, "24V DC");
    assert_eq!(signal.termination, "PLC");
    assert_eq!(signal.electrical.feeder_type, "Direct");
    // Stamped by the caller, never by the generator
    assert!(signal.pattern_source.is_none());
    assert!(signal.protocol.is_none());
}

#[test]
fn test_io_point_ids_unique_across_invocations() {
    let pattern = pattern(&[("RUN", "Status", "DI"), ("FLT", "Fault", "DI")]);

    let mut seen = HashSet::new();
    for _ in 0..10 {
        for signal in generate_io_signals(&pattern, "300-P-01-M", "VFD") {
            assert!(seen.insert(signal.io_point_id.clone()), "duplicate io_point_id");
        }
    }
    assert_eq!(seen.len(), 20);
}
