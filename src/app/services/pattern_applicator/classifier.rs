//! Field instrument classification heuristics
//!
//! Decides, independently of equipment linkage, whether an instrument is a
//! local device with no PLC connection and which field pattern a connected
//! instrument should receive.

use crate::app::models::Instrument;
use crate::app::services::tag_codec;
use crate::constants::{
    FIELD_TYPE_KEYWORDS, LOCAL_GAUGE_PREFIXES, MANUAL_TYPE_KEYWORDS, MANUAL_VALVE_PREFIXES,
    MOTOR_TYPE_KEYWORDS,
};

/// The leading alphabetic letter group of a tag ("200-PG-01" -> "PG")
fn tag_letter_prefix(full_tag: &str) -> &str {
    full_tag
        .split('-')
        .find(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or("")
}

/// Measured-variable and function letters, decoding raw tags on the fly
fn tag_letters(instrument: &Instrument) -> (String, String) {
    if let Some(tag) = instrument.tag.structured() {
        (tag.variable.clone(), tag.function.clone())
    } else if let Some(tag) = tag_codec::decode(instrument.tag.full_tag()) {
        (tag.variable, tag.function)
    } else {
        (String::new(), String::new())
    }
}

/// Check whether an instrument is a local device with no PLC connection
///
/// True for pure gauges (function letters exactly {G}), tags with a local
/// gauge or manual valve/strainer prefix, and instrument types naming a
/// manual valve or strainer. Local instruments never receive a pattern.
pub fn is_local(instrument: &Instrument) -> bool {
    let (_, function) = tag_letters(instrument);
    if function == "G" {
        return true;
    }

    let prefix = tag_letter_prefix(instrument.tag.full_tag());
    if LOCAL_GAUGE_PREFIXES.contains(&prefix) || MANUAL_VALVE_PREFIXES.contains(&prefix) {
        return true;
    }

    let instrument_type = instrument.instrument_type.to_lowercase();
    MANUAL_TYPE_KEYWORDS
        .iter()
        .any(|kw| instrument_type.contains(kw))
}

/// Classify an instrument as field-mounted measurement gear or not
///
/// Used by the orchestrator to keep field instruments off the
/// equipment-driven motor patterns. Motor-control keywords win over field
/// keywords; otherwise a measured variable with a sensing, indicating,
/// transmitting, switching or gauging function letter marks a field device.
pub fn is_field_instrument(instrument: &Instrument) -> bool {
    let instrument_type = instrument.instrument_type.to_lowercase();

    if MOTOR_TYPE_KEYWORDS.iter().any(|kw| instrument_type.contains(kw)) {
        return false;
    }
    if FIELD_TYPE_KEYWORDS.iter().any(|kw| instrument_type.contains(kw)) {
        return true;
    }

    let (variable, function) = tag_letters(instrument);
    !variable.is_empty() && function.chars().any(|c| matches!(c, 'T' | 'I' | 'S' | 'E' | 'G'))
}

/// Infer a field pattern for an instrument outside equipment-driven flow
///
/// Priority order:
/// 1. Local instruments never get a pattern
/// 2. Transmit+Indicate functions, or a transmitter type -> transmitter
/// 3. Switch function -> switch pattern by measured variable
/// 4. Discrete-control variable with a valve function -> on/off valve
/// 5. Analyzer type -> transmitter
pub fn infer_pattern(instrument: &Instrument) -> Option<&'static str> {
    if is_local(instrument) {
        return None;
    }

    let (variable, function) = tag_letters(instrument);
    let instrument_type = instrument.instrument_type.to_lowercase();

    if (function.contains('T') && function.contains('I')) || instrument_type == "transmitter" {
        return Some("transmitter");
    }

    if function.contains('S') {
        return Some(match variable.as_str() {
            "L" => "level_switch",
            "P" => "pressure_switch",
            "T" => "temperature_switch",
            "F" => "flow_switch",
            _ => "level_switch",
        });
    }

    if variable == "X" && function.contains('V') {
        return Some("valve_onoff_electric");
    }

    if instrument_type == "analyzer" || instrument_type == "analyser" {
        return Some("transmitter");
    }

    None
}
