//! Application constants for tagsync
//!
//! This module contains the fixed ISA-5.1 letter tables, category rules,
//! equipment-type to IO-pattern mappings and classification keyword lists
//! used throughout the application. All tables are immutable configuration
//! constructed once at startup.

use std::collections::HashMap;
use std::sync::LazyLock;

// =============================================================================
// ISA-5.1 Letter Tables
// =============================================================================

/// Modifier letters, only valid as the final letter of the function group
pub const MODIFIER_LETTERS: &[char] = &['H', 'L', 'A'];

/// Fixed motor-instrument tag suffix (e.g. "300-P-01-M")
pub const MOTOR_TAG_SUFFIX: &str = "-M";

/// Valid IO type codes for an IO signal
pub const IO_TYPES: &[&str] = &["DI", "DO", "AI", "AO", "PI", "PO"];

/// ISA-5.1 first-letter (measured variable) description
pub fn first_letter_name(letter: char) -> &'static str {
    match letter {
        'A' => "Analysis",
        'B' => "Burner/Combustion",
        'C' => "Conductivity",
        'D' => "Density",
        'E' => "Voltage",
        'F' => "Flow Rate",
        'G' => "Gaging/Position",
        'H' => "Hand/Manual",
        'I' => "Current",
        'J' => "Power",
        'K' => "Time",
        'L' => "Level",
        'M' => "Moisture",
        'N' | 'O' => "User Choice",
        'P' => "Pressure",
        'Q' => "Quantity",
        'R' => "Radiation",
        'S' => "Speed",
        'T' => "Temperature",
        'U' => "Multivariable",
        'V' => "Vibration",
        'W' => "Weight",
        'X' => "Unclassified",
        'Y' => "Event/State",
        'Z' => "Position",
        _ => "Unknown",
    }
}

/// ISA-5.1 succeeding-letter (function) description
pub fn succeeding_letter_name(letter: char) -> &'static str {
    match letter {
        'A' => "Alarm",
        'B' => "User Choice",
        'C' => "Control",
        'D' => "Differential",
        'E' => "Sensing Element",
        'G' => "Glass/Viewing",
        'H' => "High",
        'I' => "Indicate",
        'K' => "Control Station",
        'L' => "Low/Light",
        'M' => "Middle",
        'N' => "User Choice",
        'O' => "Orifice",
        'P' => "Point/Test",
        'Q' => "Integrate/Totalize",
        'R' => "Record",
        'S' => "Switch/Safety",
        'T' => "Transmit",
        'U' => "Multifunction",
        'V' => "Valve",
        'W' => "Well",
        'X' => "Unclassified",
        'Y' => "Relay/Compute",
        'Z' => "Driver/Actuator",
        _ => "Unknown",
    }
}

/// Check if a letter is a valid ISA-5.1 first letter
///
/// Every uppercase letter carries a first-letter meaning in ISA-5.1.
pub fn is_valid_first_letter(letter: char) -> bool {
    letter.is_ascii_uppercase()
}

/// Check if a letter is a valid ISA-5.1 succeeding letter
pub fn is_valid_succeeding_letter(letter: char) -> bool {
    succeeding_letter_name(letter) != "Unknown"
}

/// Instrument category derived from function letters
///
/// The first function letter (in tag order) with a category entry wins;
/// tags with no categorized function letter are "primary".
pub fn category_for_function(function: &str) -> &'static str {
    for letter in function.chars() {
        match letter {
            'E' => return "primary",
            'T' => return "transmitting",
            'I' => return "indicating",
            'R' => return "recording",
            'C' => return "controlling",
            'S' => return "switching",
            'A' => return "safety",
            _ => continue,
        }
    }
    "primary"
}

// =============================================================================
// Equipment Type -> Feeder Type -> IO Pattern Mapping
// =============================================================================
// Single source of truth for equipment type + feeder type -> IO pattern.
// Equipment types come from the tag prefix (P, PU, BL, MX, CV, MOV, SOV, ...),
// feeder types from the equipment list (DOL, VFD, SOFT-STARTER, VENDOR, ...).

static MOTOR_PATTERNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("DOL", "pump_dol"),
        ("VFD", "pump_vfd"),
        ("VFD-EXT", "pump_vfd_extended"),
        ("VFD_EXTENDED", "pump_vfd_extended"),
        ("SOFT-STARTER", "motor_soft_starter"),
        ("SOFT_STARTER", "motor_soft_starter"),
        // Vendor packages get minimal IO
        ("VENDOR", "pump_dol"),
        ("VENDOR_PANEL", "pump_dol"),
    ])
});

static PUMP_PATTERNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("DOL", "pump_dol"),
        ("VFD", "pump_vfd"),
        ("VFD-EXT", "pump_vfd_extended"),
        ("SOFT-STARTER", "motor_soft_starter"),
        ("VENDOR", "pump_dol"),
        ("AODD", "aodd_pump"),
        ("METERING", "metering_pump_speed"),
        ("METERING-FULL", "metering_pump_full"),
    ])
});

static VALVE_PATTERNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("MOD-ELECTRIC", "valve_modulating_electric"),
        ("MOD-PNEUMATIC", "valve_modulating_pneumatic"),
        ("ONOFF-ELECTRIC", "valve_onoff_electric"),
        ("ONOFF-PNEUMATIC", "valve_onoff_pneumatic"),
        ("POSITIONER", "valve_positioner"),
        ("SOLENOID", "solenoid_valve"),
    ])
});

static MOV_PATTERNS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from([("DEFAULT", "valve_onoff_electric")]));

static SOV_PATTERNS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from([("DEFAULT", "solenoid_valve")]));

/// Equipment type code -> feeder pattern table
static EQUIPMENT_PATTERN_MAP: LazyLock<HashMap<&'static str, &'static HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            // Motors and rotating equipment
            ("P", &*PUMP_PATTERNS),
            ("PU", &*PUMP_PATTERNS),
            ("BL", &*MOTOR_PATTERNS),
            ("MX", &*MOTOR_PATTERNS),
            ("AG", &*MOTOR_PATTERNS),
            ("CP", &*MOTOR_PATTERNS),
            ("FN", &*MOTOR_PATTERNS),
            // Valves
            ("CV", &*VALVE_PATTERNS),
            ("MOV", &*MOV_PATTERNS),
            ("SOV", &*SOV_PATTERNS),
            ("BV", &*VALVE_PATTERNS),
            ("GV", &*VALVE_PATTERNS),
        ])
    });

/// Look up the feeder pattern table for an equipment type code
pub fn feeder_patterns_for(equipment_type: &str) -> Option<&'static HashMap<&'static str, &'static str>> {
    EQUIPMENT_PATTERN_MAP.get(equipment_type).copied()
}

/// Check whether an equipment type code participates in IO generation
pub fn is_pattern_equipment_type(equipment_type: &str) -> bool {
    EQUIPMENT_PATTERN_MAP.contains_key(equipment_type)
}

/// Feeder type display names for generated signals
static FEEDER_DISPLAY: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("DOL", "DOL"),
        ("VFD", "VFD"),
        ("VFD-EXT", "VFD"),
        ("VFD_EXTENDED", "VFD"),
        ("SOFT-STARTER", "Soft-Starter"),
        ("SOFT_STARTER", "Soft-Starter"),
        ("VENDOR", "Vendor Panel"),
        ("VENDOR_PANEL", "Vendor Panel"),
        ("AODD", "DOL"),
        ("METERING", "DOL"),
        ("METERING-FULL", "DOL"),
        ("MOD-ELECTRIC", "Direct"),
        ("MOD-PNEUMATIC", "Direct"),
        ("ONOFF-ELECTRIC", "Direct"),
        ("ONOFF-PNEUMATIC", "Direct"),
        ("POSITIONER", "Direct"),
        ("SOLENOID", "Direct"),
        ("DEFAULT", "Direct"),
    ])
});

/// Human-readable feeder display, falling back to the raw feeder string
pub fn feeder_display(feeder_type: &str) -> String {
    FEEDER_DISPLAY
        .get(feeder_type)
        .map(|s| s.to_string())
        .unwrap_or_else(|| feeder_type.to_string())
}

// =============================================================================
// Field Instrument Classification
// =============================================================================

/// Tag letter prefixes for local indication gauges (no PLC connection)
pub const LOCAL_GAUGE_PREFIXES: &[&str] = &["PG", "TG", "FG", "LG"];

/// Tag letter prefixes for manually operated valves and strainers
pub const MANUAL_VALVE_PREFIXES: &[&str] = &["HV", "BV", "BFV", "GV", "NRV", "CHV", "ST", "STR"];

/// Instrument type keywords denoting a manual valve or strainer
pub const MANUAL_TYPE_KEYWORDS: &[&str] = &[
    "manual valve",
    "check valve",
    "ball valve",
    "butterfly valve",
    "gate valve",
    "strainer",
];

/// Instrument type keywords denoting a field instrument (not motor-driven)
pub const FIELD_TYPE_KEYWORDS: &[&str] = &[
    "transmitter",
    "switch",
    "indicator",
    "gauge",
    "analyzer",
    "analyser",
    "meter",
    "element",
    "probe",
];

/// Instrument type keywords denoting a motor-control instrument
pub const MOTOR_TYPE_KEYWORDS: &[&str] = &["motor", "drive", "starter"];

/// Default signal function applied when a template omits one
pub const DEFAULT_SIGNAL_FUNCTION: &str = "Status";

/// Default IO type applied when a template omits one
pub const DEFAULT_IO_TYPE: &str = "DI";

/// Default electrical signal type applied when a template omits one
pub const DEFAULT_SIGNAL_TYPE: &str = "24V DC";

/// Default termination point for generated signals
pub const DEFAULT_TERMINATION: &str = "PLC";

/// Provenance marker for instruments created by motor synthesis
pub const AUTO_GENERATED_SOURCE: &str = "auto_generated";
