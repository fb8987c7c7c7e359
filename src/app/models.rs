//! Data models for instrumentation databases
//!
//! These types mirror the YAML shapes of the instrument database, the
//! equipment list frontmatter and the IO pattern table. Optional fields use
//! serde defaults so that partially filled legacy rows still deserialize;
//! structural requirements are enforced separately by `loader::check_schema`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structured ISA-5.1 instrument tag
///
/// Invariant: `full_tag` equals the deterministic concatenation of the
/// parts (`AREA-VARIABLE FUNCTION MODIFIER-LOOP SUFFIX`). This is checked by
/// the tag-consistency validator, never assumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentTag {
    /// Three-digit plant area code
    #[serde(default)]
    pub area: String,

    /// Measured-variable first letter
    #[serde(default)]
    pub variable: String,

    /// Function letters, order preserved
    #[serde(default)]
    pub function: String,

    /// Optional trailing modifier letter (H, L or A)
    #[serde(default)]
    pub modifier: String,

    /// Loop number digits
    #[serde(default)]
    pub loop_number: String,

    /// Optional trailing suffix letter
    #[serde(default)]
    pub suffix: String,

    /// Canonical uppercase tag string
    #[serde(default)]
    pub full_tag: String,
}

/// Instrument tag field, structured or raw
///
/// Legacy database rows carry a bare tag string instead of the decoded
/// structure. Consistency checks only apply to structured tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagField {
    Structured(InstrumentTag),
    Raw(String),
}

impl TagField {
    /// The canonical tag string regardless of representation
    pub fn full_tag(&self) -> &str {
        match self {
            TagField::Structured(tag) => &tag.full_tag,
            TagField::Raw(raw) => raw,
        }
    }

    /// The structured tag, if this field carries one
    pub fn structured(&self) -> Option<&InstrumentTag> {
        match self {
            TagField::Structured(tag) => Some(tag),
            TagField::Raw(_) => None,
        }
    }

    /// Measured-variable letter, empty for raw tags
    pub fn variable(&self) -> &str {
        self.structured().map(|t| t.variable.as_str()).unwrap_or("")
    }

    /// Function letters, empty for raw tags
    pub fn function(&self) -> &str {
        self.structured().map(|t| t.function.as_str()).unwrap_or("")
    }
}

/// Electrical supply metadata attached to a generated IO signal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Electrical {
    /// Feeder scheme display name (DOL, VFD, Soft-Starter, ...)
    #[serde(default)]
    pub feeder_type: String,
}

/// One PLC IO point belonging to an instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IOSignal {
    /// Globally unique IO point identifier
    pub io_point_id: String,

    /// Signal purpose (Status, Command, Fault, Speed Reference, ...)
    #[serde(default)]
    pub signal_function: String,

    /// IO type code: DI, DO, AI, AO, PI or PO
    #[serde(default)]
    pub io_type: String,

    /// Electrical signal type (24V DC, 4-20mA, ...)
    #[serde(default)]
    pub signal_type: String,

    /// Termination point
    #[serde(default)]
    pub termination: String,

    /// Field component description
    #[serde(default)]
    pub component_type: String,

    /// Tag as wired on the PLC side
    #[serde(default)]
    pub plc_tag: String,

    /// Tag as labelled in the field
    #[serde(default)]
    pub field_tag: String,

    /// Template suffix used to derive the tags
    #[serde(default)]
    pub suffix: String,

    #[serde(default)]
    pub description: String,

    /// Fieldbus protocol for PI/PO points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Marshalling cabinet reference, filled in later by electrical design
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marshalling: Option<String>,

    /// Name of the IO pattern that produced this signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_source: Option<String>,

    #[serde(default)]
    pub electrical: Electrical,
}

/// Physical and drawing location references for an instrument
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// P&ID drawing number this instrument appears on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_location: Option<String>,
}

/// Origin marker for an instrument record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Where the record came from ("pid_extraction", "auto_generated", ...)
    #[serde(default)]
    pub extraction_source: String,
}

/// One instrument record in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique record identifier
    #[serde(default)]
    pub instrument_id: String,

    /// Reference to the parent equipment tag; may be a multi-part string
    /// requiring normalization before lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_tag: Option<String>,

    pub tag: TagField,

    #[serde(default)]
    pub instrument_type: String,

    /// Reference to the control loop this instrument belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_key: Option<String>,

    #[serde(default)]
    pub location: Location,

    #[serde(default)]
    pub io_signals: Vec<IOSignal>,

    #[serde(default)]
    pub provenance: Provenance,
}

impl Instrument {
    /// The canonical tag string for reporting
    pub fn full_tag(&self) -> &str {
        self.tag.full_tag()
    }

    /// True for records created by motor synthesis
    pub fn is_auto_generated(&self) -> bool {
        self.provenance.extraction_source == crate::constants::AUTO_GENERATED_SOURCE
    }
}

/// One control loop grouping instruments with a shared measured variable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loop {
    /// Unique loop key, e.g. "FIT-01"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_key: Option<String>,

    /// Measured-variable letter shared by instruments in this loop
    #[serde(default)]
    pub variable: String,
}

/// Source P&ID drawing registered in the database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePid {
    #[serde(default)]
    pub pid_number: String,
}

/// Database revision block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub by: String,
}

/// The whole instrument database held in memory for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub revision: Revision,

    #[serde(default)]
    pub instruments: Vec<Instrument>,

    #[serde(default)]
    pub loops: Vec<Loop>,

    #[serde(default)]
    pub source_pids: Vec<SourcePid>,
}

/// One equipment package from the equipment list
///
/// The `tag` may be a comma list and/or contain trailing `/NN` paired-suffix
/// groups; many tag-string variants can address the same record, but one
/// record always represents exactly one physical package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub tag: String,

    /// Electrical supply scheme (DOL, VFD, SOFT-STARTER, VENDOR, ...)
    #[serde(default)]
    pub feeder_type: String,

    #[serde(default)]
    pub quantity: Option<u32>,

    /// Free text; may indicate sister/standby units
    #[serde(default)]
    pub quantity_note: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub area: String,
}

/// One signal template inside an IO pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTemplate {
    #[serde(default)]
    pub suffix: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// A named ordered list of signal templates; immutable configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(default)]
    pub signals: Vec<SignalTemplate>,
}

/// The full pattern table keyed by pattern name
pub type PatternTable = HashMap<String, Pattern>;
