//! ISA-5.1 tag codec
//!
//! Decodes instrument tag strings on the grammar
//! `AREA(3 digits)-LETTERS-NUMBER[SUFFIX]` into structured components,
//! generates canonical tag strings from components (the exact left inverse
//! of decoding), and validates letters against the ISA-5.1 tables.
//!
//! Malformed input is not an error here: [`decode`] returns `None` and the
//! caller decides whether that is fatal.

pub mod codec;

#[cfg(test)]
pub mod tests;

pub use codec::{decode, generate, generate_from, validate, TagIssue};
