//! Tests for pattern resolution and signal generation

use crate::app::models::{Pattern, SignalTemplate};

pub mod resolver_tests;
pub mod signal_generator_tests;

/// Build a pattern from (suffix, function, io_type) triples
pub fn pattern(signals: &[(&str, &str, &str)]) -> Pattern {
    Pattern {
        signals: signals
            .iter()
            .map(|(suffix, function, io_type)| SignalTemplate {
                suffix: suffix.to_string(),
                function: Some(function.to_string()),
                io_type: Some(io_type.to_string()),
                ..Default::default()
            })
            .collect(),
    }
}
