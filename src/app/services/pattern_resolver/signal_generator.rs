//! IO signal generation from pattern templates

use crate::app::models::{Electrical, IOSignal, Pattern};
use crate::constants::{
    DEFAULT_IO_TYPE, DEFAULT_SIGNAL_FUNCTION, DEFAULT_SIGNAL_TYPE, DEFAULT_TERMINATION,
};
use uuid::Uuid;

/// Instantiate a pattern's templates into IO signals for one base tag
///
/// Each template yields one signal, in template order, with a fresh
/// globally-unique `io_point_id`. Templates declaring a non-empty suffix
/// produce `{base_tag}-{suffix}` PLC and field tags; otherwise the base tag
/// is used unchanged.
///
/// `pattern_source` is deliberately left unset here and stamped by the
/// caller: templates stay agnostic of the pattern name they belong to.
pub fn generate_io_signals(pattern: &Pattern, base_tag: &str, feeder_label: &str) -> Vec<IOSignal> {
    pattern
        .signals
        .iter()
        .map(|template| {
            let suffix = template.suffix.clone();
            let tag = if suffix.is_empty() {
                base_tag.to_string()
            } else {
                format!("{base_tag}-{suffix}")
            };

            IOSignal {
                io_point_id: Uuid::new_v4().to_string(),
                signal_function: template
                    .function
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SIGNAL_FUNCTION.to_string()),
                io_type: template
                    .io_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_IO_TYPE.to_string()),
                signal_type: template
                    .signal_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SIGNAL_TYPE.to_string()),
                termination: DEFAULT_TERMINATION.to_string(),
                component_type: template.component.clone().unwrap_or_default(),
                plc_tag: tag.clone(),
                field_tag: tag,
                suffix,
                description: template.description.clone().unwrap_or_default(),
                protocol: template.protocol.clone(),
                marshalling: None,
                pattern_source: None,
                electrical: Electrical {
                    feeder_type: feeder_label.to_string(),
                },
            }
        })
        .collect()
}
