//! Tag decode/generate/validate implementation

use crate::app::models::InstrumentTag;
use crate::constants::{
    MODIFIER_LETTERS, category_for_function, is_valid_first_letter, is_valid_succeeding_letter,
};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Tag grammar: {AREA}-{LETTERS}-{NUMBER}{SUFFIX}
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})-([A-Z]+)-(\d+)([A-Z]?)$").expect("valid tag pattern"));

/// A specific problem found while validating a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagIssue {
    /// The string does not match the tag grammar at all
    InvalidFormat(String),
    /// The measured-variable letter is not an ISA-5.1 first letter
    InvalidFirstLetter(char),
    /// A function letter is not an ISA-5.1 succeeding letter
    InvalidFunctionLetter(char),
}

impl fmt::Display for TagIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagIssue::InvalidFormat(tag) => write!(f, "Invalid tag format: {}", tag),
            TagIssue::InvalidFirstLetter(c) => write!(f, "Invalid first letter: {}", c),
            TagIssue::InvalidFunctionLetter(c) => write!(f, "Invalid function letter: {}", c),
        }
    }
}

/// Decode an ISA-5.1 instrument tag string
///
/// The letters group splits into: first character = measured variable;
/// trailing character = modifier only when it is one of the fixed modifier
/// alphabet and sits last; everything else = function letters, order
/// preserved. Tags with fewer than two letters are rejected.
///
/// Returns `None` for any string that does not match the grammar.
pub fn decode(tag: &str) -> Option<InstrumentTag> {
    let upper = tag.trim().to_uppercase();
    let caps = TAG_PATTERN.captures(&upper)?;

    let area = caps[1].to_string();
    let letters = &caps[2];
    let loop_number = caps[3].to_string();
    let suffix = caps[4].to_string();

    if letters.len() < 2 {
        return None;
    }

    let mut chars = letters.chars();
    let variable = chars.next()?.to_string();
    let remaining: Vec<char> = chars.collect();

    let (function, modifier) = match remaining.split_last() {
        Some((last, head)) if MODIFIER_LETTERS.contains(last) => {
            (head.iter().collect::<String>(), last.to_string())
        }
        _ => (remaining.iter().collect::<String>(), String::new()),
    };

    Some(InstrumentTag {
        area,
        variable,
        function,
        modifier,
        loop_number,
        suffix,
        full_tag: upper,
    })
}

/// Generate a canonical tag string from components
///
/// Exact left inverse of [`decode`] for any well-formed component set: the
/// result decodes back to the same components up to uppercasing.
pub fn generate(
    area: &str,
    variable: &str,
    function: &str,
    modifier: &str,
    loop_number: &str,
    suffix: &str,
) -> String {
    format!("{area}-{variable}{function}{modifier}-{loop_number}{suffix}").to_uppercase()
}

/// Generate the canonical tag string for structured tag components
pub fn generate_from(tag: &InstrumentTag) -> String {
    generate(
        &tag.area,
        &tag.variable,
        &tag.function,
        &tag.modifier,
        &tag.loop_number,
        &tag.suffix,
    )
}

/// Validate a tag string, reporting every offending letter
///
/// Unlike [`decode`], this names the specific invalid letters instead of
/// collapsing everything into a single format failure.
pub fn validate(tag: &str) -> Result<(), Vec<TagIssue>> {
    let Some(decoded) = decode(tag) else {
        return Err(vec![TagIssue::InvalidFormat(tag.to_string())]);
    };

    let mut issues = Vec::new();

    if let Some(first) = decoded.variable.chars().next() {
        if !is_valid_first_letter(first) {
            issues.push(TagIssue::InvalidFirstLetter(first));
        }
    }

    for letter in decoded.function.chars() {
        if !is_valid_succeeding_letter(letter) {
            issues.push(TagIssue::InvalidFunctionLetter(letter));
        }
    }

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

impl InstrumentTag {
    /// Instrument category derived from the function letters
    pub fn category(&self) -> &'static str {
        category_for_function(&self.function)
    }

    /// Loop identifier, e.g. `FIT-01` for `200-FIT-01A`
    pub fn loop_id(&self) -> String {
        format!("{}{}-{}", self.variable, self.function, self.loop_number)
    }
}
