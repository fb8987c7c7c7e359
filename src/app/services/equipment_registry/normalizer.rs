//! Equipment tag normalization
//!
//! Raw equipment tags compress several physical units into one string:
//! comma lists, trailing `/NN` paired-suffix groups and quantity notes
//! naming sister or standby units. These functions expand a raw tag into
//! the canonical set of individual tags it denotes.

use regex::Regex;
use std::sync::LazyLock;

/// One or more trailing /NN groups ("202-B-01/02", "202-B-01/02/03")
static PAIRED_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(/\d+)+$").expect("valid paired suffix pattern"));

/// Prefix + first sequence + slash-separated further sequences
static SIBLING_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?-)(\d+)((?:/\d+)+)$").expect("valid sibling pattern"));

/// Tag ending in a sequence number, for quantity-note sibling synthesis
static SEQ_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*-)(\d+)$").expect("valid sequence tail pattern"));

/// Quantity-note phrases indicating additional physical units
const SIBLING_NOTE_KEYWORDS: &[&str] = &["sister", "standby", "stand-by", "duty", "twin"];

/// Strip trailing `/NN` paired-suffix groups from a tag part
pub fn base_tag(part: &str) -> String {
    PAIRED_SUFFIX.replace(part.trim(), "").to_string()
}

/// Expand a raw equipment tag string into all tag variants it denotes
///
/// The raw string itself is always included. For each comma-separated part
/// the stripped base is added, and `prefix-seq/seq` groups expand into one
/// tag per sequence number, zero-padded to the widest sequence in the
/// group. Order is deterministic; duplicates are dropped.
pub fn expand_tag_variants(raw: &str) -> Vec<String> {
    let mut variants = Vec::new();
    let mut push = |tag: String| {
        if !tag.is_empty() && !variants.contains(&tag) {
            variants.push(tag);
        }
    };

    push(raw.to_string());

    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        push(part.to_string());
        push(base_tag(part));

        if let Some(caps) = SIBLING_GROUP.captures(part) {
            let prefix = &caps[1];
            let first = caps[2].to_string();
            let rest: Vec<String> = caps[3]
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();

            let width = std::iter::once(&first)
                .chain(rest.iter())
                .map(|s| s.len())
                .max()
                .unwrap_or(0);

            for seq in std::iter::once(&first).chain(rest.iter()) {
                match seq.parse::<u32>() {
                    Ok(n) => push(format!("{prefix}{n:0width$}")),
                    Err(_) => push(format!("{prefix}{seq}")),
                }
            }
        }
    }

    variants
}

/// Check whether a quantity note textually indicates sister/standby units
pub fn indicates_sibling_units(note: &str) -> bool {
    let lowered = note.to_lowercase();
    SIBLING_NOTE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Synthesize sibling tags by incrementing the base sequence number
///
/// For quantity N, produces N-1 further tags after the base. Tags without
/// a trailing sequence number produce nothing.
pub fn sibling_variants(base: &str, quantity: u32) -> Vec<String> {
    let Some(caps) = SEQ_TAIL.captures(base) else {
        return Vec::new();
    };

    let prefix = &caps[1];
    let seq_str = &caps[2];
    let width = seq_str.len();
    let Ok(seq) = seq_str.parse::<u32>() else {
        return Vec::new();
    };

    (1..quantity)
        .map(|offset| format!("{prefix}{:0width$}", seq + offset))
        .collect()
}
