//! YAML database, QMD equipment list and pattern table loading
//!
//! The equipment list ships either as a plain YAML file or as a Quarto
//! document whose frontmatter carries the same YAML under an `equipment`
//! key. Structural problems (schema violations) are fatal here, before any
//! semantic check runs.

use crate::app::models::{Database, Equipment, PatternTable};
use crate::constants::IO_TYPES;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Equipment list file shape: `equipment:` key over a record list
#[derive(Debug, Default, Deserialize)]
struct EquipmentFile {
    #[serde(default)]
    equipment: Vec<Equipment>,
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

/// Load and structurally validate the instrument database
pub fn load_database(path: &Path) -> Result<Database> {
    let content = read_file(path)?;
    let database: Database = serde_yaml::from_str(&content)
        .map_err(|e| Error::yaml_parsing(path.display().to_string(), e.to_string()))?;

    check_schema(&database)?;

    info!(
        "Loaded database: {} instruments, {} loops, {} source P&IDs",
        database.instruments.len(),
        database.loops.len(),
        database.source_pids.len()
    );
    Ok(database)
}

/// Structural validation, fatal before any semantic check
///
/// Flags missing or duplicate instrument ids and invalid IO type codes.
/// All violations are gathered into one error rather than stopping at the
/// first.
pub fn check_schema(database: &Database) -> Result<()> {
    let mut violations = Vec::new();
    let mut seen_ids = HashSet::new();

    for instrument in &database.instruments {
        if instrument.instrument_id.is_empty() {
            violations.push(format!(
                "Instrument '{}' missing instrument_id",
                instrument.full_tag()
            ));
        } else if !seen_ids.insert(instrument.instrument_id.as_str()) {
            violations.push(format!(
                "Duplicate instrument_id: {}",
                instrument.instrument_id
            ));
        }

        for signal in &instrument.io_signals {
            if !signal.io_type.is_empty() && !IO_TYPES.contains(&signal.io_type.as_str()) {
                violations.push(format!(
                    "Invalid io_type '{}' in {}",
                    signal.io_type,
                    instrument.full_tag()
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::schema(violations.join("; ")))
    }
}

/// Load the equipment list from a QMD document or a plain YAML file
pub fn load_equipment(path: &Path) -> Result<Vec<Equipment>> {
    let content = read_file(path)?;

    let yaml = if path.extension().and_then(|e| e.to_str()) == Some("qmd") {
        extract_frontmatter(path, &content)?
    } else {
        content
    };

    let file: EquipmentFile = serde_yaml::from_str(&yaml)
        .map_err(|e| Error::yaml_parsing(path.display().to_string(), e.to_string()))?;

    info!("Loaded equipment list: {} entries", file.equipment.len());
    Ok(file.equipment)
}

/// QMD frontmatter sits between the first two `---` delimiters
fn extract_frontmatter(path: &Path, content: &str) -> Result<String> {
    let parts: Vec<&str> = content.split("---").collect();
    if parts.len() < 3 {
        return Err(Error::qmd_format(
            path.display().to_string(),
            "missing frontmatter delimiters",
        ));
    }
    debug!("Extracted QMD frontmatter from {}", path.display());
    Ok(parts[1].to_string())
}

/// Load the IO pattern table: a top-level map of pattern name to signals
pub fn load_patterns(path: &Path) -> Result<PatternTable> {
    let content = read_file(path)?;
    let patterns: PatternTable = serde_yaml::from_str(&content)
        .map_err(|e| Error::yaml_parsing(path.display().to_string(), e.to_string()))?;

    info!("Loaded pattern table: {} patterns", patterns.len());
    Ok(patterns)
}

/// Persist the whole database in one write
pub fn save_database(database: &Database, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(database)
        .map_err(|e| Error::yaml_parsing(path.display().to_string(), e.to_string()))?;
    fs::write(path, yaml)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    info!("Saved database to {}", path.display());
    Ok(())
}
