//! Summary command: IO point counts and spare capacity

use crate::app::models::Database;
use crate::app::services::loader;
use crate::cli::args::{OutputFormat, SummaryArgs};
use crate::constants::IO_TYPES;
use crate::Result;
use serde_json::json;
use std::collections::BTreeMap;

/// IO counts per type plus the spare-capacity arithmetic
fn count_io_types(database: &Database) -> BTreeMap<&'static str, usize> {
    let mut counts: BTreeMap<&'static str, usize> =
        IO_TYPES.iter().map(|t| (*t, 0)).collect();

    for instrument in &database.instruments {
        for signal in &instrument.io_signals {
            if let Some(count) = counts.get_mut(signal.io_type.as_str()) {
                *count += 1;
            }
        }
    }

    counts
}

/// Spare points on top of a required count, rounded up
fn spare_for(required: usize, spare_pct: u32) -> usize {
    (required * spare_pct as usize).div_ceil(100)
}

/// Summarize IO point counts with spare capacity
pub fn run_summary(args: SummaryArgs) -> Result<()> {
    args.validate()?;

    let database = loader::load_database(&args.database)?;
    let counts = count_io_types(&database);

    let total_required: usize = counts.values().sum();
    let total_spare = spare_for(total_required, args.spare_pct);

    match args.format {
        OutputFormat::Json => {
            let types: BTreeMap<_, _> = counts
                .iter()
                .map(|(io_type, required)| {
                    let spare = spare_for(*required, args.spare_pct);
                    (
                        *io_type,
                        json!({
                            "required": required,
                            "spare": spare,
                            "total": required + spare,
                        }),
                    )
                })
                .collect();
            let output = json!({
                "project_id": database.project_id,
                "revision": database.revision.number,
                "spare_pct": args.spare_pct,
                "io_types": types,
                "total": {
                    "required": total_required,
                    "spare": total_spare,
                    "total": total_required + total_spare,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
        OutputFormat::Human => {
            println!("IO Summary - {}", database.project_id);
            println!(
                "Revision: {} | Date: {} | Spare: {}%",
                database.revision.number, database.revision.date, args.spare_pct
            );
            println!(
                "Generated: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M")
            );
            println!();
            println!("{:<6} {:>9} {:>7} {:>7}", "Type", "Required", "Spare", "Total");
            for (io_type, required) in &counts {
                let spare = spare_for(*required, args.spare_pct);
                println!(
                    "{:<6} {:>9} {:>7} {:>7}",
                    io_type,
                    required,
                    spare,
                    required + spare
                );
            }
            println!(
                "{:<6} {:>9} {:>7} {:>7}",
                "TOTAL",
                total_required,
                total_spare,
                total_required + total_spare
            );
        }
    }

    Ok(())
}
