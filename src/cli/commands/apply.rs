//! Apply command: dedup, motor synthesis and pattern application

use crate::app::services::equipment_registry::EquipmentRegistry;
use crate::app::services::loader;
use crate::app::services::pattern_applicator::PatternApplicator;
use crate::cli::args::ApplyArgs;
use crate::config::RunConfig;
use crate::{Error, Result};
use colored::Colorize;
use tracing::{info, warn};

/// Run the full pattern application pipeline over one database
pub fn run_apply(args: ApplyArgs) -> Result<()> {
    args.validate()?;

    let mut database = loader::load_database(&args.database)?;
    let equipment = loader::load_equipment(&args.equipment)?;
    let patterns = loader::load_patterns(&args.patterns)?;

    let registry = EquipmentRegistry::from_list(equipment);
    info!(
        "Equipment registry: {} records, {} aliases",
        registry.equipment_count(),
        registry.alias_count()
    );

    let config = RunConfig {
        strict: args.strict,
        auto_fix: false,
        show_progress: args.show_progress(),
    };

    let applicator = PatternApplicator::new(&registry, &patterns);
    let stats = applicator.apply(&mut database, &config);

    for warning in &stats.warnings {
        warn!("{}", warning);
    }

    if !args.quiet {
        println!("\n{}", stats.summary());
    }

    if config.strict && !stats.warnings.is_empty() {
        return Err(Error::strict_findings(stats.warnings.len()));
    }

    if args.dry_run {
        println!("{}", "Dry run - database not written".yellow());
        return Ok(());
    }

    let output = args.output.as_deref().unwrap_or(&args.database);
    loader::save_database(&database, output)?;

    if !args.quiet {
        println!("{}", format!("Saved database to {}", output.display()).green());
    }

    Ok(())
}
