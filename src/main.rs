use clap::Parser;
use std::process;
use tagsync::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // No subcommand: show the command overview and exit cleanly
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Tagsync - Instrument Tag & Cross-Reference Tool");
    println!("===============================================");
    println!();
    println!("Decode ISA-5.1 instrument tags, apply equipment-driven IO patterns");
    println!("and validate cross-references in a YAML instrumentation database.");
    println!();
    println!("USAGE:");
    println!("    tagsync <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    apply       Apply IO patterns (dedup, motor synthesis, pattern application)");
    println!("    validate    Validate cross-references, optionally auto-fixing orphans");
    println!("    decode      Decode a single ISA-5.1 tag string");
    println!("    summary     Summarize IO point counts and spare capacity");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Apply IO patterns from the equipment list:");
    println!("    tagsync apply -d database.yaml -e equipment-list.qmd -p io-patterns.yaml");
    println!();
    println!("    # Validate with auto-fix for orphan equipment references:");
    println!("    tagsync validate -d database.yaml -e equipment-list.qmd --fix");
    println!();
    println!("    # Decode a tag:");
    println!("    tagsync decode 300-LAH-02 --json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    tagsync <COMMAND> --help");
}
