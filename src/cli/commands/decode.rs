//! Decode command: single-tag decode, validation and JSON output

use crate::app::services::tag_codec;
use crate::cli::args::DecodeArgs;
use crate::constants::{first_letter_name, succeeding_letter_name};
use crate::{Error, Result};
use colored::Colorize;
use serde_json::json;

/// Decode or validate one ISA-5.1 tag string
pub fn run_decode(args: DecodeArgs) -> Result<()> {
    args.validate()?;

    if args.check {
        return match tag_codec::validate(&args.tag) {
            Ok(()) => {
                println!("{}", format!("Valid: {}", args.tag.to_uppercase()).green());
                Ok(())
            }
            Err(issues) => {
                for issue in &issues {
                    println!("{}", format!("Invalid: {}", issue).red());
                }
                Err(Error::strict_findings(issues.len()))
            }
        };
    }

    let Some(tag) = tag_codec::decode(&args.tag) else {
        return Err(Error::configuration(format!(
            "Could not parse tag '{}'",
            args.tag
        )));
    };

    let variable_letter = tag.variable.chars().next().unwrap_or(' ');
    let function_names: Vec<&str> = tag.function.chars().map(succeeding_letter_name).collect();

    if args.json {
        let output = json!({
            "area": tag.area,
            "variable": tag.variable,
            "variable_name": first_letter_name(variable_letter),
            "function": tag.function,
            "function_names": function_names,
            "modifier": tag.modifier,
            "loop_number": tag.loop_number,
            "suffix": tag.suffix,
            "category": tag.category(),
            "loop_id": tag.loop_id(),
            "full_tag": tag.full_tag,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return Ok(());
    }

    println!("Tag: {}", tag.full_tag);
    println!("  Area: {}", tag.area);
    println!(
        "  Variable: {} ({})",
        tag.variable,
        first_letter_name(variable_letter)
    );
    println!("  Function: {} ({})", tag.function, function_names.join(", "));
    if !tag.modifier.is_empty() {
        println!("  Modifier: {}", tag.modifier);
    }
    println!("  Loop: {}", tag.loop_number);
    if !tag.suffix.is_empty() {
        println!("  Suffix: {}", tag.suffix);
    }
    println!("  Category: {}", tag.category());
    println!("  Loop ID: {}", tag.loop_id());

    Ok(())
}
