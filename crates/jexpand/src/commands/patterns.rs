//! Patterns command - print the shorthand catalog

use crate::output::{print_json, print_text};
use anyhow::Result;
use jexpand_core::{list_patterns, PatternInfo};
use serde::Serialize;

/// JSON output schema for `--list-patterns --json`
#[derive(Debug, Serialize)]
struct PatternsOutput {
    schema_version: &'static str,
    patterns: &'static [PatternInfo],
}

/// Print all supported patterns
///
/// # Arguments
///
/// * `json` - Output in JSON format if true
pub fn run(json: bool) -> Result<()> {
    let patterns = list_patterns();

    if json {
        let out = PatternsOutput {
            schema_version: "1.0",
            patterns,
        };
        print_json(&serde_json::to_string_pretty(&out)?)?;
    } else {
        print_text(&render_text(patterns))?;
    }

    Ok(())
}

fn render_text(patterns: &[PatternInfo]) -> String {
    let mut text = String::from("Supported shorthand patterns:\n");
    text.push_str(&"=".repeat(50));

    for group in patterns.chunk_by(|a, b| a.category == b.category) {
        text.push_str(&format!("\n\n{}:", group[0].category.heading()));
        for info in group {
            text.push_str(&format!("\n  {:<25} -> {}", info.shorthand, info.description));
        }
    }

    text
}
