//! Expand command - rewrite shorthand in a template file

use crate::output::{print_raw, print_text};
use anyhow::Result;
use colored::Colorize;
use jexpand_core::rewrite_file;
use std::path::Path;

/// Rewrite `input`, printing the result or writing it to `output`
///
/// # Arguments
///
/// * `input` - Template file containing shorthand
/// * `output` - Optional destination. If None, the result goes to stdout
pub fn run(input: &Path, output: Option<&Path>) -> Result<()> {
    tracing::debug!(input = %input.display(), to_stdout = output.is_none(), "expanding template");
    let rewritten = rewrite_file(input, output)?;

    match output {
        Some(path) => print_text(&format!(
            "{} Parsed content written to: {}",
            "✓".green().bold(),
            path.display()
        ))?,
        None => print_raw(&rewritten)?,
    }

    Ok(())
}
