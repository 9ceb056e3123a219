//! Rewriter implementation

use crate::error::{JexpandError, Result};
use crate::shorthand::rules::RULES;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Counters collected while rewriting content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Number of lines processed
    pub lines: usize,
    /// Number of lines that contained at least one shorthand
    pub changed_lines: usize,
    /// Substitutions made, keyed by rule id
    pub hits: BTreeMap<&'static str, usize>,
}

impl RewriteStats {
    /// Total substitutions across all rules
    pub fn total_hits(&self) -> usize {
        self.hits.values().sum()
    }
}

fn rewrite_line_counted(line: &str, stats: &mut RewriteStats) -> String {
    let mut result = line.to_string();
    let mut changed = false;

    for rule in RULES.iter() {
        let (replaced, hits) = rule.apply(&result);
        if hits > 0 {
            tracing::trace!(rule = rule.id(), hits, "shorthand rule matched");
            *stats.hits.entry(rule.id()).or_insert(0) += hits;
            changed = true;
            result = replaced;
        }
    }

    stats.lines += 1;
    if changed {
        stats.changed_lines += 1;
    }
    result
}

/// Rewrite every shorthand occurrence in a single line
///
/// Rules run in table order and each sees the output of the previous one.
/// A line without shorthand is returned unchanged.
pub fn rewrite_line(line: &str) -> String {
    rewrite_line_counted(line, &mut RewriteStats::default())
}

/// Rewrite multi-line content, line by line
///
/// Lines are split and rejoined on `\n`, so the line count is preserved and a
/// trailing `\r` stays attached to its line.
pub fn rewrite_content(content: &str) -> String {
    rewrite_content_with_stats(content).0
}

/// Same as [`rewrite_content`], also reporting what was substituted
pub fn rewrite_content_with_stats(content: &str) -> (String, RewriteStats) {
    let mut stats = RewriteStats::default();
    let rewritten = content
        .split('\n')
        .map(|line| rewrite_line_counted(line, &mut stats))
        .collect::<Vec<_>>()
        .join("\n");
    (rewritten, stats)
}

/// Rewrite a template file, optionally writing the result to `output`
///
/// The input is read completely before `output` is touched, so a missing or
/// unreadable input never creates an output file.
///
/// # Errors
///
/// Returns an error if:
/// - The input file does not exist or cannot be read
/// - The input is not valid UTF-8
/// - The output file cannot be written
pub fn rewrite_file(input: &Path, output: Option<&Path>) -> Result<String> {
    let content = fs::read_to_string(input).map_err(|source| JexpandError::InputReadFailed {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %input.display(), bytes = content.len(), "read template");

    let (rewritten, stats) = rewrite_content_with_stats(&content);
    tracing::debug!(
        lines = stats.lines,
        changed_lines = stats.changed_lines,
        substitutions = stats.total_hits(),
        "rewrote shorthand"
    );

    if let Some(output) = output {
        fs::write(output, &rewritten).map_err(|source| JexpandError::OutputWriteFailed {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %output.display(), "wrote rewritten template");
    }

    Ok(rewritten)
}
