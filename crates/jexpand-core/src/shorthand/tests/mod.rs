//! Tests for the shorthand rewriter
//!
//! Organized by concern: single-rule expansions, rule ordering and
//! boundaries, multi-line content, and the catalog.

use super::*;


// Rule interaction tests
mod ordering;

// Content and stats tests
mod content;
