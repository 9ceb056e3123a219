//! Shorthand module - rewrites shorthand calls into template directives
//!
//! Template authors write compact calls such as `f("src/main.rs")` and this
//! module expands them into the directive form the template engine
//! understands, `{{ include_file('src/main.rs') }}`.
//!
//! ## Philosophy
//!
//! - **Pure text substitution**: no parsing of the downstream template language
//! - **Line-local**: a shorthand never spans two lines
//! - **Silent pass-through**: anything that is not a well-formed shorthand is
//!   left exactly as written
//!
//! ## Syntax
//!
//! - Files: `f("p")`, `f_lines("p")`, `f_fulllines("p")`, `f_s10("p")`,
//!   `f_e30("p")`, `f_s10_e30("p")`
//! - XML files: `file_xml("p")`, `f_xml_lines("p")`
//! - Directories: `d("p")`, `d_lines("p")`, `d_fulllines("p")`
//! - XML directories: `d_xml("p")`, `dir_xml("p")`, `dir_xml_lines("p")`,
//!   `d_xml_fulllines("p")`
//!
//! See [`list_patterns`] for the full catalog with descriptions.

pub mod catalog;
pub mod rewriter;
mod rules;

pub use catalog::{list_patterns, Category, PatternInfo};
pub use rewriter::{
    rewrite_content, rewrite_content_with_stats, rewrite_file, rewrite_line, RewriteStats,
};

#[cfg(test)]
mod tests;
