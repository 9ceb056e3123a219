// Core modules
pub mod error;
pub mod shorthand;

// Re-export commonly used types
pub use error::{JexpandError, Result};
pub use shorthand::{
    list_patterns, rewrite_content, rewrite_content_with_stats, rewrite_file, rewrite_line,
    Category, PatternInfo, RewriteStats,
};
