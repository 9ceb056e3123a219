//! Human-readable catalog of supported shorthand patterns

use serde::Serialize;

/// Grouping used when presenting the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    File,
    XmlFile,
    Directory,
    XmlDirectory,
}

impl Category {
    /// Section heading for text output
    pub fn heading(self) -> &'static str {
        match self {
            Category::File => "FILE OPERATIONS",
            Category::XmlFile => "XML FILE OPERATIONS",
            Category::Directory => "DIRECTORY OPERATIONS",
            Category::XmlDirectory => "XML DIRECTORY OPERATIONS",
        }
    }
}

/// One catalog entry: an example shorthand and what it becomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternInfo {
    pub shorthand: &'static str,
    pub expansion: &'static str,
    pub description: &'static str,
    pub category: Category,
}

const PATTERNS: &[PatternInfo] = &[
    PatternInfo {
        shorthand: r#"f("path")"#,
        expansion: "{{ include_file('path') }}",
        description: "Include file content",
        category: Category::File,
    },
    PatternInfo {
        shorthand: r#"f_lines("path")"#,
        expansion: "{{ include_file('path', line_numbers='short') }}",
        description: "Include file with short line numbers",
        category: Category::File,
    },
    PatternInfo {
        shorthand: r#"f_fulllines("path")"#,
        expansion: "{{ include_file('path', line_numbers='full') }}",
        description: "Include file with full line numbers",
        category: Category::File,
    },
    PatternInfo {
        shorthand: r#"f_s10("path")"#,
        expansion: "{{ include_file('path', start_line=10) }}",
        description: "Include file starting from line 10",
        category: Category::File,
    },
    PatternInfo {
        shorthand: r#"f_e30("path")"#,
        expansion: "{{ include_file('path', end_line=30) }}",
        description: "Include file up to line 30",
        category: Category::File,
    },
    PatternInfo {
        shorthand: r#"f_s10_e30("path")"#,
        expansion: "{{ include_file('path', start_line=10, end_line=30) }}",
        description: "Include file from line 10 to line 30",
        category: Category::File,
    },
    PatternInfo {
        shorthand: r#"file_xml("path")"#,
        expansion: "{{ include_file('path', format_as='xml') }}",
        description: "Include file in XML format",
        category: Category::XmlFile,
    },
    PatternInfo {
        shorthand: r#"f_xml_lines("path")"#,
        expansion: "{{ include_file('path', format_as='xml', line_numbers='short') }}",
        description: "Include file in XML format with short line numbers",
        category: Category::XmlFile,
    },
    PatternInfo {
        shorthand: r#"d("path")"#,
        expansion: "{{ include_folder('path') }}",
        description: "Include directory content",
        category: Category::Directory,
    },
    PatternInfo {
        shorthand: r#"d_lines("path")"#,
        expansion: "{{ include_folder('path', line_numbers='short') }}",
        description: "Include directory with short line numbers",
        category: Category::Directory,
    },
    PatternInfo {
        shorthand: r#"d_fulllines("path")"#,
        expansion: "{{ include_folder('path', line_numbers='full') }}",
        description: "Include directory with full line numbers",
        category: Category::Directory,
    },
    PatternInfo {
        shorthand: r#"d_xml("path")"#,
        expansion: "{{ include_folder('path', format_as='xml') }}",
        description: "Include directory in XML format",
        category: Category::XmlDirectory,
    },
    PatternInfo {
        shorthand: r#"dir_xml("path")"#,
        expansion: "{{ include_folder('path', format_as='xml') }}",
        description: "Include directory in XML format (long form)",
        category: Category::XmlDirectory,
    },
    PatternInfo {
        shorthand: r#"dir_xml_lines("path")"#,
        expansion: "{{ include_folder('path', format_as='xml', line_numbers='short') }}",
        description: "Include directory in XML format with short line numbers",
        category: Category::XmlDirectory,
    },
    PatternInfo {
        shorthand: r#"d_xml_fulllines("path")"#,
        expansion: "{{ include_folder('path', format_as='xml', line_numbers='full') }}",
        description: "Include directory in XML format with full line numbers",
        category: Category::XmlDirectory,
    },
];

/// All supported shorthand patterns, grouped by category
pub fn list_patterns() -> &'static [PatternInfo] {
    PATTERNS
}
