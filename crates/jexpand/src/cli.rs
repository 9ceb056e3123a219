//! CLI argument structure using clap

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = r#"Supported shorthand patterns:

FILE OPERATIONS:
  f("path")                -> {{ include_file('path') }}
  f_lines("path")          -> {{ include_file('path', line_numbers='short') }}
  f_fulllines("path")      -> {{ include_file('path', line_numbers='full') }}
  f_s10("path")            -> {{ include_file('path', start_line=10) }}
  f_e30("path")            -> {{ include_file('path', end_line=30) }}
  f_s10_e30("path")        -> {{ include_file('path', start_line=10, end_line=30) }}

XML FILE OPERATIONS:
  file_xml("path")         -> {{ include_file('path', format_as='xml') }}
  f_xml_lines("path")      -> {{ include_file('path', format_as='xml', line_numbers='short') }}

DIRECTORY OPERATIONS:
  d("path")                -> {{ include_folder('path') }}
  d_lines("path")          -> {{ include_folder('path', line_numbers='short') }}
  d_fulllines("path")      -> {{ include_folder('path', line_numbers='full') }}

XML DIRECTORY OPERATIONS:
  d_xml("path")            -> {{ include_folder('path', format_as='xml') }}
  dir_xml("path")          -> {{ include_folder('path', format_as='xml') }}
  dir_xml_lines("path")    -> {{ include_folder('path', format_as='xml', line_numbers='short') }}
  d_xml_fulllines("path")  -> {{ include_folder('path', format_as='xml', line_numbers='full') }}

Examples:
  jexpand input.txt -o output.txt
  jexpand --list-patterns"#;

#[derive(Parser, Debug)]
#[command(name = "jexpand")]
#[command(
    version,
    about = "Convert shorthand syntax to template directive calls",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Input file to parse
    #[arg(required_unless_present = "list_patterns")]
    pub input_file: Option<PathBuf>,

    /// Output file (default: print to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// List all supported patterns
    #[arg(long)]
    pub list_patterns: bool,

    /// Print the pattern list as JSON
    #[arg(long, requires = "list_patterns")]
    pub json: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
