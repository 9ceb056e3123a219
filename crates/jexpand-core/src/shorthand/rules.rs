//! The ordered rewrite table
//!
//! Each rule pairs a regular expression for one shorthand form with the
//! directive it expands into. Rules are applied top to bottom, each one as a
//! global substitution over the output of the previous rule.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Quoted path argument shared by every shorthand form
const PATH_ARG: &str = r#"\("(?P<path>[^"]+)"\)"#;

/// Template function a shorthand expands into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Directive {
    IncludeFile,
    IncludeFolder,
}

impl Directive {
    fn name(self) -> &'static str {
        match self {
            Directive::IncludeFile => "include_file",
            Directive::IncludeFolder => "include_folder",
        }
    }
}

/// Keyword argument appended after the path
#[derive(Debug, Clone, Copy)]
enum Arg {
    FormatXml,
    LineNumbers(&'static str),
    /// Taken from the `start` capture group
    StartLine,
    /// Taken from the `end` capture group
    EndLine,
}

impl Arg {
    fn render(self, caps: &Captures<'_>) -> String {
        match self {
            Arg::FormatXml => "format_as='xml'".to_string(),
            Arg::LineNumbers(mode) => format!("line_numbers='{}'", mode),
            Arg::StartLine => format!("start_line={}", group(caps, "start")),
            Arg::EndLine => format!("end_line={}", group(caps, "end")),
        }
    }
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Static description of one rewrite rule
struct RuleDef {
    /// Stable identifier used in diagnostics
    id: &'static str,
    /// Regex for the shorthand name, without the path argument
    head: &'static str,
    directive: Directive,
    args: &'static [Arg],
}

const RULE_DEFS: &[RuleDef] = &[
    RuleDef {
        id: "f",
        head: "f",
        directive: Directive::IncludeFile,
        args: &[],
    },
    RuleDef {
        id: "f_xml_lines",
        head: "f_xml_lines",
        directive: Directive::IncludeFile,
        args: &[Arg::FormatXml, Arg::LineNumbers("short")],
    },
    RuleDef {
        id: "file_xml",
        head: "file_xml",
        directive: Directive::IncludeFile,
        args: &[Arg::FormatXml],
    },
    RuleDef {
        id: "dir_xml",
        head: "dir_xml",
        directive: Directive::IncludeFolder,
        args: &[Arg::FormatXml],
    },
    RuleDef {
        id: "dir_xml_lines",
        head: "dir_xml_lines",
        directive: Directive::IncludeFolder,
        args: &[Arg::FormatXml, Arg::LineNumbers("short")],
    },
    RuleDef {
        id: "d_xml_fulllines",
        head: "d_xml_fulllines",
        directive: Directive::IncludeFolder,
        args: &[Arg::FormatXml, Arg::LineNumbers("full")],
    },
    // The range form must run before the single-bound forms.
    RuleDef {
        id: "f_s_e",
        head: "f_s(?P<start>[0-9]+)_e(?P<end>[0-9]+)",
        directive: Directive::IncludeFile,
        args: &[Arg::StartLine, Arg::EndLine],
    },
    RuleDef {
        id: "f_s",
        head: "f_s(?P<start>[0-9]+)",
        directive: Directive::IncludeFile,
        args: &[Arg::StartLine],
    },
    RuleDef {
        id: "f_e",
        head: "f_e(?P<end>[0-9]+)",
        directive: Directive::IncludeFile,
        args: &[Arg::EndLine],
    },
    RuleDef {
        id: "f_lines",
        head: "f_lines",
        directive: Directive::IncludeFile,
        args: &[Arg::LineNumbers("short")],
    },
    RuleDef {
        id: "f_fulllines",
        head: "f_fulllines",
        directive: Directive::IncludeFile,
        args: &[Arg::LineNumbers("full")],
    },
    RuleDef {
        id: "d",
        head: "d",
        directive: Directive::IncludeFolder,
        args: &[],
    },
    RuleDef {
        id: "d_xml",
        head: "d_xml",
        directive: Directive::IncludeFolder,
        args: &[Arg::FormatXml],
    },
    RuleDef {
        id: "d_lines",
        head: "d_lines",
        directive: Directive::IncludeFolder,
        args: &[Arg::LineNumbers("short")],
    },
    RuleDef {
        id: "d_fulllines",
        head: "d_fulllines",
        directive: Directive::IncludeFolder,
        args: &[Arg::LineNumbers("full")],
    },
];

/// A compiled rewrite rule
pub(crate) struct Rule {
    def: &'static RuleDef,
    regex: Regex,
}

impl Rule {
    fn compile(def: &'static RuleDef) -> Result<Self, regex::Error> {
        // Names must start on a word boundary so `add("x")` is not read as `d("x")`
        let regex = Regex::new(&format!(r"\b{}{}", def.head, PATH_ARG))?;
        Ok(Self { def, regex })
    }

    pub(crate) fn id(&self) -> &'static str {
        self.def.id
    }

    #[cfg(test)]
    pub(crate) fn directive(&self) -> Directive {
        self.def.directive
    }

    /// Render the directive call for one match
    fn expand(&self, caps: &Captures<'_>) -> String {
        let mut call = format!("{}('{}'", self.def.directive.name(), group(caps, "path"));
        for arg in self.def.args {
            call.push_str(", ");
            call.push_str(&arg.render(caps));
        }
        call.push(')');
        format!("{{{{ {} }}}}", call)
    }

    /// Replace every match in `text`, returning the result and the match count
    pub(crate) fn apply(&self, text: &str) -> (String, usize) {
        let mut hits = 0;
        let replaced = self.regex.replace_all(text, |caps: &Captures<'_>| {
            hits += 1;
            self.expand(caps)
        });
        (replaced.into_owned(), hits)
    }
}

/// All rules in application order
pub(crate) static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    RULE_DEFS
        .iter()
        .map(|def| {
            Rule::compile(def)
                .unwrap_or_else(|e| panic!("shorthand rule '{}' is not a valid regex: {}", def.id, e))
        })
        .collect()
});
