//! Multi-line content and stats tests

use super::*;

#[test]
fn test_content_without_shorthand_is_identity() {
    let text = "# Title\n\nPlain text with {{ existing }} and f(x) and \"quotes\".\n";
    assert_eq!(rewrite_content(text), text);
}

#[test]
fn test_empty_content() {
    assert_eq!(rewrite_content(""), "");
}

#[test]
fn test_content_rewrites_each_line() {
    let text = "Intro\nf(\"a.py\")\nd_lines(\"src\")\nOutro";
    assert_eq!(
        rewrite_content(text),
        "Intro\n{{ include_file('a.py') }}\n{{ include_folder('src', line_numbers='short') }}\nOutro"
    );
}

#[test]
fn test_content_preserves_line_count() {
    let text = "f(\"a\")\n\nd(\"b\")\n\n\nfile_xml(\"c\")\n";
    let result = rewrite_content(text);
    assert_eq!(result.split('\n').count(), text.split('\n').count());
    assert!(result.ends_with('\n'));
}

#[test]
fn test_shorthand_split_across_lines_not_matched() {
    let text = "f(\"a\n.py\")";
    assert_eq!(rewrite_content(text), text);
}

#[test]
fn test_crlf_line_endings_preserved() {
    let text = "f(\"a\")\r\nplain\r\n";
    assert_eq!(
        rewrite_content(text),
        "{{ include_file('a') }}\r\nplain\r\n"
    );
}

#[test]
fn test_content_idempotent_on_expanded_text() {
    let source = "f(\"a\")\nf_xml_lines(\"b\")\nd_xml(\"c\")\nf_s3_e4(\"d\")";
    let once = rewrite_content(source);
    let twice = rewrite_content(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_stats_count_lines_and_hits() {
    let text = "f(\"a\") f(\"b\")\nplain\nd(\"c\")";
    let (result, stats) = rewrite_content_with_stats(text);
    assert_eq!(result, rewrite_content(text));
    assert_eq!(stats.lines, 3);
    assert_eq!(stats.changed_lines, 2);
    assert_eq!(stats.hits.get("f"), Some(&2));
    assert_eq!(stats.hits.get("d"), Some(&1));
    assert_eq!(stats.total_hits(), 3);
}

#[test]
fn test_stats_empty_for_plain_text() {
    let (_, stats) = rewrite_content_with_stats("nothing here");
    assert_eq!(stats.lines, 1);
    assert_eq!(stats.changed_lines, 0);
    assert!(stats.hits.is_empty());
}
