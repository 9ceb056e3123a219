//! Rule ordering, word boundaries and malformed input

use super::*;

#[test]
fn test_multiple_forms_on_one_line() {
    let line = r#"f("a.py") d("src") f_s1_e2("b.py") dir_xml_lines("lib")"#;
    assert_eq!(
        rewrite_line(line),
        "{{ include_file('a.py') }} {{ include_folder('src') }} \
         {{ include_file('b.py', start_line=1, end_line=2) }} \
         {{ include_folder('lib', format_as='xml', line_numbers='short') }}"
    );
}

#[test]
fn test_repeated_form_replaced_globally() {
    assert_eq!(
        rewrite_line(r#"f("a") f("b") f("c")"#),
        "{{ include_file('a') }} {{ include_file('b') }} {{ include_file('c') }}"
    );
}

#[test]
fn test_dir_xml_does_not_claim_dir_xml_lines() {
    // dir_xml is tested before dir_xml_lines
    let result = rewrite_line(r#"dir_xml_lines("src")"#);
    assert_eq!(
        result,
        "{{ include_folder('src', format_as='xml', line_numbers='short') }}"
    );
    assert_eq!(result.matches("{{").count(), 1);
}

#[test]
fn test_range_form_not_split_into_start_and_end() {
    let result = rewrite_line(r#"f_s5_e9("x")"#);
    assert_eq!(result.matches("include_file").count(), 1);
    assert!(result.contains("start_line=5, end_line=9"));
}

#[test]
fn test_every_rule_matches_only_its_own_form() {
    for info in list_patterns() {
        let result = rewrite_line(info.shorthand);
        assert_eq!(
            result.matches("{{").count(),
            1,
            "{} expanded more than once: {}",
            info.shorthand,
            result
        );
    }
}

#[test]
fn test_identifier_suffix_not_matched() {
    assert_eq!(rewrite_line(r#"self("x")"#), r#"self("x")"#);
    assert_eq!(rewrite_line(r#"add("x")"#), r#"add("x")"#);
    assert_eq!(rewrite_line(r#"my_d_lines("x")"#), r#"my_d_lines("x")"#);
}

#[test]
fn test_punctuation_before_name_is_a_boundary() {
    assert_eq!(
        rewrite_line(r#"(f("x"))"#),
        "({{ include_file('x') }})"
    );
    assert_eq!(
        rewrite_line(r#"- d("docs")"#),
        "- {{ include_folder('docs') }}"
    );
}

#[test]
fn test_malformed_shorthand_left_verbatim() {
    let cases = [
        r#"f("unterminated)"#,
        r#"f()"#,
        r#"f("")"#,
        r#"f('single')"#,
        r#"f ("space")"#,
        r#"f_s("x")"#,
        r#"f_sx_e1("x")"#,
        r#"F("upper")"#,
    ];
    for case in cases {
        assert_eq!(rewrite_line(case), case, "should not rewrite {}", case);
    }
}

#[test]
fn test_expansion_is_not_rewritten_again() {
    let once = rewrite_line(r#"d_xml_fulllines("docs") f_s1("a")"#);
    assert_eq!(rewrite_line(&once), once);
}

#[test]
fn test_rules_cover_both_directives() {
    use super::rules::{Directive, RULES};

    let files = RULES
        .iter()
        .filter(|r| r.directive() == Directive::IncludeFile)
        .count();
    let folders = RULES
        .iter()
        .filter(|r| r.directive() == Directive::IncludeFolder)
        .count();
    assert_eq!(files, 8);
    assert_eq!(folders, 7);
}
