use std::sync::OnceLock;

use regex::Regex;

/// Trims the text and drops every line break, carriage return and tab left over from the page layout.
pub fn strip_layout_whitespace(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[\n\t\r]").expect("regex should be valid"));
    re.replace_all(s.trim(), "").into_owned()
}

/// Deletes pairs of spaces, leftmost first. An odd run keeps one space.
pub fn remove_double_spaces(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new("  ").expect("regex should be valid"));
    re.replace_all(s, "").into_owned()
}
