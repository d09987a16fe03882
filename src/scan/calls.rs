//! Finding literal `input(...)` calls.

use regex::Regex;
use std::sync::LazyLock;

/// `input` at a word boundary, called with exactly one single- or
/// double-quoted literal that does not contain its own quote or a newline.
static PROMPT_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\binput\(\s*(?:"([^"\n]*)"|'([^'\n]*)')\s*\)"#)
        .unwrap_or_else(|e| panic!("prompt call pattern must compile: {}", e))
});

/// Raw prompt strings of every literal `input(...)` call, in source order.
///
/// The literal is returned verbatim: no string escape processing, so a
/// `\[` in the source reaches the label parser as `\[`.
pub fn scan_prompts(source: &str) -> Vec<&str> {
    PROMPT_CALL
        .captures_iter(source)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}
