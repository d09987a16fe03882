//! Splitting a raw prompt into a label and a placeholder.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Character that makes the following bracket literal.
pub const ESCAPE: char = '\\';

/// One parsed prompt: what to show the user, and the suggested answer.
///
/// Both fields are trimmed. `placeholder` is empty when the prompt does not
/// declare one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Input {
    label: String,
    placeholder: String,
}

impl Input {
    /// Create an input from already-parsed parts.
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Display-ready prompt text with escapes resolved.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Declared default value, or `""`.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the prompt declared a non-empty placeholder.
    pub fn has_placeholder(&self) -> bool {
        !self.placeholder.is_empty()
    }
}

impl FromStr for Input {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_prompt(s))
    }
}

impl From<&str> for Input {
    fn from(raw: &str) -> Self {
        parse_prompt(raw)
    }
}

/// Parse a raw prompt string into an [`Input`].
///
/// The first unescaped `[` and the first unescaped `]` after it delimit the
/// placeholder. The text around the span is joined and trimmed to form the
/// label. Without such a span the whole trimmed string is the label.
/// Escaped brackets left in the label are then unescaped.
///
/// Never fails: any string yields a best-effort input.
///
/// # Examples
///
/// ```
/// use promptform::prompt::parse_prompt;
///
/// let input = parse_prompt("Your city [Seattle]:");
/// assert_eq!(input.label(), "Your city :");
/// assert_eq!(input.placeholder(), "Seattle");
///
/// let input = parse_prompt(r"Your city \[Seattle\]:");
/// assert_eq!(input.label(), "Your city [Seattle]:");
/// assert_eq!(input.placeholder(), "");
/// ```
pub fn parse_prompt(raw: &str) -> Input {
    let (label, placeholder) = match find_placeholder_span(raw) {
        Some((open, close)) => {
            let mut joined = String::with_capacity(raw.len());
            joined.push_str(&raw[..open]);
            joined.push_str(&raw[close + 1..]);
            (
                joined.trim().to_string(),
                raw[open + 1..close].trim().to_string(),
            )
        }
        None => (raw.trim().to_string(), String::new()),
    };

    Input {
        label: unescape_brackets(&label),
        placeholder,
    }
}

/// Byte offsets of the first unescaped `[` and the first unescaped `]`
/// following it.
fn find_placeholder_span(raw: &str) -> Option<(usize, usize)> {
    let mut open = None;
    let mut prev: Option<char> = None;

    for (pos, ch) in raw.char_indices() {
        let escaped = prev == Some(ESCAPE);
        match (ch, open) {
            ('[', None) if !escaped => open = Some(pos),
            (']', Some(start)) if !escaped => return Some((start, pos)),
            _ => {}
        }
        prev = Some(ch);
    }

    None
}

/// Replace `\[` and `\]` with plain brackets. Other backslashes are kept.
fn unescape_brackets(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE {
            if let Some(&next @ ('[' | ']')) = chars.peek() {
                chars.next();
                result.push(next);
                continue;
            }
        }
        result.push(ch);
    }

    result
}
