//! Documentation block extraction.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Shortest `"""..."""` or `'''...'''` block; the closing delimiter must
/// match the opening one.
static DOC_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"""(.*?)"""|'''(.*?)'''"#)
        .unwrap_or_else(|e| panic!("doc block pattern must compile: {}", e))
});

/// Title and description taken from a documentation block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    /// First non-empty line, trimmed.
    pub title: String,
    /// Remaining lines, trimmed as a block.
    pub description: String,
}

impl DocBlock {
    /// Split block content into title and description.
    pub fn from_content(content: &str) -> Self {
        let mut lines = content.lines().skip_while(|line| line.trim().is_empty());

        let title = lines.next().map(str::trim).unwrap_or_default().to_string();
        let description = lines.collect::<Vec<_>>().join("\n").trim().to_string();

        Self { title, description }
    }
}

/// Find the first terminated documentation block in `source`.
///
/// An unterminated block is ignored rather than yielding a partial title.
pub fn scan_doc_block(source: &str) -> Option<DocBlock> {
    let caps = DOC_BLOCK.captures(source)?;
    let content = caps.get(1).or_else(|| caps.get(2))?;
    Some(DocBlock::from_content(content.as_str()))
}
