//! Source scanning: from script text to a [`CliModel`].
//!
//! The scanner is deliberately textual. It recognizes:
//!
//! - `input("...")` / `input('...')` calls whose only argument is a string
//!   literal, in left-to-right order;
//! - the first `"""` or `'''` documentation block, which supplies the title
//!   (first non-empty line) and description (the rest).
//!
//! Prompts built from variables or concatenation are not seen.

mod calls;
mod docblock;


pub use calls::scan_prompts;
pub use docblock::{DocBlock, scan_doc_block};

use crate::error::{PromptFormError, Result};
use crate::model::CliModel;
use crate::prompt::parse_prompt;
use std::path::Path;
use tracing::debug;

/// Scan source text into a [`CliModel`].
///
/// Never fails. A script without prompts yields an empty input list and a
/// script without a documentation block yields an empty title and
/// description.
///
/// # Examples
///
/// ```
/// use promptform::scan::scan;
///
/// let model = scan("\"\"\"Greeter\nSays hi\"\"\"\nname = input(\"Name [Bob]:\")\n");
/// assert_eq!(model.title(), "Greeter");
/// assert_eq!(model.inputs()[0].label(), "Name :");
/// ```
pub fn scan(source: &str) -> CliModel {
    let inputs: Vec<_> = scan_prompts(source)
        .into_iter()
        .map(parse_prompt)
        .collect();
    let doc = scan_doc_block(source).unwrap_or_default();

    debug!(
        prompts = inputs.len(),
        has_title = !doc.title.is_empty(),
        "scanned source"
    );

    CliModel::new(inputs, doc.title, doc.description)
}

/// Read a script from disk and scan it.
///
/// # Returns
///
/// * `Ok(CliModel)` - The scanned model
/// * `Err(PromptFormError::IoError)` - The file could not be read
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<CliModel> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| {
        PromptFormError::IoError(format!(
            "failed to read script '{}': {}",
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), bytes = source.len(), "read script");
    Ok(scan(&source))
}
