//! Response collection: from a form submission back to ordered answers.
//!
//! Forms name each field after the 1-based index of its input, so a
//! submission looks like `{"1": "Bob", "2": "42"}`. [`collect`] turns that
//! into `["Bob", "42"]`, the order in which the script will ask for them.
//!
//! Missing positions are filled with an empty string so the sequence is
//! always total.

#[cfg(test)]
mod tests;

use crate::error::{PromptFormError, Result};
use crate::model::CliModel;
use tracing::{debug, warn};

/// Highest positional key accepted. Larger keys are ignored so a hostile
/// submission cannot force a huge allocation.
pub const MAX_POSITION: usize = 10_000;

/// Outcome of aligning a response sequence with the prompts of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Responses, padded to at least the number of prompts.
    pub responses: Vec<String>,
    /// How many empty answers were appended.
    pub padded: usize,
    /// How many answers exceed the number of prompts.
    pub surplus: usize,
}

/// Build the ordered response sequence from a submission.
///
/// Each key that parses as a positive integer `n` (up to
/// [`MAX_POSITION`]) puts its value at position `n - 1`. Other keys are
/// ignored. The result is as long as the highest index seen; gaps hold `""`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use promptform::responses::collect;
///
/// let submission = HashMap::from([("2".to_string(), "b".to_string())]);
/// assert_eq!(collect(submission), vec!["".to_string(), "b".to_string()]);
/// ```
pub fn collect<I, K, V>(submission: I) -> Vec<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut responses: Vec<String> = Vec::new();

    for (key, value) in submission {
        let key = key.as_ref();
        let Some(index) = parse_index(key) else {
            debug!(key, "ignoring non-positional submission key");
            continue;
        };
        if index > MAX_POSITION {
            warn!(index, max = MAX_POSITION, "ignoring out-of-range submission key");
            continue;
        }

        if responses.len() < index {
            responses.resize(index, String::new());
        }
        responses[index - 1] = value.into();
    }

    responses
}

/// Parse a 1-based positional key. Zero, negative and non-numeric keys
/// yield `None`.
fn parse_index(key: &str) -> Option<usize> {
    match key.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// Split a `KEY=VALUE` command-line argument at the first `=`.
///
/// The value may itself contain `=` or be empty.
pub fn parse_pair(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(PromptFormError::UserError(format!(
            "invalid submission '{}': expected KEY=VALUE (e.g. 1=Bob)",
            arg
        ))),
    }
}

/// Pad `responses` with empty answers up to `expected` prompts.
///
/// A script that asks more questions than it was given answers would run out
/// of input, so callers align before handing the sequence over.
pub fn align(mut responses: Vec<String>, expected: usize) -> Alignment {
    let padded = expected.saturating_sub(responses.len());
    let surplus = responses.len().saturating_sub(expected);

    if padded > 0 {
        responses.resize(expected, String::new());
    }
    if surplus > 0 {
        warn!(surplus, expected, "more answers than prompts");
    }

    Alignment {
        responses,
        padded,
        surplus,
    }
}

/// Replace empty answers with the placeholder of the matching input.
pub fn fill_defaults(responses: &mut [String], model: &CliModel) {
    for (answer, input) in responses.iter_mut().zip(model.inputs()) {
        if answer.is_empty() && input.has_placeholder() {
            *answer = input.placeholder().to_string();
        }
    }
}
