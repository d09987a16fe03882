//! Implementation of the `promptform collect` command.

use super::write_responses;
use crate::cli::CollectArgs;
use promptform::config::Config;
use promptform::error::{PromptFormError, Result};
use promptform::responses::{align, collect, fill_defaults, parse_pair};
use promptform::scan::scan_file;
use serde_json::Value;
use std::io::{Read, Write};
use tracing::{info, warn};

/// Execute the `promptform collect` command.
///
/// The submission comes from `KEY=VALUE` arguments, or from a JSON object
/// on `input` with `--json`. With `--script`, the answers are padded to the
/// script's prompt count.
pub fn cmd_collect(
    args: &CollectArgs,
    config: &Config,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let submission = if args.json {
        read_json_submission(input)?
    } else {
        args.fields
            .iter()
            .map(|field| parse_pair(field))
            .collect::<Result<Vec<_>>>()?
    };

    let mut responses = collect(submission);

    if let Some(script) = &args.script {
        let model = scan_file(script)?;
        let alignment = align(responses, model.len());
        if alignment.padded > 0 {
            warn!(missing = alignment.padded, "submission has fewer answers than prompts");
        }
        responses = alignment.responses;

        if args.defaults || config.placeholder_as_default {
            fill_defaults(&mut responses, &model);
        }
    }

    info!(answers = responses.len(), "collected responses");
    write_responses(out, &responses)
}

/// Parse a JSON object into key/value pairs.
///
/// Strings are taken as-is, numbers and booleans use their JSON text and
/// `null` is an empty answer.
fn read_json_submission(input: &mut impl Read) -> Result<Vec<(String, String)>> {
    let mut raw = String::new();
    input.read_to_string(&mut raw).map_err(|e| {
        PromptFormError::IoError(format!("failed to read submission from stdin: {}", e))
    })?;

    let object: serde_json::Map<String, Value> = serde_json::from_str(&raw).map_err(|e| {
        PromptFormError::UserError(format!("submission must be a JSON object: {}", e))
    })?;

    object
        .into_iter()
        .map(|(key, value)| {
            let answer = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(PromptFormError::UserError(format!(
                        "submission field '{}' must be a string, number, boolean or null",
                        key
                    )));
                }
            };
            Ok((key, answer))
        })
        .collect()
}
