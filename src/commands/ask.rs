//! Implementation of the `promptform ask` command.
//!
//! Asks each prompt of a script on the terminal and prints the answers as a
//! response sequence, so they can be replayed with
//! `promptform ask script.py | python script.py`.

use super::{write_error, write_responses};
use crate::cli::AskArgs;
use promptform::config::Config;
use promptform::error::{PromptFormError, Result};
use promptform::model::CliModel;
use promptform::responses::fill_defaults;
use promptform::scan::scan_file;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Execute the `promptform ask` command.
pub fn cmd_ask(
    args: &AskArgs,
    config: &Config,
    input: &mut impl BufRead,
    prompts: &mut impl Write,
    out: &mut impl Write,
) -> Result<()> {
    let model = scan_file(&args.script)?;
    let mut responses = ask_all(&model, input, prompts)?;

    if args.defaults || config.placeholder_as_default {
        fill_defaults(&mut responses, &model);
    }

    info!(answers = responses.len(), "collected answers interactively");
    write_responses(out, &responses)
}

/// Ask every prompt in order and return one answer per prompt.
///
/// Running out of input leaves the remaining answers empty.
fn ask_all(
    model: &CliModel,
    input: &mut impl BufRead,
    prompts: &mut impl Write,
) -> Result<Vec<String>> {
    if !model.title().is_empty() {
        writeln!(prompts, "{}", model.title()).map_err(write_error)?;
    }
    if !model.description().is_empty() {
        writeln!(prompts, "{}\n", model.description()).map_err(write_error)?;
    }

    let mut responses = Vec::with_capacity(model.len());
    let mut exhausted = false;

    for (index, prompt) in model.indexed_inputs() {
        if exhausted {
            responses.push(String::new());
            continue;
        }

        let asked = if prompt.has_placeholder() {
            write!(prompts, "{} [{}] ", prompt.label(), prompt.placeholder())
        } else {
            write!(prompts, "{} ", prompt.label())
        };
        asked.and_then(|()| prompts.flush()).map_err(write_error)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|e| {
            PromptFormError::IoError(format!("failed to read answer {}: {}", index, e))
        })?;
        if read == 0 {
            warn!(index, "input ended before all prompts were answered");
            exhausted = true;
        }

        responses.push(line.trim_end_matches(['\r', '\n']).to_string());
    }

    Ok(responses)
}
