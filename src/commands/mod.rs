//! Command implementations for promptform.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Handlers write their results to a caller-supplied
//! writer so they can be exercised in tests without touching the terminal.

mod ask;
mod collect;
mod form;
mod scan;

use crate::cli::{Cli, Command};
use promptform::config::Config;
use promptform::error::{PromptFormError, Result};
use std::io::Write;

/// Dispatch a command to its implementation.
///
/// Loads the configuration first so every command sees the same settings.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        PromptFormError::IoError(format!("failed to determine current directory: {}", e))
    })?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Scan(args) => scan::cmd_scan(&args, &config, &mut out)?,
        Command::Form(args) => form::cmd_form(&args, &config, &mut out)?,
        Command::Collect(args) => {
            let stdin = std::io::stdin();
            collect::cmd_collect(&args, &config, &mut stdin.lock(), &mut out)?
        }
        Command::Ask(args) => {
            let stdin = std::io::stdin();
            let stderr = std::io::stderr();
            ask::cmd_ask(&args, &config, &mut stdin.lock(), &mut stderr.lock(), &mut out)?
        }
    }

    out.flush().map_err(write_error)
}

/// Map a failed write on an output stream to an I/O error.
pub(crate) fn write_error(e: std::io::Error) -> PromptFormError {
    PromptFormError::IoError(format!("failed to write output: {}", e))
}

/// Print a response sequence, one answer per line.
pub(crate) fn write_responses(out: &mut impl Write, responses: &[String]) -> Result<()> {
    for answer in responses {
        if answer.contains('\n') {
            tracing::warn!("answer spans several lines; the script will read it as several answers");
        }
        writeln!(out, "{}", answer).map_err(write_error)?;
    }
    Ok(())
}
