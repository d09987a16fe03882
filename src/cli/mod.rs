//! CLI argument parsing for promptform.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use promptform::config::OutputFormat;
use std::path::PathBuf;

/// promptform: turn the input() prompts of a script into a form.
///
/// Scans a script for literal `input("...")` calls, renders them as a form
/// and turns submitted answers into the ordered lines the script reads
/// from its standard input.
#[derive(Parser, Debug)]
#[command(name = "promptform")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ./promptform.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptform.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the title, description and prompts found in a script.
    Scan(ScanArgs),

    /// Render the prompts of a script as an HTML form.
    ///
    /// Each field is named after the 1-based position of its prompt.
    Form(FormArgs),

    /// Turn a form submission into the ordered response sequence.
    ///
    /// Prints one answer per line, ready to pipe into the script.
    Collect(CollectArgs),

    /// Ask the prompts of a script interactively.
    ///
    /// Prompts go to stderr and answers are read from stdin; the response
    /// sequence is printed to stdout.
    Ask(AskArgs),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Script to scan.
    pub script: PathBuf,

    /// Output format (defaults to the config's `output_format`).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `form` command.
#[derive(Parser, Debug)]
pub struct FormArgs {
    /// Script to render a form for.
    pub script: PathBuf,

    /// Form template overriding the configured or built-in one.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Field template overriding the configured or built-in one.
    #[arg(long)]
    pub field_template: Option<PathBuf>,

    /// Submit button text (defaults to the config's `submit_label`).
    #[arg(long)]
    pub submit_label: Option<String>,
}

/// Arguments for the `collect` command.
#[derive(Parser, Debug)]
pub struct CollectArgs {
    /// Submitted fields as KEY=VALUE, where KEY is the 1-based prompt index.
    pub fields: Vec<String>,

    /// Read the submission as a JSON object from stdin instead.
    #[arg(long, conflicts_with = "fields")]
    pub json: bool,

    /// Align the answers with the prompts of this script.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Use placeholders for empty answers (requires --script).
    #[arg(long, requires = "script")]
    pub defaults: bool,
}

/// Arguments for the `ask` command.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Script whose prompts should be asked.
    pub script: PathBuf,

    /// Use placeholders for empty answers.
    #[arg(long)]
    pub defaults: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
