//! Implementation of the `promptform scan` command.

use super::write_error;
use crate::cli::ScanArgs;
use promptform::config::{Config, OutputFormat};
use promptform::error::{PromptFormError, Result};
use promptform::model::CliModel;
use promptform::scan::scan_file;
use std::io::Write;
use tracing::info;

/// Execute the `promptform scan` command.
pub fn cmd_scan(args: &ScanArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let model = scan_file(&args.script)?;
    info!(script = %args.script.display(), prompts = model.len(), "scanned script");

    let format = args.format.unwrap_or(config.output_format);
    let rendered = format_model(&model, format)?;
    out.write_all(rendered.as_bytes()).map_err(write_error)
}

/// Render a model in the requested output format.
pub fn format_model(model: &CliModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(model)
            .map(|json| json + "\n")
            .map_err(|e| PromptFormError::IoError(format!("failed to serialize model: {}", e))),
        OutputFormat::Yaml => serde_yaml::to_string(model)
            .map_err(|e| PromptFormError::IoError(format!("failed to serialize model: {}", e))),
        OutputFormat::Text => Ok(format_text(model)),
    }
}

fn format_text(model: &CliModel) -> String {
    let mut text = String::new();

    if !model.title().is_empty() {
        text.push_str(&format!("Title: {}\n", model.title()));
    }
    if !model.description().is_empty() {
        text.push_str("Description:\n");
        for line in model.description().lines() {
            text.push_str(&format!("  {}\n", line));
        }
    }

    if model.is_empty() {
        text.push_str("No prompts found.\n");
        return text;
    }

    text.push_str("Prompts:\n");
    for (index, input) in model.indexed_inputs() {
        if input.has_placeholder() {
            text.push_str(&format!(
                "  {}. {} [{}]\n",
                index,
                input.label(),
                input.placeholder()
            ));
        } else {
            text.push_str(&format!("  {}. {}\n", index, input.label()));
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptform::scan::scan;
    use std::path::PathBuf;

    const SCRIPT: &str = "\"\"\"Greeter\nSays hello.\"\"\"\nname = input(\"Name [Bob]:\")\nage = input('Age:')\n";

    #[test]
    fn text_format_lists_prompts_with_indices() {
        let text = format_model(&scan(SCRIPT), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Title: Greeter\nDescription:\n  Says hello.\nPrompts:\n  1. Name : [Bob]\n  2. Age:\n"
        );
    }

    #[test]
    fn text_format_without_prompts() {
        let text = format_model(&scan("print('hi')"), OutputFormat::Text).unwrap();
        assert_eq!(text, "No prompts found.\n");
    }

    #[test]
    fn json_format_round_trips() {
        let model = scan(SCRIPT);
        let json = format_model(&model, OutputFormat::Json).unwrap();
        let parsed: CliModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn yaml_format_contains_fields() {
        let yaml = format_model(&scan(SCRIPT), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("title: Greeter"));
        assert!(yaml.contains("placeholder: Bob"));
    }

    #[test]
    fn cmd_scan_uses_config_format_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("greeter.py");
        std::fs::write(&script, SCRIPT).unwrap();

        let config = Config {
            output_format: OutputFormat::Text,
            ..Config::default()
        };
        let args = ScanArgs {
            script,
            format: None,
        };
        let mut out = Vec::new();
        cmd_scan(&args, &config, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Title: Greeter\n"));
    }

    #[test]
    fn cmd_scan_missing_script_is_io_error() {
        let args = ScanArgs {
            script: PathBuf::from("/nonexistent/promptform/script.py"),
            format: Some(OutputFormat::Json),
        };
        let err = cmd_scan(&args, &Config::default(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, PromptFormError::IoError(_)));
    }
}
