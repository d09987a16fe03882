//! Implementation of the `promptform form` command.

use super::write_error;
use crate::cli::FormArgs;
use promptform::config::Config;
use promptform::error::Result;
use promptform::render::{FormTemplate, render_form};
use promptform::scan::scan_file;
use std::io::Write;
use tracing::info;

/// Execute the `promptform form` command.
///
/// Command-line template paths win over configured ones, which win over
/// the built-in templates.
pub fn cmd_form(args: &FormArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let model = scan_file(&args.script)?;

    let form_path = args.template.as_deref().or(config.form_template.as_deref());
    let field_path = args
        .field_template
        .as_deref()
        .or(config.field_template.as_deref());
    let template = FormTemplate::load(form_path, field_path)?;
    let submit_label = args.submit_label.as_deref().unwrap_or(&config.submit_label);

    let html = render_form(&model, &template, submit_label)?;
    info!(script = %args.script.display(), fields = model.len(), "rendered form");

    out.write_all(html.as_bytes()).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptform::error::PromptFormError;
    use std::path::PathBuf;

    fn write_script(dir: &std::path::Path) -> PathBuf {
        let script = dir.join("city.py");
        std::fs::write(&script, "city = input(\"Your city [Seattle]:\")\n").unwrap();
        script
    }

    #[test]
    fn renders_with_built_in_template() {
        let dir = tempfile::tempdir().unwrap();
        let args = FormArgs {
            script: write_script(dir.path()),
            template: None,
            field_template: None,
            submit_label: None,
        };

        let mut out = Vec::new();
        cmd_form(&args, &Config::default(), &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.contains(r#"<label for="field-1">Your city :</label>"#));
        assert!(html.contains(r#"name="1" placeholder="Seattle""#));
        assert!(html.contains(r#"value="submit""#));
    }

    #[test]
    fn argument_template_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let from_config = dir.path().join("config-field.tmpl");
        let from_args = dir.path().join("arg-field.tmpl");
        std::fs::write(&from_config, "config:{label}\n").unwrap();
        std::fs::write(&from_args, "arg:{label}\n").unwrap();

        let config = Config {
            field_template: Some(from_config),
            submit_label: "Send".to_string(),
            ..Config::default()
        };
        let args = FormArgs {
            script: write_script(dir.path()),
            template: None,
            field_template: Some(from_args),
            submit_label: None,
        };

        let mut out = Vec::new();
        cmd_form(&args, &config, &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.contains("arg:Your city :"));
        assert!(!html.contains("config:"));
        assert!(html.contains(r#"value="Send""#));
    }

    #[test]
    fn broken_template_is_template_error() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("form.tmpl");
        std::fs::write(&template, "{fields}{unknown}").unwrap();

        let args = FormArgs {
            script: write_script(dir.path()),
            template: Some(template),
            field_template: None,
            submit_label: None,
        };

        let err = cmd_form(&args, &Config::default(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, PromptFormError::Template(_)));
    }
}
