//! HTML form rendering for a [`CliModel`].

use super::template::{Template, TemplateError};
use crate::error::{PromptFormError, Result};
use crate::model::CliModel;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Built-in form template.
///
/// Variables: `title`, `description`, `title_block`, `description_block`,
/// `fields`, `submit_label`.
pub const DEFAULT_FORM_TEMPLATE: &str = r#"{title_block}{description_block}<form method="post">
{fields}    <input type="submit" value="{submit_label}">
</form>
"#;

/// Built-in template for one field. Variables: `index`, `label`,
/// `placeholder`.
pub const DEFAULT_FIELD_TEMPLATE: &str = r#"    <label for="field-{index}">{label}</label>
    <input type="text" id="field-{index}" name="{index}" placeholder="{placeholder}">
"#;

/// Default submit button text.
pub const DEFAULT_SUBMIT_LABEL: &str = "submit";

/// Pair of templates used to render a form: one for the whole form and one
/// repeated per input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTemplate {
    form: Template,
    field: Template,
}

impl Default for FormTemplate {
    fn default() -> Self {
        Self::from_sources(DEFAULT_FORM_TEMPLATE, DEFAULT_FIELD_TEMPLATE)
            .unwrap_or_else(|e| panic!("built-in form template must parse: {}", e))
    }
}

impl FormTemplate {
    /// Parse a form template and a field template.
    pub fn from_sources(form: &str, field: &str) -> std::result::Result<Self, TemplateError> {
        Ok(Self {
            form: Template::parse(form)?,
            field: Template::parse(field)?,
        })
    }

    /// Load template overrides from disk; a `None` path keeps the built-in
    /// template for that part.
    pub fn load(form_path: Option<&Path>, field_path: Option<&Path>) -> Result<Self> {
        let form = match form_path {
            Some(path) => read_template(path)?,
            None => DEFAULT_FORM_TEMPLATE.to_string(),
        };
        let field = match field_path {
            Some(path) => read_template(path)?,
            None => DEFAULT_FIELD_TEMPLATE.to_string(),
        };

        Ok(Self::from_sources(&form, &field)?)
    }
}

fn read_template(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "loading form template");
    std::fs::read_to_string(path).map_err(|e| {
        PromptFormError::IoError(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Render `model` as an HTML form.
///
/// Every field is named after the 1-based index of its input, which is the
/// key [`crate::responses::collect`] expects back. Model text is
/// HTML-escaped before substitution.
///
/// # Examples
///
/// ```
/// use promptform::render::{FormTemplate, render_form};
/// use promptform::scan::scan;
///
/// let model = scan("input('Name [Bob]:')");
/// let html = render_form(&model, &FormTemplate::default(), "submit").unwrap();
/// assert!(html.contains(r#"name="1" placeholder="Bob""#));
/// ```
pub fn render_form(
    model: &CliModel,
    template: &FormTemplate,
    submit_label: &str,
) -> std::result::Result<String, TemplateError> {
    let mut fields = String::new();
    for (index, input) in model.indexed_inputs() {
        let vars = HashMap::from([
            ("index", index.to_string()),
            ("label", escape_html(input.label())),
            ("placeholder", escape_html(input.placeholder())),
        ]);
        fields.push_str(&template.field.render(&vars)?);
    }

    let title = escape_html(model.title());
    let description = escape_html(model.description());
    let title_block = if title.is_empty() {
        String::new()
    } else {
        format!("<h1>{}</h1>\n", title)
    };
    let description_block = if description.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>\n", description)
    };

    let vars = HashMap::from([
        ("title", title),
        ("description", description),
        ("title_block", title_block),
        ("description_block", description_block),
        ("fields", fields),
        ("submit_label", escape_html(submit_label)),
    ]);

    template.form.render(&vars)
}

/// Escape text for use in HTML content and double- or single-quoted
/// attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
