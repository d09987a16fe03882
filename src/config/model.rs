//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for promptform.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format for `scan`.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Text of the submit button in rendered forms.
    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    /// Path to a form template replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_template: Option<PathBuf>,

    /// Path to a per-field template replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_template: Option<PathBuf>,

    /// Whether empty answers take the placeholder of their prompt.
    #[serde(default)]
    pub placeholder_as_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            submit_label: default_submit_label(),
            form_template: None,
            field_template: None,
            placeholder_as_default: false,
        }
    }
}
