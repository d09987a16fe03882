//! Configuration types and defaults for promptform.

use serde::{Deserialize, Serialize};

/// Output format for a scanned model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default).
    #[default]
    Json,
    /// YAML document.
    Yaml,
    /// Human-readable listing.
    Text,
}

/// File name looked up in the current directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "promptform.yaml";

// Default value functions for serde
pub(crate) fn default_submit_label() -> String {
    crate::render::DEFAULT_SUBMIT_LABEL.to_string()
}
