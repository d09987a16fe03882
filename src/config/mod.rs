//! Configuration model for promptform.
//!
//! Configuration is an optional YAML file (`promptform.yaml` in the current
//! directory, or the path given with `--config`). Parsing is forward
//! compatible: unknown fields are ignored and every field has a default.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{CONFIG_FILE_NAME, OutputFormat};
