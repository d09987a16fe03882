//! promptform: turn the `input(...)` prompts of a script into a form.
//!
//! The library scans script source for literal `input("...")` calls and a
//! documentation block, producing a [`model::CliModel`]. The model can be
//! rendered as an HTML form, and a submitted form can be turned back into
//! the ordered answers the script expects on its standard input.
//!
//! ```
//! use std::collections::HashMap;
//! use promptform::responses::collect;
//! use promptform::scan::scan;
//!
//! let model = scan("'''Greeter'''\nname = input('Name [Bob]:')\nage = input('Age:')");
//! assert_eq!(model.len(), 2);
//!
//! let submission = HashMap::from([("1", "Ada"), ("2", "36")]);
//! assert_eq!(collect(submission), vec!["Ada", "36"]);
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod model;
pub mod prompt;
pub mod render;
pub mod responses;
pub mod scan;
