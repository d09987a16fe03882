//! Prompt label parsing.
//!
//! A raw prompt is the literal string passed to `input(...)` in a script.
//! It may declare a placeholder (a default or example answer) inside square
//! brackets:
//!
//! ```text
//! Your city [Seattle]:
//! ```
//!
//! Brackets preceded by a backslash are literal and end up in the label:
//!
//! ```text
//! Your city \[Seattle\]: [Placeholder]
//! ```

mod parser;


pub use parser::{ESCAPE, Input, parse_prompt};
