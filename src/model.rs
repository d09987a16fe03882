//! The parsed command-line interface of a script.

use crate::prompt::Input;
use serde::{Deserialize, Serialize};

/// Title, description and ordered prompts of a script.
///
/// The position of an input is its identity: the input at 1-based index `n`
/// is answered by the `n`-th response. No index is stored, so indices are
/// unique and gap-free by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliModel {
    title: String,
    description: String,
    inputs: Vec<Input>,
}

impl CliModel {
    pub fn new(
        inputs: Vec<Input>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            inputs,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Prompts in source order.
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Iterate over `(index, input)` pairs with 1-based indices.
    pub fn indexed_inputs(&self) -> impl Iterator<Item = (usize, &Input)> {
        self.inputs.iter().enumerate().map(|(i, input)| (i + 1, input))
    }

    /// Look up an input by its 1-based index.
    pub fn input(&self, index: usize) -> Option<&Input> {
        index.checked_sub(1).and_then(|i| self.inputs.get(i))
    }
}
