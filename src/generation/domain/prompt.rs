//! Input and output shapes of the generation call surface.

use serde::{Deserialize, Serialize};

/// Maximum output length used when the caller does not choose one.
pub const DEFAULT_MAX_LENGTH: usize = 512;

/// A single prompt or an ordered batch of prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationInput {
    /// One prompt producing one output.
    Single(String),
    /// An ordered batch producing one output per prompt.
    Batch(Vec<String>),
}

impl GenerationInput {
    /// Returns the number of prompts.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(prompts) => prompts.len(),
        }
    }

    /// Returns whether the input is an empty batch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Splits the input into its prompts and its shape.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, InputShape) {
        match self {
            Self::Single(prompt) => (vec![prompt], InputShape::Single),
            Self::Batch(prompts) => (prompts, InputShape::Batch),
        }
    }
}

impl From<String> for GenerationInput {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for GenerationInput {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for GenerationInput {
    fn from(value: Vec<String>) -> Self {
        Self::Batch(value)
    }
}

impl From<Vec<&str>> for GenerationInput {
    fn from(value: Vec<&str>) -> Self {
        Self::Batch(value.into_iter().map(str::to_owned).collect())
    }
}

/// Shape of a [`GenerationInput`], mirrored by its [`GenerationOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// A single prompt.
    Single,
    /// A batch of prompts.
    Batch,
}

/// Generated text in the same shape as the input that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationOutput {
    /// Output for a single prompt.
    Single(String),
    /// Outputs for a batch, in prompt order.
    Batch(Vec<String>),
}

impl GenerationOutput {
    /// Returns the single output, or `None` for batch output.
    #[must_use]
    pub fn into_single(self) -> Option<String> {
        match self {
            Self::Single(text) => Some(text),
            Self::Batch(_) => None,
        }
    }

    /// Returns the outputs as an ordered list regardless of shape.
    #[must_use]
    pub fn into_batch(self) -> Vec<String> {
        match self {
            Self::Single(text) => vec![text],
            Self::Batch(texts) => texts,
        }
    }

    /// Returns the number of outputs.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(texts) => texts.len(),
        }
    }

    /// Returns whether this is an empty batch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
