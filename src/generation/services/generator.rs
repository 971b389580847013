//! Uniform generation call surface.
//!
//! [`Generator`] wraps whichever backend family was resolved and erases the
//! differences between them: input shape is normalised, output shape
//! mirrors input, and call-time constraints are checked against the
//! backend's declared capabilities.

use super::{BackendHandle, BackendResolver, ResolveResult};
use crate::generation::domain::{
    BackendIdentifier, BackendMethod, BackendOptions, CapabilityMismatchError, GenerationError,
    GenerationInput, GenerationOptions, GenerationOutput, GenerationResult, InputShape,
};

/// Name of the output-length constraint reported in capability mismatches.
const MAX_LENGTH_CONSTRAINT: &str = "max_length";

/// Generation facade owning a single resolved backend.
#[derive(Debug, Clone)]
pub struct Generator {
    handle: BackendHandle,
}

impl Generator {
    /// Resolves a backend and wraps it.
    ///
    /// A missing or blank `path` uses the default identifier; a missing or
    /// blank `method` is inferred from the identifier.
    ///
    /// # Errors
    ///
    /// Returns resolution errors from [`BackendResolver::resolve`].
    pub fn new(
        resolver: &BackendResolver,
        path: Option<&str>,
        method: Option<&str>,
        options: &BackendOptions,
    ) -> ResolveResult<Self> {
        let identifier = BackendIdentifier::or_default(path);
        let family = method.and_then(BackendMethod::parse);
        let handle = resolver.resolve(&identifier, family, options)?;
        Ok(Self::from_handle(handle))
    }

    /// Wraps an already resolved backend.
    #[must_use]
    pub const fn from_handle(handle: BackendHandle) -> Self {
        Self { handle }
    }

    /// Returns the identifier of the wrapped backend.
    #[must_use]
    pub const fn identifier(&self) -> &BackendIdentifier {
        self.handle.identifier()
    }

    /// Returns the family of the wrapped backend.
    #[must_use]
    pub const fn family(&self) -> &BackendMethod {
        self.handle.family()
    }

    /// Generates text for a single prompt or a batch of prompts.
    ///
    /// The output has the same shape as the input: a single prompt yields a
    /// single output and a batch yields a batch of equal length in the same
    /// order. `options` are forwarded to the backend unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::CapabilityMismatch`] when the backend
    /// cannot bound output length, [`GenerationError::OutputShapeMismatch`]
    /// when the backend breaks the one-output-per-prompt contract, and
    /// [`GenerationError::Backend`] for backend failures.
    pub async fn generate(
        &self,
        input: impl Into<GenerationInput>,
        max_length: usize,
        options: &GenerationOptions,
    ) -> GenerationResult<GenerationOutput> {
        let backend = self.handle.backend();
        let capabilities = backend.capabilities();
        if !capabilities.bounds_output_length() {
            return Err(
                CapabilityMismatchError::new(self.family().clone(), MAX_LENGTH_CONSTRAINT).into(),
            );
        }

        let (prompts, shape) = input.into().into_parts();
        let expected = prompts.len();
        let outputs = if prompts.is_empty() {
            Vec::new()
        } else if capabilities.accepts_batches() || expected == 1 {
            let outputs = backend.generate(prompts, max_length, options).await?;
            self.ensure_count(expected, outputs.len())?;
            outputs
        } else {
            let mut outputs = Vec::with_capacity(expected);
            for prompt in prompts {
                let single = backend.generate(vec![prompt], max_length, options).await?;
                self.ensure_count(1, single.len())?;
                outputs.extend(single);
            }
            outputs
        };

        self.shape_output(shape, outputs)
    }

    fn ensure_count(&self, expected: usize, actual: usize) -> GenerationResult<()> {
        if expected == actual {
            return Ok(());
        }
        Err(GenerationError::OutputShapeMismatch {
            family: self.family().clone(),
            expected,
            actual,
        })
    }

    fn shape_output(
        &self,
        shape: InputShape,
        outputs: Vec<String>,
    ) -> GenerationResult<GenerationOutput> {
        match shape {
            InputShape::Batch => Ok(GenerationOutput::Batch(outputs)),
            InputShape::Single => {
                let actual = outputs.len();
                outputs
                    .into_iter()
                    .next()
                    .map(GenerationOutput::Single)
                    .ok_or_else(|| GenerationError::OutputShapeMismatch {
                        family: self.family().clone(),
                        expected: 1,
                        actual,
                    })
            }
        }
    }
}
