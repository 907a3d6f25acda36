// Resume screening: a two-stage pipeline (score, then reasons) over one submission.
// All LLM calls go through llm_client::CompletionModel.

use std::fmt;

use thiserror::Error;

use crate::llm_client::LlmError;

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod reasoning;
pub mod record;
pub mod scoring;

/// Which model call was in flight when a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Scoring,
    Reasoning,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Scoring => f.write_str("scoring"),
            PipelineStage::Reasoning => f.write_str("reasoning"),
        }
    }
}

/// Errors raised by a screening run. None are recovered locally.
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// The scoring reply contained no digits.
    #[error("Model returned no digits for the score: {reply:?}")]
    EmptyNumericResponse { reply: String },

    #[error("Model call failed during {stage}: {source}")]
    ModelCall {
        stage: PipelineStage,
        #[source]
        source: LlmError,
    },
}
