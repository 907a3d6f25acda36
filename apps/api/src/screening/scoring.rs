//! Scoring stage — asks the model for a 0–100 match score and extracts it.
//!
//! Extraction keeps every ASCII digit in the reply and concatenates them in
//! order. A reply that echoes other numbers ("2025 ... 85") therefore yields a
//! nonsensical value (202585); that is kept as-is, neither clamped nor bounded.
//! Only ASCII digits count.

use tracing::debug;

use crate::llm_client::CompletionModel;
use crate::screening::prompts::build_score_prompt;
use crate::screening::record::{Score, ScoredSubmission, Submission};
use crate::screening::{PipelineStage, ScreeningError};

pub async fn score(
    model: &dyn CompletionModel,
    submission: Submission,
) -> Result<ScoredSubmission, ScreeningError> {
    let prompt = build_score_prompt(&submission.job_description, &submission.resume);
    let reply = model
        .complete(&prompt)
        .await
        .map_err(|source| ScreeningError::ModelCall {
            stage: PipelineStage::Scoring,
            source,
        })?;
    debug!("Scoring reply: {reply:?}");

    let score = parse_score(&reply)?;
    Ok(submission.with_score(score))
}

/// Concatenates the digits of `reply` and parses them as an integer.
pub fn parse_score(reply: &str) -> Result<Score, ScreeningError> {
    let digits: String = reply.chars().filter(|c| c.is_ascii_digit()).collect();

    Score::from_digits(&digits).ok_or_else(|| ScreeningError::EmptyNumericResponse {
        reply: reply.to_string(),
    })
}
