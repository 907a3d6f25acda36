//! Reasoning stage — asks the model to justify the score and keeps up to three lines.

use tracing::debug;

use crate::llm_client::CompletionModel;
use crate::screening::prompts::build_reason_prompt;
use crate::screening::record::{Evaluation, ScoredSubmission};
use crate::screening::{PipelineStage, ScreeningError};

/// Number of reasons kept from the model reply.
pub const MAX_REASONS: usize = 3;

pub async fn reason(
    model: &dyn CompletionModel,
    scored: ScoredSubmission,
) -> Result<Evaluation, ScreeningError> {
    let prompt = build_reason_prompt(&scored.job_description, &scored.resume, &scored.score);
    let reply = model
        .complete(&prompt)
        .await
        .map_err(|source| ScreeningError::ModelCall {
            stage: PipelineStage::Reasoning,
            source,
        })?;
    debug!("Reasoning reply: {reply:?}");

    let reasons = parse_reasons(&reply);
    Ok(scored.with_reasons(reasons))
}

/// Splits `reply` into bullet lines with markers stripped, keeping the first three.
/// Short lists are returned as-is.
pub fn parse_reasons(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .take(MAX_REASONS)
        .map(str::to_owned)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '•')
}
