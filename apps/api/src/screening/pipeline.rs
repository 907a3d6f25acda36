//! Screening pipeline — scoring then reasoning, always in that order.
//!
//! Flow: Submission → score() → ScoredSubmission → reason() → Evaluation.
//! There is no branching, retry or recovery; the first error aborts the run.

use tracing::info;
use uuid::Uuid;

use crate::llm_client::CompletionModel;
use crate::screening::record::{Evaluation, Submission};
use crate::screening::{reasoning, scoring, ScreeningError};

/// Runs both stages for one submission.
///
/// `evaluation_id` is only used to correlate log lines for this run.
pub async fn evaluate(
    model: &dyn CompletionModel,
    evaluation_id: Uuid,
    submission: Submission,
) -> Result<Evaluation, ScreeningError> {
    info!(
        "Evaluation {evaluation_id}: scoring (jd={} chars, resume={} chars)",
        submission.job_description.len(),
        submission.resume.len()
    );
    let scored = scoring::score(model, submission).await?;
    info!("Evaluation {evaluation_id}: scored {}/100", scored.score);

    let evaluation = reasoning::reason(model, scored).await?;
    info!(
        "Evaluation {evaluation_id}: done with {} reasons",
        evaluation.reasons.len()
    );

    Ok(evaluation)
}
