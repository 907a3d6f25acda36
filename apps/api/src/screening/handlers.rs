//! Axum route handlers for the Evaluation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::pipeline::evaluate;
use crate::screening::record::{Score, Submission};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub job_description: String,
    pub resume: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub evaluation_id: Uuid,
    /// JSON number, or a decimal string when too large for one.
    pub score: Score,
    pub reasons: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/evaluations
///
/// Scores a resume against a job description and returns up to three reasons.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if request.resume.trim().is_empty() {
        return Err(AppError::Validation("resume cannot be empty".to_string()));
    }

    let evaluation_id = Uuid::new_v4();
    let submission = Submission::new(request.job_description, request.resume);
    let evaluation = evaluate(state.llm.as_ref(), evaluation_id, submission).await?;

    Ok(Json(EvaluateResponse {
        evaluation_id,
        score: evaluation.score,
        reasons: evaluation.reasons,
        evaluated_at: Utc::now(),
    }))
}
