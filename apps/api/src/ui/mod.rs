//! HTML form surface: paste a job description and a resume, press "Evaluate Match".
//!
//! Blank inputs are rejected here with a warning and never reach the pipeline.

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::pipeline::evaluate;
use crate::screening::record::{Evaluation, Score, Submission};
use crate::state::AppState;

pub const BLANK_INPUT_WARNING: &str = "Please enter both Job Description and Resume.";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub job_description: &'a str,
    pub resume: &'a str,
    pub warning: Option<&'a str>,
    pub error: Option<String>,
    pub outcome: Option<Outcome>,
}

/// What the page shows after a successful run.
pub struct Outcome {
    pub score: Score,
    pub reasons: Vec<String>,
}

impl From<Evaluation> for Outcome {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            score: evaluation.score,
            reasons: evaluation.reasons,
        }
    }
}

impl<'a> IndexPage<'a> {
    fn blank() -> Self {
        Self::with_inputs("", "")
    }

    fn with_inputs(job_description: &'a str, resume: &'a str) -> Self {
        Self {
            job_description,
            resume,
            warning: None,
            error: None,
            outcome: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EvaluateForm {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
}

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexPage::blank().render()?))
}

/// POST /evaluate
///
/// Runs the screening pipeline and re-renders the form with the result,
/// keeping the submitted text in place.
pub async fn handle_evaluate_form(
    State(state): State<AppState>,
    Form(form): Form<EvaluateForm>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let submission = Submission::new(form.job_description, form.resume);
    let mut page = IndexPage::with_inputs(&submission.job_description, &submission.resume);

    if submission.is_blank() {
        page.warning = Some(BLANK_INPUT_WARNING);
        return Ok((StatusCode::OK, Html(page.render()?)));
    }

    let status = match evaluate(state.llm.as_ref(), Uuid::new_v4(), submission.clone()).await {
        Ok(evaluation) => {
            page.outcome = Some(evaluation.into());
            StatusCode::OK
        }
        Err(e) => {
            let err = AppError::from(e);
            page.error = Some(err.public_message());
            err.status_and_code().0
        }
    };

    Ok((status, Html(page.render()?)))
}
