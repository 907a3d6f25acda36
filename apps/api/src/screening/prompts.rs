// All LLM prompt templates for the screening pipeline.

use crate::screening::record::Score;

/// Scoring prompt template. Replace `{job_description}` and `{resume}` before sending.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"You are a resume screening assistant.
Compare the following Job Description and Resume.
Give a single integer score (0–100) based on how well the resume matches the JD.

Job Description:
{job_description}

Resume:
{resume}

Output only the number."#;

/// Reasoning prompt template. Replace `{score}`, `{job_description}` and `{resume}`.
pub const REASON_PROMPT_TEMPLATE: &str = r#"You scored this resume {score} out of 100 compared to the JD.
Now explain in exactly 3 concise bullet points why you gave this score.

Job Description:
{job_description}

Resume:
{resume}"#;

pub fn build_score_prompt(job_description: &str, resume: &str) -> String {
    fill(SCORE_PROMPT_TEMPLATE, job_description, resume)
}

pub fn build_reason_prompt(job_description: &str, resume: &str, score: &Score) -> String {
    // Score goes in first so a literal "{score}" inside user text is left alone.
    fill(
        &REASON_PROMPT_TEMPLATE.replace("{score}", &score.to_string()),
        job_description,
        resume,
    )
}

/// Substitutes both user inputs in a single pass so placeholder text inside the
/// job description can never be re-expanded with the resume.
fn fill(template: &str, job_description: &str, resume: &str) -> String {
    let mut out = String::with_capacity(template.len() + job_description.len() + resume.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{job_description}") {
            out.push_str(job_description);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{resume}") {
            out.push_str(resume);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
