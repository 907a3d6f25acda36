use std::sync::Arc;

use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a scripted model in tests.
    pub llm: Arc<dyn CompletionModel>,
}
