pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;
use crate::ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route("/", get(ui::handle_index))
        .route("/evaluate", post(ui::handle_evaluate_form))
        // Evaluation API
        .route("/api/v1/evaluations", post(handlers::handle_evaluate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::stub::{Reply, ScriptedModel};
    use crate::ui::BLANK_INPUT_WARNING;

    fn router_with(model: Arc<ScriptedModel>) -> Router {
        build_router(AppState { llm: model })
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::post("/api/v1/evaluations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::post("/evaluate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = router_with(Arc::new(ScriptedModel::texts(&[])));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "resume-screener");
    }

    #[tokio::test]
    async fn test_api_evaluation_success() {
        let model = Arc::new(ScriptedModel::texts(&[
            "Score: 85",
            "- Strong skills match\n- Missing 3 years experience\n- Good education fit\n- Extra line",
        ]));
        let app = router_with(model.clone());

        let response = app
            .oneshot(json_request(
                r#"{"job_description": "Rust engineer", "resume": "Rust for 5 years"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["score"], 85);
        assert_eq!(json["reasons"].as_array().unwrap().len(), 3);
        assert_eq!(json["reasons"][1], "Missing 3 years experience");
        assert!(json["evaluation_id"].is_string());
        assert!(json["evaluated_at"].is_string());
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_api_returns_long_score_as_decimal_string() {
        let app = router_with(Arc::new(ScriptedModel::texts(&[
            "As of 2025-10-19 (ref 4815162342), score: 85",
            "- Reason",
        ])));

        let response = app
            .oneshot(json_request(r#"{"job_description": "jd", "resume": "cv"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["score"], "20251019481516234285");
        assert_eq!(json["reasons"][0], "Reason");
    }

    #[tokio::test]
    async fn test_api_rejects_blank_input_without_calling_model() {
        let model = Arc::new(ScriptedModel::texts(&[]));
        let app = router_with(model.clone());

        let response = app
            .oneshot(json_request(r#"{"job_description": "   ", "resume": "cv"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_api_empty_numeric_response() {
        let app = router_with(Arc::new(ScriptedModel::texts(&["no idea"])));

        let response = app
            .oneshot(json_request(r#"{"job_description": "jd", "resume": "cv"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"]["code"], "EMPTY_NUMERIC_RESPONSE");
    }

    #[tokio::test]
    async fn test_api_model_failure() {
        let app = router_with(Arc::new(ScriptedModel::new(vec![Reply::Fail(500)])));

        let response = app
            .oneshot(json_request(r#"{"job_description": "jd", "resume": "cv"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = router_with(Arc::new(ScriptedModel::texts(&[])));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Evaluate Match"));
    }

    #[tokio::test]
    async fn test_form_blank_field_warns_and_skips_model() {
        let model = Arc::new(ScriptedModel::texts(&[]));
        let app = router_with(model.clone());

        let response = app
            .oneshot(form_request("job_description=Rust+engineer&resume=+++"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(BLANK_INPUT_WARNING));
        assert!(html.contains("Rust engineer"));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_form_success_shows_score_and_reasons() {
        let app = router_with(Arc::new(ScriptedModel::texts(&[
            "72",
            "• Relevant backend work\n• No Kubernetes",
        ])));

        let response = app
            .oneshot(form_request("job_description=Backend&resume=Go+and+Rust"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Match Score: <strong>72 / 100</strong>"));
        assert!(html.contains("<li>Relevant backend work</li>"));
        assert!(html.contains("<li>No Kubernetes</li>"));
    }

    #[tokio::test]
    async fn test_form_failure_shows_generic_error() {
        let app = router_with(Arc::new(ScriptedModel::new(vec![Reply::Fail(429)])));

        let response = app
            .oneshot(form_request("job_description=jd&resume=cv"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_string(response).await;
        assert!(html.contains("could not be evaluated"));
        assert!(!html.contains("Match Score:"));
    }
}
