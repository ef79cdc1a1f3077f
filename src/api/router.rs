//! Analysis API router.
//!
//! Routes are nested under `/api/`. A permissive CORS layer sits on top —
//! the consumer is a browser page, typically served from another origin.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::analysis::AnalysisEngine;
use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the analysis API router.
///
/// Returns a `Router` with all endpoints under `/api/`, ready to be
/// mounted on any axum server instance.
pub fn analysis_router(engine: Arc<AnalysisEngine>) -> Router {
    build_router(ApiContext::new(engine))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/analysis", post(endpoints::analysis::submit))
        .route(
            "/analysis/:id/acknowledge",
            post(endpoints::analysis::acknowledge),
        )
        .with_state(ctx);

    Router::new().nest("/api", api).layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::analysis::ollama::MockLlmClient;

    const THREE_CONDITIONS: &str = r#"```json
{
  "conditions": [
    {"condition": "Common Cold", "confidence": 0.3},
    {"condition": "Influenza", "confidence": 0.85},
    {"condition": "COVID-19", "confidence": 0.6}
  ]
}
```"#;

    fn test_router(client: MockLlmClient) -> Router {
        let engine = Arc::new(AnalysisEngine::new(Arc::new(client), "medgemma"));
        analysis_router(engine)
    }

    async fn post_json(
        router: &Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_model_ready() {
        let router = test_router(MockLlmClient::new(""));
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["model_ready"], true);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let router = test_router(MockLlmClient::new(""));
        let request = Request::builder()
            .uri("/nonexistent")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn end_to_end_submit_acknowledge_results() {
        let router = test_router(MockLlmClient::new(THREE_CONDITIONS));

        // Submit → success lands on the disclaimer gate, conditions withheld.
        let (status, json) = post_json(
            &router,
            "/api/analysis",
            serde_json::json!({"symptoms": "headache, fever, cough"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "disclaimer");
        assert!(json["disclaimer"]
            .as_str()
            .unwrap()
            .contains("does not constitute medical advice"));
        assert!(json.get("conditions").is_none(), "results must stay gated");

        let id = json["analysis_id"].as_str().unwrap().to_string();

        // Acknowledge → ranked, bucketed results.
        let (status, json) = post_json(
            &router,
            &format!("/api/analysis/{id}/acknowledge"),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "results");

        let cards = json["conditions"].as_array().unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0]["condition"], "Influenza");
        assert_eq!(cards[0]["bucket"], "High");
        assert_eq!(cards[0]["confidence_pct"], 85);
        assert_eq!(cards[1]["condition"], "COVID-19");
        assert_eq!(cards[1]["bucket"], "Medium");
        assert_eq!(cards[2]["condition"], "Common Cold");
        assert_eq!(cards[2]["bucket"], "Low");

        assert_eq!(json["chart"].as_array().unwrap().len(), 3);

        // The response is consumed exactly once.
        let (status, _) = post_json(
            &router,
            &format!("/api/analysis/{id}/acknowledge"),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn short_symptoms_fail_validation() {
        let router = test_router(MockLlmClient::new(THREE_CONDITIONS));
        let (status, json) = post_json(
            &router,
            "/api/analysis",
            serde_json::json!({"symptoms": "headache"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION");
        assert_eq!(json["error"]["fields"][0]["field"], "symptoms");
    }

    #[tokio::test]
    async fn overlong_history_fails_validation() {
        let router = test_router(MockLlmClient::new(THREE_CONDITIONS));
        let (status, json) = post_json(
            &router,
            "/api/analysis",
            serde_json::json!({
                "symptoms": "headache, fever, cough",
                "medical_history": "h".repeat(1001),
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["fields"][0]["field"], "medical_history");
    }

    #[tokio::test]
    async fn model_reply_without_conditions_never_reaches_results() {
        let router = test_router(MockLlmClient::new("```json\n{\"verdict\": \"ok\"}\n```"));
        let (status, json) = post_json(
            &router,
            "/api/analysis",
            serde_json::json!({"symptoms": "headache, fever, cough"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "INVALID_MODEL_RESPONSE");
        assert_eq!(
            json["error"]["message"],
            "AI model did not return a valid response."
        );
        assert!(json.get("analysis_id").is_none());
    }

    #[tokio::test]
    async fn capability_failure_surfaces_message_and_allows_retry() {
        let router = test_router(MockLlmClient::failing("rate limited"));
        let (status, json) = post_json(
            &router,
            "/api/analysis",
            serde_json::json!({"symptoms": "headache, fever, cough"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["message"], "rate limited");

        // The failure is transient — the next submission is processed.
        let (status, _) = post_json(
            &router,
            "/api/analysis",
            serde_json::json!({"symptoms": "headache, fever, cough"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn acknowledge_unknown_id_returns_404() {
        let router = test_router(MockLlmClient::new(THREE_CONDITIONS));
        let (status, json) = post_json(
            &router,
            &format!("/api/analysis/{}/acknowledge", uuid::Uuid::new_v4()),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
