use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use server::{config::ProxyConfig, create_router, state::AppState};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VENDOR_PATH: &str = "/models/gemini-2.5-flash:generateContent";

async fn setup_test_server(api_key: Option<&str>) -> (TestServer, MockServer) {
    let mock_vendor = MockServer::start().await;

    let mut config = ProxyConfig::default().with_api_base_url(mock_vendor.uri());
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    let app = create_router(AppState::new(config));
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, mock_vendor)
}

fn proxy_body() -> Value {
    json!({
        "contents": [{"role": "user", "parts": [{"text": "Plan a launch video"}]}],
        "systemInstruction": "You are a video strategist."
    })
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_openapi_lists_budget_routes() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server.get("/api/openapi.json").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["paths"]["/api/budget/cost"].is_object());
        assert!(body["paths"]["/api/generate"].is_object());
    }
}

mod proxy {
    use super::*;

    fn assert_cors(response: &axum_test::TestResponse) {
        assert_eq!(response.header("access-control-allow-origin"), "*");
        assert_eq!(response.header("access-control-allow-methods"), "POST, OPTIONS");
        assert_eq!(response.header("access-control-allow-headers"), "Content-Type");
        assert_eq!(response.header("access-control-max-age"), "86400");
    }

    #[tokio::test]
    async fn test_preflight_returns_empty_204() {
        let (server, _mock) = setup_test_server(Some("test-key")).await;

        let response = server.method(Method::OPTIONS, "/api/generate").await;

        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let (server, _mock) = setup_test_server(Some("test-key")).await;

        let response = server.get("/api/generate").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.text(), "Method not allowed");
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_missing_contents_returns_400() {
        let (server, _mock) = setup_test_server(Some("test-key")).await;

        let response = server
            .post("/api/generate")
            .json(&json!({"systemInstruction": "x"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Missing contents in request"}));
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_missing_contents_checked_before_credential() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server.post("/api/generate").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unconfigured_credential_returns_500() {
        let (server, mock) = setup_test_server(None).await;

        let response = server.post("/api/generate").json(&proxy_body()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "API key not configured"}));
        assert!(mock.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_unparsable_body_returns_500() {
        let (server, _mock) = setup_test_server(Some("test-key")).await;

        let response = server.post("/api/generate").text("{not json").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "Internal server error");
        assert!(body["message"].is_string());
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_forwards_request_and_passes_response_through() {
        let (server, mock) = setup_test_server(Some("test-key")).await;

        let vendor_reply = json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "{\"recommendations\": []}"}]}}],
            "usageMetadata": {"totalTokenCount": 42}
        });

        Mock::given(method("POST"))
            .and(path(VENDOR_PATH))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "Plan a launch video"}]}],
                "generationConfig": {
                    "temperature": 0.9,
                    "topK": 40,
                    "topP": 0.95,
                    "maxOutputTokens": 8192,
                    "responseMimeType": "application/json"
                },
                "systemInstruction": {"parts": [{"text": "You are a video strategist."}]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&vendor_reply))
            .expect(1)
            .mount(&mock)
            .await;

        let response = server.post("/api/generate").json(&proxy_body()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, vendor_reply);
        assert_cors(&response);
    }

    #[tokio::test]
    async fn test_vendor_error_status_is_passed_through() {
        let (server, mock) = setup_test_server(Some("test-key")).await;

        let vendor_error = json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        });

        Mock::given(method("POST"))
            .and(path(VENDOR_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_json(&vendor_error))
            .mount(&mock)
            .await;

        let response = server.post("/api/generate").json(&proxy_body()).await;

        response.assert_status(StatusCode::TOO_MANY_REQUESTS);
        let body: Value = response.json();
        assert_eq!(body, vendor_error);
    }

    #[tokio::test]
    async fn test_non_json_vendor_reply_returns_500() {
        let (server, mock) = setup_test_server(Some("test-key")).await;

        Mock::given(method("POST"))
            .and(path(VENDOR_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&mock)
            .await;

        let response = server.post("/api/generate").json(&proxy_body()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "Internal server error");
    }
}

mod budget {
    use super::*;

    #[tokio::test]
    async fn test_cost_for_whiteboard() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/budget/cost")
            .json(&json!({"style": "whiteboard", "durationSeconds": 60}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["baseCost"], 2150);
        assert_eq!(body["totalCost"], 2150);
        assert_eq!(body["recommendedPackage"], "Growth");
        assert!(body["extras"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cost_with_extras() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/budget/cost")
            .json(&json!({
                "style": "whiteboard",
                "expedited": true,
                "multilingualCount": 2
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        // 2150 + 500 expedited + 2 * 500 languages
        assert_eq!(body["totalCost"], 3650);
        assert_eq!(body["extras"].as_array().unwrap().len(), 2);
        assert_eq!(body["recommendedPackage"], "Premium");
    }

    #[tokio::test]
    async fn test_cost_with_extreme_inputs_saturates() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/budget/cost")
            .json(&json!({
                "style": "3dAnimation",
                "durationSeconds": u32::MAX,
                "quantity": u32::MAX,
                "multilingualCount": u32::MAX
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["totalCost"], u64::MAX);
        assert_eq!(body["recommendedPackage"], "Flick");
    }

    #[tokio::test]
    async fn test_unknown_style_returns_400() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/budget/cost")
            .json(&json!({"style": "stopMotion"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("stopMotion"));
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server.post("/api/budget/roi").text("{oops").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_roi_projection() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/budget/roi")
            .json(&json!({
                "config": {"style": "whiteboard"},
                "context": {"industry": "SaaS", "fundingStage": "Series A"}
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["cost"], 2150);
        assert_eq!(body["productionTimeline"], "3-4 weeks");
        assert_eq!(body["estimatedLeads"]["monthly"], 225);
        assert_eq!(body["financialImpact"]["roiPct"], 37574);
        assert_eq!(body["breakEvenMonths"], 1);
    }

    #[tokio::test]
    async fn test_compare_ranks_best_first() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/budget/compare")
            .json(&json!({
                "options": [
                    {"name": "Premium", "style": "mixedMedia", "durationSeconds": 120},
                    {"name": "Lean", "style": "whiteboard"}
                ],
                "context": {"industry": "SaaS", "fundingStage": "Series A"}
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Lean", "Premium"]);
    }

    #[tokio::test]
    async fn test_recommendations() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/budget/recommendations")
            .json(&json!({"industry": "SaaS", "fundingStage": "Series A"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["name"], "Budget-Friendly Starter");
    }
}
