use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, warn};

use super::types::*;
use crate::error::{CopilotError, CopilotResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the generation proxy (`POST {contents, systemInstruction}`)
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl ProxyClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one prompt and returns the model's raw text, bounded by the
    /// client's deadline.
    pub async fn generate(&self, system_instruction: &str, prompt: &str) -> CopilotResult<String> {
        let request = ProxyRequest::new(prompt).with_system_instruction(system_instruction);

        debug!(
            endpoint = %self.endpoint,
            prompt_chars = prompt.len(),
            "Sending generation request"
        );

        match tokio::time::timeout(self.timeout, self.generate_inner(&request)).await {
            Ok(result) => result,
            Err(_) => {
                let duration_ms = self.timeout.as_millis() as u64;
                warn!(duration_ms, "Generation request timed out");
                Err(CopilotError::Timeout { duration_ms })
            }
        }
    }

    async fn generate_inner(&self, request: &ProxyRequest) -> CopilotResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(error_resp) = serde_json::from_str::<VendorError>(&error_text) {
                error!(
                    "Generation API error: {} (status: {:?})",
                    error_resp.error.message, error_resp.error.status
                );
                return Err(CopilotError::Vendor {
                    message: error_resp.error.message,
                    status_code: Some(status.as_u16()),
                });
            }

            error!(status = status.as_u16(), "Generation proxy returned an error");
            return Err(CopilotError::Vendor {
                message: error_text,
                status_code: Some(status.as_u16()),
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            CopilotError::MalformedResponse(format!("Unexpected response body: {e}"))
        })?;

        let text = parsed
            .text()
            .ok_or_else(|| {
                CopilotError::MalformedResponse("No response text from model".to_string())
            })?;

        debug!(response_chars = text.len(), "Received generation response");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn candidate(text: &str) -> serde_json::Value {
        json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]})
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "prompt"}]}],
                "systemInstruction": "system"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{\"ok\":true}")))
            .expect(1)
            .mount(&server)
            .await;

        let client = ProxyClient::new(format!("{}/generate", server.uri()));
        let text = client.generate("system", "prompt").await.unwrap();
        assert_eq!(text, "{\"ok\":true}");
    }

    #[tokio::test]
    async fn test_vendor_error_carries_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {"code": 403, "message": "API key invalid", "status": "PERMISSION_DENIED"}
            })))
            .mount(&server)
            .await;

        let client = ProxyClient::new(server.uri());
        match client.generate("s", "p").await {
            Err(CopilotError::Vendor {
                message,
                status_code,
            }) => {
                assert_eq!(message, "API key invalid");
                assert_eq!(status_code, Some(403));
            }
            other => panic!("expected vendor error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_candidate_text_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = ProxyClient::new(server.uri());
        let err = client.generate("s", "p").await.unwrap_err();
        assert!(matches!(err, CopilotError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_deadline_elapses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate("{}"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = ProxyClient::new(server.uri()).with_timeout(Duration::from_millis(50));
        let err = client.generate("s", "p").await.unwrap_err();
        assert!(matches!(err, CopilotError::Timeout { duration_ms: 50 }));
    }
}
