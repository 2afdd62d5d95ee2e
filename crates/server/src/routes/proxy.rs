use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use copilot::gemini::{GenerateContentRequest, GenerationConfig, SystemInstruction};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::error::ProxyError;
use crate::state::AppState;

pub const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    (ACCESS_CONTROL_MAX_AGE, "86400"),
];

/// Browser-facing request body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Conversation in the generation API's content format.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub contents: Option<Value>,
    #[serde(default)]
    pub system_instruction: Option<String>,
}

/// Missing, null, empty and zero-like `contents` are all treated as absent.
fn has_contents(contents: &Option<Value>) -> bool {
    match contents {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

/// Adds the CORS headers to every proxy response.
pub async fn apply_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Vendor response, passed through unchanged"),
        (status = 400, description = "Missing contents"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Credential not configured or upstream failure")
    ),
    tag = "proxy"
)]
pub async fn generate(State(state): State<AppState>, body: Bytes) -> Result<Response, ProxyError> {
    let payload: GenerateRequest =
        serde_json::from_slice(&body).map_err(|e| ProxyError::Internal(e.to_string()))?;

    if !has_contents(&payload.contents) {
        return Err(ProxyError::MissingContents);
    }

    let Some(api_key) = state.config.api_key.as_deref() else {
        return Err(ProxyError::NotConfigured);
    };

    let request = GenerateContentRequest {
        contents: payload.contents.unwrap_or(Value::Null),
        generation_config: GenerationConfig::default(),
        system_instruction: payload
            .system_instruction
            .filter(|s| !s.is_empty())
            .map(SystemInstruction::from_text),
    };

    debug!(model = %state.config.model, "Forwarding generation request");

    let response = state
        .http
        .post(state.config.generate_url())
        .query(&[("key", api_key)])
        .timeout(state.config.timeout)
        .json(&request)
        .send()
        .await
        .map_err(|e| ProxyError::Internal(e.without_url().to_string()))?;

    let status = response.status();
    let data: Value = response
        .json()
        .await
        .map_err(|e| ProxyError::Internal(e.without_url().to_string()))?;

    info!(status = status.as_u16(), "Generation request proxied");
    Ok((status, Json(data)).into_response())
}
