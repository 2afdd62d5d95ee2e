use std::fmt;
use std::time::Duration;

use copilot_core::domain::{StrategyResult, UserInput};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::CopilotError;
use crate::gemini::ProxyClient;
use crate::{fallback, parser, prompts};

/// Why the local generator answered instead of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FallbackReason {
    NotConfigured,
    Timeout,
    Upstream(String),
    Malformed(String),
}

impl From<CopilotError> for FallbackReason {
    fn from(error: CopilotError) -> Self {
        match error {
            CopilotError::Timeout { .. } => Self::Timeout,
            CopilotError::MalformedResponse(msg) => Self::Malformed(msg),
            CopilotError::Serialization(e) => Self::Malformed(e.to_string()),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => f.write_str("generation proxy not configured"),
            Self::Timeout => f.write_str("generation request timed out"),
            Self::Upstream(msg) => write!(f, "generation request failed: {msg}"),
            Self::Malformed(msg) => write!(f, "unusable model response: {msg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StrategyOutcome {
    Live(StrategyResult),
    Fallback {
        result: StrategyResult,
        reason: FallbackReason,
    },
}

impl StrategyOutcome {
    pub fn result(&self) -> &StrategyResult {
        match self {
            Self::Live(result) | Self::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> StrategyResult {
        match self {
            Self::Live(result) | Self::Fallback { result, .. } => result,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Produces a strategy for a form input, through the model when a proxy is
/// configured and from the knowledge base otherwise.
#[derive(Clone, Default)]
pub struct StrategyGenerator {
    client: Option<ProxyClient>,
}

impl StrategyGenerator {
    pub fn new(client: Option<ProxyClient>) -> Self {
        Self { client }
    }

    /// Blank or missing endpoints leave the generator in fallback-only mode.
    pub fn from_endpoint(endpoint: Option<&str>, timeout: Duration) -> Self {
        let client = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(|e| ProxyClient::new(e).with_timeout(timeout));
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Never fails: every error path ends in the local generator.
    pub async fn generate(&self, input: &UserInput, funnel_mode: bool) -> StrategyOutcome {
        let Some(client) = &self.client else {
            info!("No generation proxy configured, using local strategy");
            return Self::fallback(input, funnel_mode, FallbackReason::NotConfigured);
        };

        let system = prompts::system_instruction();
        let prompt = prompts::strategy_prompt(input, funnel_mode);

        let parsed = match client.generate(&system, &prompt).await {
            Ok(text) => parser::parse_strategy(&text),
            Err(e) => Err(e),
        };

        match parsed {
            Ok(result) => {
                info!(
                    recommendations = result.recommendations.len(),
                    funnel_mode, "Strategy generated by model"
                );
                StrategyOutcome::Live(parser::validate_and_enhance(result, input))
            }
            Err(e) => {
                warn!(error = %e, "Strategy generation failed, using local strategy");
                Self::fallback(input, funnel_mode, e.into())
            }
        }
    }

    fn fallback(input: &UserInput, funnel_mode: bool, reason: FallbackReason) -> StrategyOutcome {
        StrategyOutcome::Fallback {
            result: fallback::generate(input, funnel_mode),
            reason,
        }
    }
}
