//! Turns raw model text into a validated [`StrategyResult`].

use std::sync::OnceLock;

use copilot_core::domain::{StrategyResult, UserInput};
use copilot_core::knowledge::find_client_containing;
use regex::Regex;
use tracing::debug;

use crate::error::{CopilotError, CopilotResult};

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("fence regex is valid")
    })
}

fn object_regex() -> &'static Regex {
    static OBJECT: OnceLock<Regex> = OnceLock::new();
    OBJECT.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("object regex is valid"))
}

/// Strips Markdown code fences and narrows the text to its outermost JSON
/// object.
pub fn extract_json(text: &str) -> &str {
    let unfenced = fence_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text.trim(), |m| m.as_str());

    object_regex()
        .find(unfenced)
        .map_or(unfenced, |m| m.as_str())
}

/// Parses model output leniently: missing fields take their defaults.
pub fn parse_strategy(text: &str) -> CopilotResult<StrategyResult> {
    let json = extract_json(text);
    serde_json::from_str(json).map_err(|e| {
        debug!(error = %e, "Model output is not a strategy object");
        CopilotError::MalformedResponse(e.to_string())
    })
}

/// Fills in what the model left out and swaps portfolio matches for the
/// studio's real client records where a name matches.
pub fn validate_and_enhance(mut result: StrategyResult, input: &UserInput) -> StrategyResult {
    for recommendation in &mut result.recommendations {
        if recommendation.duration.is_none() {
            recommendation.duration = Some(format!("{}s", input.duration));
        }
        recommendation.score = recommendation.score.clamp(0.0, 100.0);
    }

    for portfolio_match in &mut result.portfolio_matches {
        let title = portfolio_match.title.trim();
        if title.is_empty() {
            continue;
        }
        if let Some(client) = find_client_containing(title) {
            portfolio_match.title = client.name.to_string();
            portfolio_match.industry = client.industry.to_string();
            portfolio_match.outcome = client.outcome.to_string();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_core::domain::PortfolioMatch;

    #[test]
    fn test_extract_json_from_fenced_block() {
        let text = "```json\n{\"pricingTier\": \"Growth Package\"}\n```";
        assert_eq!(extract_json(text), "{\"pricingTier\": \"Growth Package\"}");
    }

    #[test]
    fn test_extract_json_from_surrounding_prose() {
        let text = "Here is your strategy: {\"a\": {\"b\": 1}} Hope it helps!";
        assert_eq!(extract_json(text), "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn test_parse_strategy_rejects_non_json() {
        let err = parse_strategy("I'm sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, CopilotError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_strategy_defaults_missing_fields() {
        let result = parse_strategy("{\"pricingTier\": \"Flick Package\"}").unwrap();
        assert!(result.recommendations.is_empty());
        assert_eq!(result.pricing_tier, "Flick Package");
    }

    #[test]
    fn test_enhance_sets_duration_and_clamps_score() {
        let json = r#"{"recommendations": [
            {"title": "A", "score": 140},
            {"title": "B", "score": -3, "duration": "45s"}
        ]}"#;
        let input = UserInput {
            duration: 90,
            ..UserInput::default()
        };

        let result = validate_and_enhance(parse_strategy(json).unwrap(), &input);
        assert_eq!(result.recommendations[0].duration.as_deref(), Some("90s"));
        assert_eq!(result.recommendations[0].score, 100.0);
        assert_eq!(result.recommendations[1].duration.as_deref(), Some("45s"));
        assert_eq!(result.recommendations[1].score, 0.0);
    }

    #[test]
    fn test_enhance_replaces_known_portfolio_clients() {
        let result = StrategyResult {
            portfolio_matches: vec![
                PortfolioMatch {
                    title: "mcafee".to_string(),
                    industry: "Security".to_string(),
                    outcome: "Great".to_string(),
                    style: "Motion Graphics".to_string(),
                },
                PortfolioMatch {
                    title: "Initech".to_string(),
                    industry: "Software".to_string(),
                    outcome: "Fine".to_string(),
                    style: "Whiteboard".to_string(),
                },
            ],
            ..StrategyResult::default()
        };

        let result = validate_and_enhance(result, &UserInput::default());
        let known = &result.portfolio_matches[0];
        assert_eq!(known.title, "McAfee MVISION");
        assert_eq!(known.industry, "Cybersecurity");
        assert_eq!(known.outcome, "35% increase in trial signups");
        assert_eq!(known.style, "Motion Graphics");
        assert_eq!(result.portfolio_matches[1].title, "Initech");
    }
}
