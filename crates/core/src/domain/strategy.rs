use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Marketing lifecycle phase used to contextualize recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FunnelStage {
    Awareness,
    #[default]
    Consideration,
    Decision,
    Onboarding,
    Retention,
}

impl FunnelStage {
    pub const ALL: [FunnelStage; 5] = [
        Self::Awareness,
        Self::Consideration,
        Self::Decision,
        Self::Onboarding,
        Self::Retention,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awareness => "Awareness",
            Self::Consideration => "Consideration",
            Self::Decision => "Decision",
            Self::Onboarding => "Onboarding",
            Self::Retention => "Retention",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownFunnelStage(s.to_string()))
    }
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The form a user fills in before asking for a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInput {
    pub description: String,
    pub industry: String,
    pub stage: String,
    pub funnel: FunnelStage,
    pub goal: String,
    /// Target duration in seconds.
    pub duration: u32,
    /// Preferred styles as display labels, e.g. "2D Character".
    pub styles: Vec<String>,
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            description: String::new(),
            industry: "SaaS".to_string(),
            stage: "Series A".to_string(),
            funnel: FunnelStage::Consideration,
            goal: "Book Demos".to_string(),
            duration: 60,
            styles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    pub title: String,
    /// Match confidence, 0-100.
    pub score: f64,
    pub funnel_fit: String,
    pub description: String,
    pub style: String,
    pub why_perfect: String,
    pub metrics: Vec<String>,
    pub channels: Vec<String>,
    pub estimated_cost: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioMatch {
    pub title: String,
    pub industry: String,
    pub outcome: String,
    pub style: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreativeBrief {
    pub target_audience: String,
    pub core_message: String,
    pub storyline: String,
    #[serde(deserialize_with = "string_or_list")]
    pub ctas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunnelStep {
    pub stage: String,
    pub video_type: String,
    pub duration: String,
    pub metric: String,
}

/// Strategy produced either by the language model or by the local generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyResult {
    pub recommendations: Vec<Recommendation>,
    pub portfolio_matches: Vec<PortfolioMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_brief: Option<CreativeBrief>,
    pub pricing_tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_funnel: Option<Vec<FunnelStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl StrategyResult {
    pub fn top_recommendation(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}

/// Models sometimes answer a list field with a single string.
fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Null(Option<()>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::Null(_) => Vec::new(),
    })
}
