use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_INDUSTRY: &str = "SaaS";
pub const DEFAULT_FUNDING_STAGE: &str = "Series A";

/// Known funding stages, in order.
pub const FUNDING_STAGES: [&str; 5] = [
    "Seed Stage",
    "Series A",
    "Series B+",
    "Enterprise",
    "Public/IPO",
];

/// Personalization inputs for ROI estimation.
///
/// Both fields are free-form; lookups fall back to documented defaults when
/// a value is not in the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub industry: String,
    #[serde(alias = "stage")]
    pub funding_stage: String,
}

impl UserContext {
    pub fn new(industry: impl Into<String>, funding_stage: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            funding_stage: funding_stage.into(),
        }
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self::new(DEFAULT_INDUSTRY, DEFAULT_FUNDING_STAGE)
    }
}
