//! Side-by-side comparison of up to three recommendations.

use chrono::{DateTime, Utc};
use copilot_core::domain::{AnimationStyle, Recommendation, UserInput};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

pub const MAX_COMPARISONS: usize = 3;
const UNKNOWN_STYLE_COST: &str = "$2,000 - $5,000";
const UNKNOWN_STYLE_TIMELINE: &str = "4-6 weeks";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOption {
    /// 1-based position in the comparison.
    pub id: u32,
    pub title: String,
    pub score: f64,
    pub style: String,
    pub description: String,
    pub why_perfect: String,
    pub duration_seconds: u32,
    pub estimated_cost: String,
    pub timeline: String,
    pub best_for: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonExport {
    pub session_id: Uuid,
    pub compared: usize,
    pub options: Vec<ComparisonOption>,
    pub timestamp: DateTime<Utc>,
}

/// Price band for a style label such as "2D Character Animation".
pub fn estimate_cost(style: &str) -> String {
    AnimationStyle::from_label(style)
        .map(|s| s.price_range().label())
        .unwrap_or_else(|| UNKNOWN_STYLE_COST.to_string())
}

pub fn estimate_timeline(style: &str) -> &'static str {
    AnimationStyle::from_label(style)
        .map(|s| s.production_timeline())
        .unwrap_or(UNKNOWN_STYLE_TIMELINE)
}

pub fn best_use_case(style: &str) -> &'static str {
    if style.contains("2D") {
        "Awareness campaigns, social media, homepage"
    } else if style.contains("Motion") {
        "Technical audiences, data visualization"
    } else if style.contains("3D") {
        "Product showcases, premium positioning"
    } else if style.contains("Mixed") {
        "Brand building, high-trust content"
    } else if style.contains("Whiteboard") {
        "Training, education, process explanation"
    } else {
        "Multiple use cases across funnel"
    }
}

#[derive(Debug, Clone)]
pub struct ComparisonSession {
    id: Uuid,
    options: Vec<ComparisonOption>,
}

impl Default for ComparisonSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            options: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Replaces the compared options with the first three recommendations.
    pub fn enable(
        &mut self,
        recommendations: &[Recommendation],
        input: &UserInput,
    ) -> &[ComparisonOption] {
        self.options = recommendations
            .iter()
            .take(MAX_COMPARISONS)
            .enumerate()
            .map(|(idx, rec)| ComparisonOption {
                id: idx as u32 + 1,
                title: rec.title.clone(),
                score: rec.score,
                style: rec.style.clone(),
                description: rec.description.clone(),
                why_perfect: rec.why_perfect.clone(),
                duration_seconds: input.duration,
                estimated_cost: estimate_cost(&rec.style),
                timeline: estimate_timeline(&rec.style).to_string(),
                best_for: best_use_case(&rec.style).to_string(),
            })
            .collect();

        debug!(session = %self.id, compared = self.options.len(), "Comparison enabled");
        &self.options
    }

    pub fn options(&self) -> &[ComparisonOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Picks an option by id.
    pub fn select(&self, id: u32) -> Option<&ComparisonOption> {
        let selected = self.options.iter().find(|option| option.id == id);
        if let Some(option) = selected {
            info!(session = %self.id, id, title = %option.title, "Comparison option selected");
        }
        selected
    }

    pub fn export(&self) -> ComparisonExport {
        ComparisonExport {
            session_id: self.id,
            compared: self.options.len(),
            options: self.options.clone(),
            timestamp: Utc::now(),
        }
    }

    pub fn clear(&mut self) {
        self.options.clear();
    }
}
