use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use utoipa::ToSchema;

use super::{compute_cost, compute_roi, ProductionConfig};
use crate::domain::{AnimationStyle, UserContext, VideoType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub name: String,
    pub cost: u64,
    pub roi_pct: i64,
    pub roi_multiple: f64,
    pub timeline: String,
    pub monthly_leads: u64,
    pub score: f64,
}

/// Blended ranking: cheaper and higher-ROI options both score higher.
pub fn score(total_cost: u64, roi_pct: i64) -> f64 {
    let cost_score = 10_000.0 / total_cost.max(1) as f64;
    let roi_score = roi_pct as f64 / 10.0;
    (cost_score + roi_score) / 2.0
}

/// Scores each option and returns them best first. Ties keep input order.
pub fn compare_options(
    options: &[ProductionConfig],
    context: &UserContext,
) -> Vec<ComparisonResult> {
    let mut results: Vec<ComparisonResult> = options
        .iter()
        .map(|option| {
            let cost = compute_cost(option);
            let roi = compute_roi(option, context);

            ComparisonResult {
                name: option.display_name(),
                cost: cost.total_cost,
                roi_pct: roi.financial_impact.roi_pct,
                roi_multiple: roi.financial_impact.roi_multiple,
                timeline: roi.production_timeline,
                monthly_leads: roi.estimated_leads.monthly,
                score: score(cost.total_cost, roi.financial_impact.roi_pct),
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results
}

/// Three ready-made budget options, compared for `context`.
pub fn recommend_budget_options(context: &UserContext) -> Vec<ComparisonResult> {
    let presets = [
        ProductionConfig::new(AnimationStyle::MotionGraphics, 60)
            .with_name("Budget-Friendly Starter"),
        ProductionConfig::new(AnimationStyle::TwoDCharacter, 90)
            .with_name("Growth Package (Most Popular)")
            .with_social_cuts(true),
        ProductionConfig::new(AnimationStyle::MixedMedia, 120)
            .with_name("Premium Full Funnel")
            .with_video_type(VideoType::BrandAnthems)
            .with_languages(1)
            .with_social_cuts(true),
    ];

    compare_options(&presets, context)
}
