//! Budget and ROI estimation.
//!
//! Everything here is a pure function over its inputs and the static tables
//! in [`crate::domain`]. Costs are whole US dollars.

pub mod compare;
pub mod roi;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AnimationStyle, PackageTier, VideoType};

pub use compare::{compare_options, recommend_budget_options, score, ComparisonResult};
pub use roi::{
    break_even_months, compute_roi, industry_metrics, lead_value, monthly_traffic,
    EstimatedLeads, FinancialImpact, IndustryMetrics, RoiProjection,
};

/// Length of video the price table is quoted for.
pub const NOMINAL_DURATION_SECS: u32 = 60;
pub const EXPEDITED_SURCHARGE: u64 = 500;
/// Translation + native voiceover, per language, per 60 seconds.
pub const MULTILINGUAL_COST_PER_60S: u64 = 500;
pub const SOCIAL_CUTS_FRACTION: f64 = 0.15;

pub const SCRIPTWRITING_FRACTION: f64 = 0.10;
pub const STORYBOARD_FRACTION: f64 = 0.12;
pub const ILLUSTRATION_FRACTION: f64 = 0.25;
pub const ANIMATION_FRACTION: f64 = 0.35;
pub const VOICEOVER_FRACTION: f64 = 0.08;
pub const SOUND_DESIGN_FRACTION: f64 = 0.10;

fn default_duration() -> u32 {
    NOMINAL_DURATION_SECS
}

fn default_quantity() -> u32 {
    1
}

/// What the customer wants produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductionConfig {
    /// Display name used when comparing options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schema(value_type = String, example = "whiteboard")]
    pub style: AnimationStyle,
    #[serde(default)]
    pub video_type: VideoType,
    #[serde(default = "default_duration")]
    pub duration_seconds: u32,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub expedited: bool,
    /// Number of additional language versions.
    #[serde(default)]
    pub multilingual_count: u32,
    #[serde(default)]
    pub social_cuts_requested: bool,
}

impl ProductionConfig {
    pub fn new(style: AnimationStyle, duration_seconds: u32) -> Self {
        Self {
            name: None,
            style,
            video_type: VideoType::default(),
            duration_seconds,
            quantity: 1,
            expedited: false,
            multilingual_count: 0,
            social_cuts_requested: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_video_type(mut self, video_type: VideoType) -> Self {
        self.video_type = video_type;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_expedited(mut self, expedited: bool) -> Self {
        self.expedited = expedited;
        self
    }

    pub fn with_languages(mut self, count: u32) -> Self {
        self.multilingual_count = count;
        self
    }

    pub fn with_social_cuts(mut self, requested: bool) -> Self {
        self.social_cuts_requested = requested;
        self
    }

    /// Zero duration means "not specified".
    pub fn effective_duration(&self) -> u32 {
        if self.duration_seconds == 0 {
            NOMINAL_DURATION_SECS
        } else {
            self.duration_seconds
        }
    }

    pub fn effective_quantity(&self) -> u32 {
        self.quantity.max(1)
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} {}", self.style.as_str(), self.video_type.as_str()),
        }
    }
}

/// A surcharge on top of the production cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Extra {
    pub name: String,
    pub cost: u64,
}

/// Per-unit base cost split by production phase. Extras are not included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub scriptwriting: u64,
    pub storyboard: u64,
    pub illustration: u64,
    pub animation: u64,
    pub voiceover: u64,
    pub sound_design: u64,
}

impl CategoryBreakdown {
    /// Each phase is rounded on its own; the rounding residue is absorbed by
    /// animation, the largest phase, so the parts always add up to the base.
    pub fn from_base_cost(base_cost: u64) -> Self {
        let part = |fraction: f64| (base_cost as f64 * fraction).round() as u64;
        let scriptwriting = part(SCRIPTWRITING_FRACTION);
        let storyboard = part(STORYBOARD_FRACTION);
        let illustration = part(ILLUSTRATION_FRACTION);
        let voiceover = part(VOICEOVER_FRACTION);
        let sound_design = part(SOUND_DESIGN_FRACTION);
        let others = scriptwriting + storyboard + illustration + voiceover + sound_design;

        Self {
            scriptwriting,
            storyboard,
            illustration,
            animation: base_cost.saturating_sub(others),
            voiceover,
            sound_design,
        }
    }

    pub fn total(&self) -> u64 {
        self.scriptwriting
            + self.storyboard
            + self.illustration
            + self.animation
            + self.voiceover
            + self.sound_design
    }

    /// Phases in display order.
    pub fn entries(&self) -> [(&'static str, u64); 6] {
        [
            ("Scriptwriting", self.scriptwriting),
            ("Storyboard", self.storyboard),
            ("Illustration", self.illustration),
            ("Animation", self.animation),
            ("Voiceover", self.voiceover),
            ("Sound Design", self.sound_design),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Cost of a single video, pro-rated for its duration.
    pub base_cost: u64,
    pub total_cost: u64,
    pub extras: Vec<Extra>,
    pub per_video_cost: f64,
    pub category_breakdown: CategoryBreakdown,
    pub recommended_package: PackageTier,
}

/// Midpoint price of `style`, pro-rated linearly from the 60 second quote.
/// Amounts past `u64::MAX` saturate.
pub fn compute_base_cost(style: AnimationStyle, duration_seconds: u32) -> u64 {
    let per_60s = style.price_range().midpoint();
    (per_60s / NOMINAL_DURATION_SECS as f64 * duration_seconds as f64).round() as u64
}

pub fn multilingual_cost(duration_seconds: u32, language_count: u32) -> u64 {
    let per_language = (MULTILINGUAL_COST_PER_60S as f64 / NOMINAL_DURATION_SECS as f64
        * duration_seconds as f64)
        .round() as u64;
    per_language.saturating_mul(language_count as u64)
}

pub fn compute_cost(config: &ProductionConfig) -> CostBreakdown {
    let duration = config.effective_duration();
    let quantity = config.effective_quantity();

    let base_cost = compute_base_cost(config.style, duration);
    let mut total_cost = base_cost.saturating_mul(quantity as u64);
    let mut extras = Vec::new();

    if config.expedited {
        total_cost = total_cost.saturating_add(EXPEDITED_SURCHARGE);
        extras.push(Extra {
            name: "Expedited Delivery".to_string(),
            cost: EXPEDITED_SURCHARGE,
        });
    }

    if config.multilingual_count > 0 {
        let cost = multilingual_cost(duration, config.multilingual_count);
        total_cost = total_cost.saturating_add(cost);
        extras.push(Extra {
            name: format!("{} Additional Languages", config.multilingual_count),
            cost,
        });
    }

    if config.social_cuts_requested {
        let cost = (base_cost as f64 * SOCIAL_CUTS_FRACTION).round() as u64;
        total_cost = total_cost.saturating_add(cost);
        extras.push(Extra {
            name: "Social Media Cuts (30s, 15s, 6s)".to_string(),
            cost,
        });
    }

    CostBreakdown {
        base_cost,
        total_cost,
        extras,
        per_video_cost: total_cost as f64 / quantity as f64,
        category_breakdown: CategoryBreakdown::from_base_cost(base_cost),
        recommended_package: PackageTier::for_total_cost(total_cost),
    }
}

/// Formats whole dollars with thousands separators, e.g. `$12,500`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whiteboard_60s() -> ProductionConfig {
        ProductionConfig::new(AnimationStyle::Whiteboard, 60)
    }

    #[test]
    fn test_base_cost_at_nominal_duration_is_midpoint() {
        for style in AnimationStyle::ALL {
            let range = style.price_range();
            assert_eq!(
                compute_base_cost(style, 60) as f64,
                range.midpoint().round(),
                "{style}"
            );
        }
        assert_eq!(compute_base_cost(AnimationStyle::TwoDCharacter, 60), 2950);
    }

    #[test]
    fn test_base_cost_is_linear_in_duration() {
        for style in AnimationStyle::ALL {
            for duration in [1u32, 15, 30, 45, 60, 90, 120, 173] {
                let single = compute_base_cost(style, duration) as i64;
                let double = compute_base_cost(style, duration * 2) as i64;
                assert!(
                    (double - 2 * single).abs() <= 1,
                    "{style} at {duration}s: {double} vs 2 x {single}"
                );
            }
        }
    }

    #[test]
    fn test_whiteboard_scenario() {
        let cost = compute_cost(&whiteboard_60s());
        assert_eq!(cost.base_cost, 2150);
        assert_eq!(cost.total_cost, 2150);
        assert!(cost.extras.is_empty());
        assert_eq!(cost.recommended_package, PackageTier::Growth);
    }

    #[test]
    fn test_extreme_quantity_saturates() {
        let config = ProductionConfig::new(AnimationStyle::ThreeDAnimation, u32::MAX)
            .with_quantity(u32::MAX);
        let cost = compute_cost(&config);
        assert_eq!(cost.total_cost, u64::MAX);
        assert!(cost.total_cost >= cost.base_cost);
        assert_eq!(cost.recommended_package, PackageTier::Flick);
    }

    #[test]
    fn test_extreme_language_count_saturates() {
        let config = ProductionConfig::new(AnimationStyle::Whiteboard, u32::MAX)
            .with_expedited(true)
            .with_languages(u32::MAX)
            .with_social_cuts(true);
        let cost = compute_cost(&config);
        assert_eq!(cost.extras.len(), 3);
        assert_eq!(cost.extras[1].cost, u64::MAX);
        assert_eq!(cost.total_cost, u64::MAX);
    }

    #[test]
    fn test_expedited_whiteboard_scenario() {
        let cost = compute_cost(&whiteboard_60s().with_expedited(true));
        assert_eq!(cost.total_cost, 2650);
        assert_eq!(cost.extras[0].name, "Expedited Delivery");
        assert_eq!(cost.extras[0].cost, 500);
        assert_eq!(cost.recommended_package, PackageTier::Premium);
    }

    #[test]
    fn test_multilingual_3d_scenario() {
        let config = ProductionConfig::new(AnimationStyle::ThreeDAnimation, 60).with_languages(2);
        let cost = compute_cost(&config);
        assert_eq!(cost.base_cost, 6000);
        assert_eq!(cost.extras[0].name, "2 Additional Languages");
        assert_eq!(cost.extras[0].cost, 1000);
        assert_eq!(cost.total_cost, 7000);
        assert_eq!(cost.recommended_package, PackageTier::Flick);
    }

    #[test]
    fn test_extras_keep_evaluation_order() {
        let config = ProductionConfig::new(AnimationStyle::TwoDCharacter, 90)
            .with_social_cuts(true)
            .with_languages(1)
            .with_expedited(true);
        let cost = compute_cost(&config);
        let names: Vec<&str> = cost.extras.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Expedited Delivery",
                "1 Additional Languages",
                "Social Media Cuts (30s, 15s, 6s)"
            ]
        );
        // 2950 / 60 * 90 = 4425; social cuts 15% of base
        assert_eq!(cost.base_cost, 4425);
        assert_eq!(cost.extras[2].cost, 664);
        assert_eq!(cost.extras[1].cost, 750);
    }

    #[test]
    fn test_total_never_below_base_times_quantity() {
        for style in AnimationStyle::ALL {
            for quantity in 1..=4 {
                let config = ProductionConfig::new(style, 75)
                    .with_quantity(quantity)
                    .with_social_cuts(quantity % 2 == 0)
                    .with_languages(quantity - 1);
                let cost = compute_cost(&config);
                assert!(cost.total_cost >= cost.base_cost * quantity as u64);
                assert!(
                    (cost.per_video_cost * quantity as f64 - cost.total_cost as f64).abs() < 1e-6
                );
            }
        }
    }

    #[test]
    fn test_category_breakdown_sums_to_base_cost() {
        for style in AnimationStyle::ALL {
            for duration in (5..=300).step_by(5) {
                let config = ProductionConfig::new(style, duration).with_expedited(true);
                let cost = compute_cost(&config);
                assert_eq!(
                    cost.category_breakdown.total(),
                    cost.base_cost,
                    "{style} {duration}s"
                );
            }
        }
    }

    #[test]
    fn test_category_breakdown_phases_track_their_fractions() {
        let breakdown = CategoryBreakdown::from_base_cost(2704);
        assert_eq!(breakdown.scriptwriting, 270);
        assert_eq!(breakdown.storyboard, 324);
        assert_eq!(breakdown.illustration, 676);
        assert_eq!(breakdown.voiceover, 216);
        assert_eq!(breakdown.sound_design, 270);
        // round(2704 * 0.35) = 946; the two dollar residue lands here
        assert_eq!(breakdown.animation, 948);
    }

    #[test]
    fn test_degenerate_quantity_and_duration_fall_back() {
        let config = whiteboard_60s().with_quantity(0);
        let cost = compute_cost(&config);
        assert_eq!(cost.total_cost, 2150);
        assert_eq!(cost.per_video_cost, 2150.0);

        let config = ProductionConfig::new(AnimationStyle::Whiteboard, 0);
        assert_eq!(compute_cost(&config).base_cost, 2150);
    }

    #[test]
    fn test_config_deserialization_defaults() {
        let config: ProductionConfig = serde_json::from_str(r#"{"style":"isometric"}"#).unwrap();
        assert_eq!(config.style, AnimationStyle::Isometric);
        assert_eq!(config.duration_seconds, 60);
        assert_eq!(config.quantity, 1);
        assert_eq!(config.video_type, VideoType::ExplainerVideos);

        let err = serde_json::from_str::<ProductionConfig>(r#"{"style":"anime"}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown animation style"));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(950), "$950");
        assert_eq!(format_usd(2500), "$2,500");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }
}
