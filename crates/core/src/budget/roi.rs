use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{compute_cost, ProductionConfig};
use crate::domain::UserContext;

/// Share of site visitors who watch the video.
pub const VIDEO_VIEW_RATE: f64 = 0.15;
/// Share of leads assumed to become paying customers.
pub const CLOSE_RATE: f64 = 0.20;
/// Lead value when the stage is missing from the industry's table.
pub const FALLBACK_LEAD_VALUE: u64 = 1500;

/// Performance uplift attributed to video, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndustryMetrics {
    pub conversion_lift_pct: f64,
    pub engagement_increase_pct: f64,
    pub sales_cycle_reduction_pct: f64,
}

impl IndustryMetrics {
    const fn new(conversion: f64, engagement: f64, sales_cycle: f64) -> Self {
        Self {
            conversion_lift_pct: conversion,
            engagement_increase_pct: engagement,
            sales_cycle_reduction_pct: sales_cycle,
        }
    }

    /// Midpoints of the published ranges: 25-35% conversion, 30-40%
    /// engagement, 20-30% sales-cycle reduction.
    pub const DEFAULT: IndustryMetrics = IndustryMetrics::new(30.0, 35.0, 25.0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EstimatedLeads {
    pub monthly: u64,
    pub quarterly: u64,
    pub annual: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialImpact {
    pub lead_value: u64,
    pub monthly_value: f64,
    pub annual_value: f64,
    /// Rounded to a whole percent.
    pub roi_pct: i64,
    /// Rounded to one decimal place.
    pub roi_multiple: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub cost: u64,
    pub production_timeline: String,
    pub conversion_lift_pct: f64,
    pub engagement_increase_pct: f64,
    pub sales_cycle_reduction_pct: f64,
    pub estimated_leads: EstimatedLeads,
    pub financial_impact: FinancialImpact,
    pub break_even_months: Option<u32>,
}

pub fn industry_metrics(industry: &str) -> IndustryMetrics {
    match industry {
        "SaaS" => IndustryMetrics::new(30.0, 85.0, 25.0),
        "Fintech" => IndustryMetrics::new(28.0, 75.0, 22.0),
        "Healthcare" => IndustryMetrics::new(35.0, 90.0, 30.0),
        "Cybersecurity" => IndustryMetrics::new(35.0, 78.0, 28.0),
        "Education" => IndustryMetrics::new(32.0, 88.0, 20.0),
        "Manufacturing" => IndustryMetrics::new(25.0, 70.0, 18.0),
        _ => IndustryMetrics::DEFAULT,
    }
}

/// Baseline monthly website visitors by funding stage. Unknown stages are
/// treated as Series A.
pub fn monthly_traffic(funding_stage: &str) -> u64 {
    match funding_stage {
        "Seed Stage" => 1_000,
        "Series A" => 5_000,
        "Series B+" => 15_000,
        "Enterprise" => 50_000,
        "Public/IPO" | "Public / IPO" => 100_000,
        _ => 5_000,
    }
}

/// Average value of one lead for an industry at a funding stage.
pub fn lead_value(industry: &str, funding_stage: &str) -> u64 {
    // Seed, Series A, Series B+, Enterprise
    let table: [u64; 4] = match industry {
        "SaaS" => [500, 1_500, 3_000, 8_000],
        "Fintech" => [800, 2_000, 4_000, 10_000],
        "Healthcare" => [1_000, 2_500, 5_000, 15_000],
        "Cybersecurity" => [1_200, 3_000, 6_000, 20_000],
        _ => [600, 1_800, 3_500, 9_000],
    };

    match funding_stage {
        "Seed Stage" => table[0],
        "Series A" => table[1],
        "Series B+" => table[2],
        "Enterprise" => table[3],
        _ => FALLBACK_LEAD_VALUE,
    }
}

pub fn estimate_leads(funding_stage: &str, metrics: &IndustryMetrics) -> EstimatedLeads {
    let traffic = monthly_traffic(funding_stage) as f64;
    let conversion = metrics.conversion_lift_pct / 100.0;
    let monthly = (traffic * VIDEO_VIEW_RATE * conversion).round() as u64;

    EstimatedLeads {
        monthly,
        quarterly: monthly * 3,
        annual: monthly * 12,
    }
}

pub fn financial_impact(cost: u64, leads: &EstimatedLeads, lead_value: u64) -> FinancialImpact {
    let monthly_value = leads.monthly as f64 * lead_value as f64 * CLOSE_RATE;
    let annual_value = monthly_value * 12.0;
    let cost = cost as f64;

    FinancialImpact {
        lead_value,
        monthly_value,
        annual_value,
        roi_pct: ((annual_value - cost) / cost * 100.0).round() as i64,
        roi_multiple: (annual_value / cost * 10.0).round() / 10.0,
    }
}

/// Months of projected value needed to recoup `cost`; `None` when the
/// projection yields nothing.
pub fn break_even_months(cost: u64, annual_value: f64) -> Option<u32> {
    if annual_value <= 0.0 {
        return None;
    }
    Some((cost as f64 / annual_value * 12.0).ceil() as u32)
}

pub fn compute_roi(config: &ProductionConfig, context: &UserContext) -> RoiProjection {
    let cost = compute_cost(config).total_cost;
    let metrics = industry_metrics(&context.industry);
    let estimated_leads = estimate_leads(&context.funding_stage, &metrics);
    let financial_impact = financial_impact(
        cost,
        &estimated_leads,
        lead_value(&context.industry, &context.funding_stage),
    );

    RoiProjection {
        cost,
        production_timeline: config.style.production_timeline().to_string(),
        conversion_lift_pct: metrics.conversion_lift_pct,
        engagement_increase_pct: metrics.engagement_increase_pct,
        sales_cycle_reduction_pct: metrics.sales_cycle_reduction_pct,
        estimated_leads,
        break_even_months: break_even_months(cost, financial_impact.annual_value),
        financial_impact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnimationStyle;

    fn whiteboard() -> ProductionConfig {
        ProductionConfig::new(AnimationStyle::Whiteboard, 60)
    }

    #[test]
    fn test_saas_series_a_projection() {
        let roi = compute_roi(&whiteboard(), &UserContext::new("SaaS", "Series A"));

        assert_eq!(roi.cost, 2150);
        assert_eq!(roi.production_timeline, "3-4 weeks");
        assert_eq!(roi.conversion_lift_pct, 30.0);
        assert_eq!(roi.engagement_increase_pct, 85.0);
        assert_eq!(roi.estimated_leads.monthly, 225);
        assert_eq!(roi.estimated_leads.quarterly, 675);
        assert_eq!(roi.estimated_leads.annual, 2700);

        let impact = roi.financial_impact;
        assert_eq!(impact.lead_value, 1500);
        assert!((impact.monthly_value - 67_500.0).abs() < 1e-6);
        assert!((impact.annual_value - 810_000.0).abs() < 1e-6);
        assert_eq!(impact.roi_pct, 37_574);
        assert_eq!(impact.roi_multiple, 376.7);
        assert_eq!(roi.break_even_months, Some(1));
    }

    #[test]
    fn test_unmatched_industry_uses_defaults() {
        let roi = compute_roi(&whiteboard(), &UserContext::new("Aerospace", "Series B+"));
        assert_eq!(roi.conversion_lift_pct, 30.0);
        assert_eq!(roi.engagement_increase_pct, 35.0);
        assert_eq!(roi.sales_cycle_reduction_pct, 25.0);
        assert_eq!(roi.estimated_leads.monthly, 675);
        assert_eq!(roi.financial_impact.lead_value, 3500);
    }

    #[test]
    fn test_industry_lookup_is_case_sensitive() {
        assert_eq!(industry_metrics("saas"), IndustryMetrics::DEFAULT);
        assert_eq!(industry_metrics("SaaS").engagement_increase_pct, 85.0);
    }

    #[test]
    fn test_unmatched_stage_fallbacks() {
        assert_eq!(monthly_traffic("Pre-seed"), 5_000);
        assert_eq!(monthly_traffic("Public / IPO"), 100_000);
        assert_eq!(lead_value("SaaS", "Pre-seed"), FALLBACK_LEAD_VALUE);
        // No public-company column in any table.
        assert_eq!(lead_value("Fintech", "Public/IPO"), FALLBACK_LEAD_VALUE);
        assert_eq!(lead_value("Retail", "Enterprise"), 9_000);
    }

    #[test]
    fn test_break_even() {
        assert_eq!(break_even_months(1_000, 0.0), None);
        assert_eq!(break_even_months(3_000, 12_000.0), Some(3));
        assert_eq!(break_even_months(3_001, 12_000.0), Some(4));
        assert_eq!(break_even_months(12_000, 12_000.0), Some(12));
    }

    #[test]
    fn test_roi_consistency_with_annual_value() {
        let config = ProductionConfig::new(AnimationStyle::MixedMedia, 120).with_languages(1);
        let roi = compute_roi(&config, &UserContext::new("Healthcare", "Enterprise"));
        let impact = roi.financial_impact;
        let cost = roi.cost as f64;

        assert_eq!(impact.roi_pct, ((impact.annual_value - cost) / cost * 100.0).round() as i64);
        assert!((impact.roi_multiple - impact.annual_value / cost).abs() <= 0.05);
        let months = roi.break_even_months.unwrap();
        assert_eq!(months, (cost / impact.annual_value * 12.0).ceil() as u32);
        assert!(months >= 1);
    }
}
