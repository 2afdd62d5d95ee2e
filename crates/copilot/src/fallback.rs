//! Deterministic strategy built from the knowledge base alone. Used whenever
//! the model is unavailable or answers with something unusable.

use copilot_core::domain::{
    AnimationStyle, CreativeBrief, FunnelStep, PackageTier, PortfolioMatch, Recommendation,
    StrategyResult, UserInput,
};
use copilot_core::knowledge::{find_client, industry_profile_or_default, AVERAGE_RESULTS};

pub const FALLBACK_SCORE: f64 = 92.0;
pub const STORYLINE: &str = "Problem → Your Solution → How It Works → Proof → Strong CTA";
const DEFAULT_AUDIENCE: &str = "Decision-makers and influencers in your target market";

/// Preference labels in priority order. Styles outside this list are never
/// picked from preferences.
const PREFERRED_ORDER: [AnimationStyle; 4] = [
    AnimationStyle::TwoDCharacter,
    AnimationStyle::MotionGraphics,
    AnimationStyle::ThreeDAnimation,
    AnimationStyle::MixedMedia,
];

pub fn choose_style(preferences: &[String]) -> AnimationStyle {
    PREFERRED_ORDER
        .into_iter()
        .find(|style| preferences.iter().any(|p| p == style.short_label()))
        .unwrap_or(AnimationStyle::TwoDCharacter)
}

pub fn target_audience(industry: &str) -> &'static str {
    match industry {
        "SaaS" => "Decision-makers, CTOs, and product managers in mid-market B2B companies",
        "Fintech" => "Financial professionals and tech-savvy consumers seeking secure solutions",
        "Healthcare" => "Healthcare administrators, clinicians, and patients seeking better outcomes",
        "Cybersecurity" => "CISOs, IT directors, and security-conscious enterprise buyers",
        "Education" => "Educators, administrators, and students looking for innovative learning tools",
        _ => DEFAULT_AUDIENCE,
    }
}

pub fn core_message(industry: &str) -> String {
    format!(
        "Transform your {} operations with a solution that delivers measurable results faster than alternatives.",
        industry.to_lowercase()
    )
}

/// Package for a style, judged by its entry price.
pub fn pricing_tier(style: AnimationStyle) -> PackageTier {
    PackageTier::for_total_cost(style.price_range().min)
}

pub fn funnel_plan() -> Vec<FunnelStep> {
    [
        ("Awareness", "Brand Anthem / Explainer", "60s", "Video completion rate & brand recall"),
        ("Consideration", "Product Demo", "90s", "Demo requests & trial signups"),
        ("Decision", "Customer Testimonial", "120s", "Conversion rate & deal velocity"),
    ]
    .into_iter()
    .map(|(stage, video_type, duration, metric)| FunnelStep {
        stage: stage.to_string(),
        video_type: video_type.to_string(),
        duration: duration.to_string(),
        metric: metric.to_string(),
    })
    .collect()
}

pub fn generate(input: &UserInput, funnel_mode: bool) -> StrategyResult {
    let style = choose_style(&input.styles);
    let industry = industry_profile_or_default(&input.industry);
    let style_name = style.display_name();

    let recommendation = Recommendation {
        title: format!("{style_name} {}", input.goal),
        score: FALLBACK_SCORE,
        funnel_fit: input.funnel.to_string(),
        description: format!(
            "A {}-second {} designed specifically for {} companies at {} stage. {}",
            input.duration,
            style_name.to_lowercase(),
            input.industry,
            input.stage,
            style.description()
        ),
        style: style_name.to_string(),
        why_perfect: format!(
            "Based on {} with clients like {}, this style consistently delivers high engagement for {}.",
            industry.experience,
            industry
                .notable_clients
                .iter()
                .take(2)
                .copied()
                .collect::<Vec<_>>()
                .join(" and "),
            input.goal.to_lowercase()
        ),
        metrics: vec![format!(
            "{} conversion increase",
            AVERAGE_RESULTS.conversion_lift
        )],
        channels: vec![
            "Website Homepage".to_string(),
            "LinkedIn".to_string(),
            "Sales Presentations".to_string(),
        ],
        estimated_cost: format!("{} per 60s", style.price_range().label()),
        duration: Some(format!("{}s", input.duration)),
    };

    let portfolio_matches = industry
        .notable_clients
        .iter()
        .take(3)
        .map(|name| match find_client(name) {
            Some(client) => PortfolioMatch {
                title: client.name.to_string(),
                industry: client.industry.to_string(),
                outcome: client.outcome.to_string(),
                style: client.video_type.to_string(),
            },
            None => PortfolioMatch {
                title: name.to_string(),
                industry: industry.name.to_string(),
                outcome: "Increased engagement".to_string(),
                style: style_name.to_string(),
            },
        })
        .collect();

    StrategyResult {
        recommendations: vec![recommendation],
        portfolio_matches,
        creative_brief: Some(CreativeBrief {
            target_audience: target_audience(&input.industry).to_string(),
            core_message: core_message(&input.industry),
            storyline: STORYLINE.to_string(),
            ctas: vec![input.goal.clone()],
        }),
        pricing_tier: pricing_tier(style).package_label(),
        full_funnel: funnel_mode.then(funnel_plan),
        reasoning: None,
    }
}
