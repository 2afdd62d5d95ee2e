//! Terminal output for the estimator and strategy commands.

use colored::Colorize;
use copilot::comparison::ComparisonOption;
use copilot::{FallbackReason, StrategyOutcome, TranslationCache};
use copilot_core::budget::format_usd;
use copilot_core::{ComparisonResult, CostBreakdown, RoiProjection};

fn heading(text: &str) {
    println!();
    println!("{}", text.bold());
    println!("{}", "─".repeat(text.chars().count().max(24)).dimmed());
}

pub fn cost(name: &str, breakdown: &CostBreakdown) {
    heading(&format!("Cost estimate: {name}"));
    println!("  Base cost (per video): {}", format_usd(breakdown.base_cost));
    for extra in &breakdown.extras {
        println!("  + {:<36} {}", extra.name, format_usd(extra.cost));
    }
    println!("  {} {}", "Total:".bold(), format_usd(breakdown.total_cost).green().bold());
    println!("  Per video:             ${:.2}", breakdown.per_video_cost);
    println!(
        "  Recommended package:   {}",
        breakdown.recommended_package.package_label()
    );

    println!();
    println!("  {}", "Where the base cost goes".dimmed());
    for (label, amount) in breakdown.category_breakdown.entries() {
        println!("    {:<14} {}", label, format_usd(amount));
    }
}

pub fn roi(projection: &RoiProjection) {
    heading("ROI projection");
    println!("  Investment:        {}", format_usd(projection.cost));
    println!("  Production time:   {}", projection.production_timeline);
    println!(
        "  Lift:              +{}% conversion, +{}% engagement, -{}% sales cycle",
        projection.conversion_lift_pct,
        projection.engagement_increase_pct,
        projection.sales_cycle_reduction_pct
    );
    println!(
        "  Estimated leads:   {}/month, {}/quarter, {}/year",
        projection.estimated_leads.monthly,
        projection.estimated_leads.quarterly,
        projection.estimated_leads.annual
    );

    let impact = &projection.financial_impact;
    println!("  Lead value:        {}", format_usd(impact.lead_value));
    println!("  Annual value:      ${:.0}", impact.annual_value);
    println!(
        "  ROI:               {} ({}x)",
        format!("{}%", impact.roi_pct).green().bold(),
        impact.roi_multiple
    );
    match projection.break_even_months {
        Some(months) => println!("  Break-even:        {months} month(s)"),
        None => println!("  Break-even:        {}", "never".yellow()),
    }
}

pub fn comparison_results(title: &str, results: &[ComparisonResult]) {
    heading(title);
    println!(
        "  {:<3} {:<34} {:>10} {:>9} {:>8} {:>12}  {}",
        "#", "Option", "Cost", "ROI", "Score", "Leads/month", "Timeline"
    );
    for (idx, result) in results.iter().enumerate() {
        let rank = format!("{:<3}", idx + 1);
        let rank = if idx == 0 { rank.green().bold() } else { rank.normal() };
        println!(
            "  {} {:<34} {:>10} {:>8}% {:>8.1} {:>12}  {}",
            rank,
            result.name,
            format_usd(result.cost),
            result.roi_pct,
            result.score,
            result.monthly_leads,
            result.timeline
        );
    }
}

pub fn fallback_notice(reason: &FallbackReason) {
    match reason {
        FallbackReason::NotConfigured => {
            println!("{}", "Using the built-in strategy (no generation proxy configured).".dimmed())
        }
        other => println!("{} {}", "warning:".yellow().bold(), other),
    }
}

pub fn strategy(outcome: &StrategyOutcome, t: &TranslationCache) {
    if let Some(reason) = outcome.fallback_reason() {
        fallback_notice(reason);
    }
    let result = outcome.result();

    for (idx, rec) in result.recommendations.iter().enumerate() {
        heading(&format!("{}. {}", idx + 1, rec.title));
        println!(
            "  {} {}%   {} {}   {}",
            t.t("results.matchLabel").dimmed(),
            rec.score.to_string().green().bold(),
            t.t("comparison.style").dimmed(),
            rec.style,
            rec.funnel_fit.dimmed()
        );
        if !rec.description.is_empty() {
            println!("  {}", rec.description);
        }
        if !rec.why_perfect.is_empty() {
            println!("  {}: {}", t.t("results.whyWorks").bold(), rec.why_perfect);
        }
        for metric in &rec.metrics {
            println!("  • {metric}");
        }
        if !rec.channels.is_empty() {
            println!("  Channels: {}", rec.channels.join(", "));
        }
        if !rec.estimated_cost.is_empty() {
            println!("  Estimated cost: {}", rec.estimated_cost);
        }
    }

    if let Some(brief) = &result.creative_brief {
        heading(&t.t("results.creativeBrief"));
        println!("  {}: {}", t.t("results.briefAudience").bold(), brief.target_audience);
        println!("  {}: {}", t.t("results.briefMessage").bold(), brief.core_message);
        println!("  {}: {}", t.t("results.briefStoryArc").bold(), brief.storyline);
        if !brief.ctas.is_empty() {
            println!("  {}: {}", t.t("results.briefCta").bold(), brief.ctas.join(", "));
        }
    }

    if !result.portfolio_matches.is_empty() {
        heading(&t.t("results.provenSuccess"));
        for m in &result.portfolio_matches {
            println!("  {} ({}, {})", m.title.bold(), m.industry, m.style);
            if !m.outcome.is_empty() {
                println!("    {}", m.outcome.dimmed());
            }
        }
    }

    if let Some(steps) = &result.full_funnel {
        heading("Full funnel plan");
        for step in steps {
            println!(
                "  {:<14} {:<28} {:>5}  {}",
                step.stage, step.video_type, step.duration, step.metric
            );
        }
    }

    if !result.pricing_tier.is_empty() {
        println!();
        println!("{} {}", t.t("results.ctaPricing").bold(), result.pricing_tier);
    }
}

pub fn comparison_options(options: &[ComparisonOption], t: &TranslationCache) {
    heading(&t.t("comparison.title"));
    for option in options {
        println!(
            "  [{}] {} ({}%)",
            option.id,
            option.title.bold(),
            option.score
        );
        println!("      {}: {}", t.t("comparison.style"), option.style);
        println!("      {}: {}s", t.t("comparison.duration"), option.duration_seconds);
        println!("      {}: {}", t.t("comparison.investment"), option.estimated_cost);
        println!("      {}: {}", t.t("comparison.timeToMarket"), option.timeline);
        println!("      {}: {}", t.t("comparison.bestFor"), option.best_for);
    }
}
