//! Prompts for strategy generation, rendered from the knowledge base

use copilot_core::domain::{AnimationStyle, PackageTier, UserInput, VideoType};
use copilot_core::knowledge::{
    AVERAGE_COST_PER_60S, AVERAGE_RESULTS, COMPANY, INDUSTRIES, PHILOSOPHY,
    PROMPT_CLIENT_LIMIT, STORYTELLING_STRUCTURE, STYLE_GUIDANCE, TOP_CLIENTS,
};

fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn package_section(index: usize, tier: PackageTier, use_case_count: usize) -> String {
    let popular = if tier.most_popular() {
        " (MOST POPULAR)"
    } else {
        ""
    };
    let use_cases = tier.use_cases();
    format!(
        "{index}. {} ({}){popular}: {}\n   - Art Styles: {}\n   - Best for: {}",
        tier.name().to_uppercase(),
        tier.price_label(),
        tier.description(),
        tier.art_styles().join(", "),
        use_cases[..use_case_count.min(use_cases.len())].join(", "),
    )
}

/// Storytelling beats quoted to the model: problem, solution, proof, CTA.
fn storytelling_arc() -> String {
    ["Problem", "Solution", "Social Proof", "CTA"]
        .iter()
        .filter_map(|beat| {
            STORYTELLING_STRUCTURE
                .iter()
                .find(|(name, _)| name == beat)
                .map(|(_, text)| *text)
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// System instruction describing the studio, its offer and the output rules.
pub fn system_instruction() -> String {
    let stats = COMPANY.stats;

    let packages = PackageTier::ALL
        .iter()
        .enumerate()
        .map(|(i, tier)| {
            let count = if *tier == PackageTier::Growth { 4 } else { 6 };
            package_section(i + 1, *tier, count)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let styles = bullet_list(AnimationStyle::ALL.iter().map(|style| {
        format!(
            "{}: {} | Best for: {} | Price: {} per 60s",
            style.display_name(),
            style.description(),
            style.best_for(),
            style.price_range().label()
        )
    }));

    let services = bullet_list(VideoType::ALL.iter().map(|service| {
        format!(
            "{} ({}): {} | Funnel: {}",
            service.name(),
            service.duration(),
            service.description(),
            service.funnel_stage()
        )
    }));

    let industries = bullet_list(INDUSTRIES.iter().map(|industry| {
        let clients: Vec<&str> = industry.notable_clients.iter().take(3).copied().collect();
        format!(
            "{}: {} | Clients: {}",
            industry.name,
            industry.experience,
            clients.join(", ")
        )
    }));

    let clients = bullet_list(TOP_CLIENTS.iter().take(PROMPT_CLIENT_LIMIT).map(|c| {
        format!("{} ({}): {} → {}", c.name, c.industry, c.video_type, c.outcome)
    }));

    let guidance = STYLE_GUIDANCE
        .iter()
        .map(|g| format!("When to recommend {}: {}", g.heading, g.signals.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"ROLE: You are the Senior Video Strategist for {name} (b2w.tv), one of the world's leading animated explainer video companies.

COMPANY OVERVIEW:
- {tagline}
- Founded: {founded} | Experience: {experience}
- {videos} videos produced | {happy} happy clients
- Serving {countries} countries with a {team} team
- Mission: "{mission}"

CORE PHILOSOPHY:
{philosophy}

PRICING STRUCTURE (3 TIERS):
Average Cost: {average_cost} per 60-second video

{short_name} offers exactly 3 packages:
{packages}

IMPORTANT: Only recommend "Growth", "Premium", or "Flick" packages - these are the ONLY 3 packages {short_name} offers!

ANIMATION STYLES EXPERTISE:
{styles}

VIDEO SERVICES:
{services}

INDUSTRY EXPERTISE:
{industries}

TOP CLIENT PORTFOLIO (for recommendation matching - choose clients with similar products/services to what user describes):
{clients}

PROVEN METRICS:
- Average Engagement Increase: {engagement}
- Average Conversion Lift: {conversion}
- Demo Booking Increase: {demos}
- Sales Cycle Reduction: {sales_cycle}

RECOMMENDATION GUIDANCE:
{guidance}

STRATEGIC FRAMEWORKS:
Storytelling Structure: {storytelling}

INSTRUCTIONS:
1. Analyze the user's input deeply considering their industry, stage, funnel position, and goals
2. Match their needs against {short_name}'s {experience} of proven portfolio data
3. Recommend the MOST APPROPRIATE video strategy from {short_name}'s services
4. Provide portfolio matches from actual {short_name} clients in similar industries
5. Generate a comprehensive creative brief with target audience, message, and storyline
6. Recommend the appropriate pricing package
7. If Full Funnel mode is requested, provide a complete funnel strategy with video types for each stage
8. Be confident, data-driven, and specific
9. Always output valid JSON matching the exact schema requested

TONE: Professional, insightful, confident, results-oriented. Speak as a trusted advisor with deep industry expertise."#,
        name = COMPANY.name,
        short_name = COMPANY.short_name,
        tagline = COMPANY.tagline,
        founded = COMPANY.founded,
        experience = COMPANY.experience,
        videos = stats.videos_produced,
        happy = stats.happy_clients,
        countries = stats.countries_served,
        team = stats.team_size,
        mission = COMPANY.mission,
        philosophy = bullet_list(PHILOSOPHY),
        average_cost = AVERAGE_COST_PER_60S,
        packages = packages,
        styles = styles,
        services = services,
        industries = industries,
        clients = clients,
        engagement = AVERAGE_RESULTS.engagement_increase,
        conversion = AVERAGE_RESULTS.conversion_lift,
        demos = AVERAGE_RESULTS.demo_bookings,
        sales_cycle = AVERAGE_RESULTS.sales_cycle_reduction,
        guidance = guidance,
        storytelling = storytelling_arc(),
    )
}

const FULL_FUNNEL_SCHEMA: &str = r#"  "fullFunnel": [
    {
      "stage": "string (funnel stage name)",
      "videoType": "string (recommended video type)",
      "duration": "string (recommended length)",
      "metric": "string (KPI to track)"
    }
  ],
"#;

/// User prompt carrying the form values, the output schema and the rules the
/// answer must follow.
pub fn strategy_prompt(input: &UserInput, funnel_mode: bool) -> String {
    let styles = input.styles.join(", ");
    let allowed_styles = if styles.is_empty() {
        format!("any {} style", COMPANY.short_name)
    } else {
        styles.clone()
    };
    let mode = if funnel_mode {
        "FULL FUNNEL STRATEGY"
    } else {
        "SINGLE VIDEO RECOMMENDATION"
    };
    let funnel_schema = if funnel_mode { FULL_FUNNEL_SCHEMA } else { "" };
    let growth = PackageTier::Growth.price_band();
    let premium = PackageTier::Premium.price_band();
    let flick = PackageTier::Flick.price_band();
    let short_name = COMPANY.short_name;

    format!(
        r#"ANALYZE THIS VIDEO PROJECT REQUEST:

Project Description: "{description}"

Context Parameters:
- Industry: {industry}
- Company Stage: {stage}
- Funnel Stage: {funnel}
- Primary Goal: {goal}
- Target Duration: {duration} seconds
- Preferred Styles: {styles}
- Mode: {mode}

REQUIRED JSON OUTPUT SCHEMA:
{{
  "recommendations": [
    {{
      "title": "string (compelling video name)",
      "score": number (70-98 realistic match confidence based on how well requirements align with {short_name} capabilities. 98=perfect match, 85-90=good match, 70-80=acceptable match),
      "funnelFit": "string (which funnel stage)",
      "description": "string (2-3 sentences explaining the recommendation)",
      "style": "string (exact animation style from {short_name}'s offerings)",
      "whyPerfect": "string (data-driven reasoning based on {short_name}'s portfolio)",
      "metrics": ["string (specific projected outcomes)"],
      "channels": ["string (recommended distribution channels)"],
      "estimatedCost": "string (pricing range from {short_name} packages)"
    }}
  ],
  "portfolioMatches": [
    {{
      "title": "string (actual {short_name} client name from knowledge base that matches user's industry or has similar business model)",
      "industry": "string (MUST be same or closely related to user's selected industry)",
      "outcome": "string (proven result)",
      "style": "string (animation style used)"
    }}
  ],
  "creativeBrief": {{
    "targetAudience": "string (specific persona description)",
    "coreMessage": "string (one sentence value proposition)",
    "storyline": "string (narrative arc: problem → solution → proof → CTA)",
    "ctas": ["string (recommended calls to action)"]
  }},
  "pricingTier": "string (MUST BE EXACTLY: 'Growth Package' OR 'Premium Package' OR 'Flick Package')",
{funnel_schema}  "reasoning": "string (internal explanation of recommendation logic)"
}}

CRITICAL REQUIREMENTS:
1. ONLY recommend animation styles from the user's Preferred Styles list: {allowed_styles}
2. Match score MUST be realistic (70-98%): Base it on how well user requirements align with {short_name} capabilities
3. ONLY recommend "Growth Package" (Budget-Friendly {growth}), "Premium Package" (Cost-Savvy {premium}), or "Flick Package" (Best-In-Class {flick})
4. PORTFOLIO MATCHING - CRITICAL: Read the project description carefully. Match portfolio clients based on:
   - The ACTUAL product/service type described (not just the selected industry dropdown)
   - If description says "pen" or "physical product" → show Consumer Products/Manufacturing clients
   - If description says "software" or "app" or "platform" → show SaaS/Tech clients
   - Always prefer clients with similar business models to what's described
5. Use REAL metrics from {short_name}'s proven track record from the knowledge base
6. Be specific and actionable - this will go directly to a real client
7. BUDGET CALCULATION BASIS: For each video, multiply duration (in 60s units) by package price range
8. MATCH PERCENTAGE BASIS: Score 70-98% based on alignment between (a) user's actual product/service type from description, (b) {short_name}'s proven results with similar products, (c) requested styles available in package, (d) budget fit

Generate the most accurate, data-driven recommendation possible based on {short_name}'s proven results."#,
        description = input.description,
        industry = input.industry,
        stage = input.stage,
        funnel = input.funnel,
        goal = input.goal,
        duration = input.duration,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_core::domain::FunnelStage;

    #[test]
    fn test_system_instruction_covers_knowledge_base() {
        let prompt = system_instruction();

        assert!(prompt.starts_with("ROLE: You are the Senior Video Strategist"));
        assert!(prompt.contains(COMPANY.mission));
        assert!(prompt.contains("2. PREMIUM (Cost-Savvy) (MOST POPULAR)"));
        assert!(prompt.contains("Whiteboard Animation: Hand-drawn style"));
        assert!(prompt.contains("$1,800 - $2,500 per 60s"));
        assert!(prompt.contains("- SaaS & Tech: 15+ years, 1000+ videos | Clients: Zoom, PandaDoc, Aiven"));
        assert!(prompt.contains("Storytelling Structure: Establish the pain point"));

        // Only the first 25 portfolio clients are quoted.
        assert!(prompt.contains(&format!("- {} (", TOP_CLIENTS[PROMPT_CLIENT_LIMIT - 1].name)));
        assert!(!prompt.contains(TOP_CLIENTS[PROMPT_CLIENT_LIMIT].outcome));
    }

    #[test]
    fn test_strategy_prompt_includes_form_values() {
        let input = UserInput {
            description: "A budgeting app for freelancers".to_string(),
            industry: "Fintech".to_string(),
            funnel: FunnelStage::Awareness,
            styles: vec!["2D Character".to_string(), "Whiteboard".to_string()],
            ..UserInput::default()
        };

        let prompt = strategy_prompt(&input, false);
        assert!(prompt.contains("Project Description: \"A budgeting app for freelancers\""));
        assert!(prompt.contains("- Industry: Fintech"));
        assert!(prompt.contains("- Funnel Stage: Awareness"));
        assert!(prompt.contains("- Target Duration: 60 seconds"));
        assert!(prompt.contains("Preferred Styles list: 2D Character, Whiteboard"));
        assert!(prompt.contains("SINGLE VIDEO RECOMMENDATION"));
        assert!(!prompt.contains("fullFunnel"));
    }

    #[test]
    fn test_funnel_mode_adds_funnel_schema() {
        let prompt = strategy_prompt(&UserInput::default(), true);
        assert!(prompt.contains("FULL FUNNEL STRATEGY"));
        assert!(prompt.contains("\"fullFunnel\": ["));
        assert!(prompt.contains("any B2W style"));
    }
}
