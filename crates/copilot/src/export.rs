//! Markdown exports of a strategy brief and of a recommendation comparison.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use copilot_core::domain::{Recommendation, StrategyResult, UserInput};
use copilot_core::knowledge::COMPANY;
use tracing::info;

use crate::comparison::{estimate_cost, MAX_COMPARISONS};
use crate::error::{CopilotError, CopilotResult};
use crate::i18n::TranslationCache;

const NEXT_STEPS: [&str; 4] = [
    "Review this strategy with your team",
    "Schedule a discovery call with Broadcast2World",
    "Refine the creative brief during consultation",
    "Approve timeline and kickoff production",
];

pub fn brief_filename(at: DateTime<Utc>) -> String {
    format!("B2W_Video_Strategy_{}.md", at.timestamp_millis())
}

pub fn comparison_filename(at: DateTime<Utc>) -> String {
    format!("B2W_Comparison_{}.md", at.timestamp_millis())
}

fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Writes strategy documents into a directory, labelled through a
/// [`TranslationCache`].
pub struct BriefExporter {
    out_dir: PathBuf,
    translations: TranslationCache,
}

impl BriefExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            translations: TranslationCache::builtin(),
        }
    }

    pub fn with_translations(mut self, translations: TranslationCache) -> Self {
        self.translations = translations;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn t(&self, key: &str) -> String {
        self.translations.t(key)
    }

    pub fn render_brief(
        &self,
        result: &StrategyResult,
        input: &UserInput,
        generated: DateTime<Utc>,
    ) -> String {
        let mut doc = String::new();

        doc.push_str(&format!("# {}\n\n", self.t("export.pdfTitle")));
        doc.push_str(&format!("_Generated: {}_\n\n", generated.format("%Y-%m-%d")));

        doc.push_str("## PROJECT OVERVIEW\n\n");
        doc.push_str(&format!("- **Industry:** {}\n", input.industry));
        doc.push_str(&format!("- **Stage:** {}\n", input.stage));
        doc.push_str(&format!("- **Funnel Stage:** {}\n", input.funnel));
        doc.push_str(&format!("- **Primary Goal:** {}\n", input.goal));
        doc.push_str(&format!("- **Target Duration:** {}s\n\n", input.duration));

        if !input.description.is_empty() {
            doc.push_str(&format!("### {}\n\n", self.t("form.projectBrief")));
            doc.push_str(&format!("{}\n\n", input.description));
        }

        if let Some(rec) = result.top_recommendation() {
            self.render_recommendation(&mut doc, rec);
        }

        if let Some(brief) = &result.creative_brief {
            doc.push_str(&format!("## {}\n\n", self.t("results.creativeBrief").to_uppercase()));
            doc.push_str(&format!(
                "**{}:** {}\n\n",
                self.t("results.briefAudience"),
                brief.target_audience
            ));
            doc.push_str(&format!(
                "**{}:** {}\n\n",
                self.t("results.briefMessage"),
                brief.core_message
            ));
            doc.push_str(&format!(
                "**{}:** {}\n\n",
                self.t("results.briefStoryArc"),
                brief.storyline
            ));
            if !brief.ctas.is_empty() {
                doc.push_str(&format!(
                    "**{}:** {}\n\n",
                    self.t("results.briefCta"),
                    brief.ctas.join(", ")
                ));
            }
        }

        if !result.portfolio_matches.is_empty() {
            doc.push_str(&format!("## {}\n\n", self.t("export.portfolioMatches").to_uppercase()));
            for (idx, m) in result.portfolio_matches.iter().enumerate() {
                doc.push_str(&format!("{}. **{}**\n", idx + 1, m.title));
                doc.push_str(&format!("   - Industry: {} | Style: {}\n", m.industry, m.style));
                if !m.outcome.is_empty() {
                    doc.push_str(&format!("   - Outcome: {}\n", m.outcome));
                }
            }
            doc.push('\n');
        }

        if let Some(steps) = &result.full_funnel {
            doc.push_str("## FULL FUNNEL PLAN\n\n");
            doc.push_str("| Stage | Video Type | Duration | Metric |\n");
            doc.push_str("|---|---|---|---|\n");
            for step in steps {
                doc.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    table_cell(&step.stage),
                    table_cell(&step.video_type),
                    table_cell(&step.duration),
                    table_cell(&step.metric)
                ));
            }
            doc.push('\n');
        }

        if !result.pricing_tier.is_empty() {
            doc.push_str("## Investment\n\n");
            doc.push_str(&format!("{} {}\n\n", self.t("results.ctaPricing"), result.pricing_tier));
        }

        doc.push_str(&format!("## {}\n\n", self.t("export.nextSteps").to_uppercase()));
        for (idx, step) in NEXT_STEPS.iter().enumerate() {
            doc.push_str(&format!("{}. {}\n", idx + 1, step));
        }
        doc.push('\n');

        let contact = &COMPANY.contact;
        doc.push_str(&format!("## {}\n\n", self.t("export.contactInfo").to_uppercase()));
        doc.push_str(&format!("**{}**  \n", contact.legal_name));
        doc.push_str(&format!("US Office: {}, {}  \n", contact.street, contact.city));
        doc.push_str(&format!("Phone: {}  \n", contact.phone));
        doc.push_str(&format!("Email: {}  \n", contact.email));
        doc.push_str(&format!("Website: {}\n\n", contact.website));

        doc.push_str("---\n\n");
        doc.push_str(&format!(
            "© {} {}, Inc. | Powered by AI Strategy Copilot\n",
            generated.year(),
            COMPANY.name
        ));

        doc
    }

    fn render_recommendation(&self, doc: &mut String, rec: &Recommendation) {
        let title = if rec.title.is_empty() {
            "Video Recommendation"
        } else {
            rec.title.as_str()
        };

        doc.push_str("## RECOMMENDATION\n\n");
        doc.push_str(&format!("### {title}\n\n"));
        doc.push_str(&format!("- **{}:** {}%\n", self.t("results.matchLabel"), rec.score));
        doc.push_str(&format!("- **{}:** {}\n\n", self.t("comparison.style"), rec.style));
        if !rec.description.is_empty() {
            doc.push_str(&format!("{}\n\n", rec.description));
        }
        if !rec.why_perfect.is_empty() {
            doc.push_str(&format!("**{}:** {}\n\n", self.t("results.whyWorks"), rec.why_perfect));
        }
        if let Some(metric) = rec.metrics.first() {
            doc.push_str(&format!("**{}:** {}\n\n", self.t("results.projectedOutcome"), metric));
        }
    }

    pub fn render_comparison(
        &self,
        recommendations: &[Recommendation],
        input: &UserInput,
    ) -> String {
        let mut doc = String::new();
        let columns = [
            self.t("comparison.option"),
            self.t("comparison.score"),
            self.t("comparison.style"),
            self.t("comparison.duration"),
            self.t("comparison.bestFor"),
            self.t("comparison.investment"),
        ];

        doc.push_str(&format!("# {}\n\n", self.t("comparison.title")));
        doc.push_str(&format!("| {} |\n", columns.join(" | ")));
        doc.push_str(&format!("|{}\n", "---|".repeat(columns.len())));

        for (idx, rec) in recommendations.iter().take(MAX_COMPARISONS).enumerate() {
            let best_for = if rec.funnel_fit.is_empty() {
                "All stages"
            } else {
                rec.funnel_fit.as_str()
            };
            doc.push_str(&format!(
                "| Option {} | {}% | {} | {}s | {} | {} |\n",
                idx + 1,
                rec.score,
                table_cell(&rec.style),
                input.duration,
                table_cell(best_for),
                estimate_cost(&rec.style)
            ));
        }

        doc
    }

    fn write(&self, filename: &str, content: &str) -> CopilotResult<PathBuf> {
        let export_error = |e: std::io::Error| CopilotError::Export(format!("{filename}: {e}"));

        std::fs::create_dir_all(&self.out_dir).map_err(export_error)?;
        let path = self.out_dir.join(filename);
        std::fs::write(&path, content).map_err(export_error)?;

        info!(path = %path.display(), "Exported document");
        Ok(path)
    }

    /// Writes `B2W_Video_Strategy_<millis>.md` and returns its path.
    pub fn export_brief(
        &self,
        result: &StrategyResult,
        input: &UserInput,
    ) -> CopilotResult<PathBuf> {
        let now = Utc::now();
        let content = self.render_brief(result, input, now);
        self.write(&brief_filename(now), &content)
    }

    /// Writes `B2W_Comparison_<millis>.md` and returns its path.
    pub fn export_comparison(
        &self,
        recommendations: &[Recommendation],
        input: &UserInput,
    ) -> CopilotResult<PathBuf> {
        let content = self.render_comparison(recommendations, input);
        self.write(&comparison_filename(Utc::now()), &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_filenames_use_unix_millis() {
        let at = fixed_time();
        let millis = at.timestamp_millis();
        assert_eq!(brief_filename(at), format!("B2W_Video_Strategy_{millis}.md"));
        assert_eq!(comparison_filename(at), format!("B2W_Comparison_{millis}.md"));
    }

    #[test]
    fn test_brief_sections_in_order() {
        let input = UserInput {
            description: "Compliance automation platform".to_string(),
            ..UserInput::default()
        };
        let result = fallback::generate(&input, true);
        let doc = BriefExporter::new(".").render_brief(&result, &input, fixed_time());

        let order = [
            "# B2W Video Strategy",
            "_Generated: 2025-03-14_",
            "## PROJECT OVERVIEW",
            "### Project Brief",
            "## RECOMMENDATION",
            "- **Match:** 92%",
            "## CREATIVE BRIEF",
            "**Call to Action:** Book Demos",
            "## PORTFOLIO MATCHES",
            "1. **Zoom**",
            "## FULL FUNNEL PLAN",
            "## Investment",
            "Recommended: Growth Package",
            "## NEXT STEPS",
            "4. Approve timeline and kickoff production",
            "## CONTACT INFORMATION",
            "Phone: (732) 387-3864",
            "© 2025 Broadcast2World, Inc. | Powered by AI Strategy Copilot",
        ];
        let mut cursor = 0;
        for marker in order {
            let pos = doc[cursor..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing or out of order: {marker}"));
            cursor += pos + marker.len();
        }
    }

    #[test]
    fn test_empty_result_still_has_fixed_sections() {
        let doc = BriefExporter::new(".").render_brief(
            &StrategyResult::default(),
            &UserInput::default(),
            fixed_time(),
        );
        assert!(!doc.contains("## RECOMMENDATION"));
        assert!(!doc.contains("## Investment"));
        assert!(doc.contains("## NEXT STEPS"));
        assert!(doc.contains("## CONTACT INFORMATION"));
    }

    #[test]
    fn test_comparison_table() {
        let recs = vec![
            Recommendation {
                score: 95.0,
                style: "Whiteboard".to_string(),
                funnel_fit: "Awareness".to_string(),
                ..Recommendation::default()
            },
            Recommendation {
                score: 81.5,
                style: "Claymation".to_string(),
                ..Recommendation::default()
            },
        ];
        let doc = BriefExporter::new(".").render_comparison(&recs, &UserInput::default());

        assert!(doc.starts_with("# Video Strategy Comparison"));
        assert!(doc.contains("| Option | Match | Style | Duration | Best For | Investment |"));
        assert!(doc.contains("| Option 1 | 95% | Whiteboard | 60s | Awareness | $1,800 - $2,500 |"));
        assert!(doc.contains("| Option 2 | 81.5% | Claymation | 60s | All stages | $2,000 - $5,000 |"));
    }

    #[test]
    fn test_export_writes_files() {
        let tmp = TempDir::new().unwrap();
        let exporter = BriefExporter::new(tmp.path().join("exports"));
        let input = UserInput::default();
        let result = fallback::generate(&input, false);

        let path = exporter.export_brief(&result, &input).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("B2W_Video_Strategy_") && name.ends_with(".md"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("## NEXT STEPS"));

        let path = exporter
            .export_comparison(&result.recommendations, &input)
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_failure_is_reported() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let exporter = BriefExporter::new(&blocker);
        let err = exporter
            .export_brief(&StrategyResult::default(), &UserInput::default())
            .unwrap_err();
        assert!(matches!(err, CopilotError::Export(_)));
    }
}
