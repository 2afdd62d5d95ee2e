use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{CoreError, Result};

/// Video services offered by the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum VideoType {
    #[default]
    ExplainerVideos,
    ProductDemo,
    CommercialVideos,
    BrandAnthems,
    CaseStudyTestimonial,
    TrainingVideos,
    InvestorPitch,
}

impl VideoType {
    pub const ALL: [VideoType; 7] = [
        Self::ExplainerVideos,
        Self::ProductDemo,
        Self::CommercialVideos,
        Self::BrandAnthems,
        Self::CaseStudyTestimonial,
        Self::TrainingVideos,
        Self::InvestorPitch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExplainerVideos => "explainerVideos",
            Self::ProductDemo => "productDemo",
            Self::CommercialVideos => "commercialVideos",
            Self::BrandAnthems => "brandAnthems",
            Self::CaseStudyTestimonial => "caseStudyTestimonial",
            Self::TrainingVideos => "trainingVideos",
            Self::InvestorPitch => "investorPitch",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVideoType(s.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ExplainerVideos => "Animated Explainer Videos",
            Self::ProductDemo => "Product Demo Videos",
            Self::CommercialVideos => "Commercial Videos",
            Self::BrandAnthems => "Brand Anthem / Culture Videos",
            Self::CaseStudyTestimonial => "Case Study & Testimonial Videos",
            Self::TrainingVideos => "Corporate Training & Onboarding",
            Self::InvestorPitch => "Investor Pitch Videos",
        }
    }

    pub fn duration(&self) -> &'static str {
        match self {
            Self::ExplainerVideos => "60-90 seconds",
            Self::ProductDemo => "90s - 2 minutes",
            Self::CommercialVideos => "30-60 seconds",
            Self::BrandAnthems => "60-120 seconds",
            Self::CaseStudyTestimonial => "90-180 seconds",
            Self::TrainingVideos => "2-5 minutes",
            Self::InvestorPitch => "90-120 seconds",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ExplainerVideos => {
                "The flagship service. Break down complex ideas simply and effectively."
            }
            Self::ProductDemo => "Screen-cast + motion graphics wrapper showing 'How it works'",
            Self::CommercialVideos => "High-impact promotional videos for broad audience reach",
            Self::BrandAnthems => {
                "Mixed media combining live action + animation. High trust factor."
            }
            Self::CaseStudyTestimonial => {
                "Remote recording or live action customer success stories"
            }
            Self::TrainingVideos => "Employee education, process training, compliance",
            Self::InvestorPitch => {
                "Compelling narrative for fundraising and stakeholder alignment"
            }
        }
    }

    pub fn funnel_stage(&self) -> &'static str {
        match self {
            Self::ExplainerVideos => "Awareness (Top of Funnel)",
            Self::ProductDemo => "Consideration (Mid Funnel)",
            Self::CommercialVideos => "Awareness",
            Self::BrandAnthems => "Awareness + Retention",
            Self::CaseStudyTestimonial => "Decision (Bottom of Funnel)",
            Self::TrainingVideos => "Retention + Onboarding",
            Self::InvestorPitch => "Pre-funnel (Business Development)",
        }
    }
}
