use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Lower bound (inclusive) of the Premium tier, in USD.
pub const PREMIUM_THRESHOLD: u64 = 2500;
/// Lower bound (inclusive) of the Flick tier, in USD.
pub const FLICK_THRESHOLD: u64 = 4000;

/// One of the three bundled offerings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum PackageTier {
    Growth,
    Premium,
    Flick,
}

impl PackageTier {
    pub const ALL: [PackageTier; 3] = [Self::Growth, Self::Premium, Self::Flick];

    /// Maps a total project cost onto a tier.
    ///
    /// The thresholds do not line up with the marketing price bands below:
    /// anything in 2400..2500 is Growth, 2500..4000 is Premium.
    pub fn for_total_cost(total_cost: u64) -> Self {
        if total_cost < PREMIUM_THRESHOLD {
            Self::Growth
        } else if total_cost < FLICK_THRESHOLD {
            Self::Premium
        } else {
            Self::Flick
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Growth => "Growth",
            Self::Premium => "Premium",
            Self::Flick => "Flick",
        }
    }

    /// Label used in strategy results, e.g. "Premium Package".
    pub fn package_label(&self) -> String {
        format!("{} Package", self.name())
    }

    pub fn price_label(&self) -> &'static str {
        match self {
            Self::Growth => "Budget-Friendly",
            Self::Premium => "Cost-Savvy",
            Self::Flick => "Best-In-Class",
        }
    }

    /// Marketing price band per 60 seconds.
    pub fn price_band(&self) -> &'static str {
        match self {
            Self::Growth => "$2,000-$2,400/60s",
            Self::Premium => "$2,800-$3,500/60s",
            Self::Flick => "$4,000-$8,000+/60s",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Growth => "Simple and effective budget-friendly animation with clean visuals and streamlined animation styles",
            Self::Premium => "Balance of quality and affordability with intricate designs and animations",
            Self::Flick => "Top-notch designs and cutting-edge animation techniques for brands aiming to stand out",
        }
    }

    pub fn art_styles(&self) -> &'static [&'static str] {
        match self {
            Self::Growth => &["Whiteboard", "Flat Infographics", "Mixed-Media"],
            Self::Premium => &[
                "Whiteboard",
                "Character",
                "Infographics",
                "2D Mixed-Media Videos",
            ],
            Self::Flick => &[
                "2.5D Character & 3D Infographics",
                "2.5D Mixed-Media Videos",
            ],
        }
    }

    pub fn use_cases(&self) -> &'static [&'static str] {
        const FULL: &[&str] = &[
            "Social Media",
            "Explainer",
            "Training",
            "Internal Communication",
            "Landing Page",
            "Brand Video",
            "Commercial Video",
            "Demo Video",
            "Event Video",
            "Marketing",
            "Testimonial Video",
        ];
        match self {
            Self::Growth => &FULL[..4],
            Self::Premium | Self::Flick => FULL,
        }
    }

    pub fn most_popular(&self) -> bool {
        matches!(self, Self::Premium)
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
