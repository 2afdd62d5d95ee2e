use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::budget::format_usd;
use crate::error::{CoreError, Result};

/// USD price band for 60 seconds of finished video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StylePriceRange {
    pub min: u64,
    pub max: u64,
}

impl StylePriceRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }

    /// "$2,400 - $3,500"
    pub fn label(&self) -> String {
        format!("{} - {}", format_usd(self.min), format_usd(self.max))
    }
}

/// Animation production technique offered by the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AnimationStyle {
    TwoDCharacter,
    MotionGraphics,
    ThreeDAnimation,
    MixedMedia,
    Whiteboard,
    Isometric,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 6] = [
        Self::TwoDCharacter,
        Self::MotionGraphics,
        Self::ThreeDAnimation,
        Self::MixedMedia,
        Self::Whiteboard,
        Self::Isometric,
    ];

    /// Canonical key used on the wire and in the pricing tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoDCharacter => "2dCharacter",
            Self::MotionGraphics => "motionGraphics",
            Self::ThreeDAnimation => "3dAnimation",
            Self::MixedMedia => "mixedMedia",
            Self::Whiteboard => "whiteboard",
            Self::Isometric => "isometric",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "2dCharacter" => Ok(Self::TwoDCharacter),
            "motionGraphics" => Ok(Self::MotionGraphics),
            "3dAnimation" => Ok(Self::ThreeDAnimation),
            "mixedMedia" => Ok(Self::MixedMedia),
            "whiteboard" => Ok(Self::Whiteboard),
            "isometric" => Ok(Self::Isometric),
            other => Err(CoreError::UnknownStyle(other.to_string())),
        }
    }

    /// Matches a human-facing preference label such as "2D Character" or
    /// "3D Product". Used for form preferences, which are display strings.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        if label.starts_with("2d character") {
            Some(Self::TwoDCharacter)
        } else if label.starts_with("motion graphics") {
            Some(Self::MotionGraphics)
        } else if label.starts_with("3d product") || label.starts_with("3d animation") {
            Some(Self::ThreeDAnimation)
        } else if label.starts_with("mixed media") {
            Some(Self::MixedMedia)
        } else if label.starts_with("whiteboard") {
            Some(Self::Whiteboard)
        } else if label.starts_with("isometric") {
            Some(Self::Isometric)
        } else {
            None
        }
    }

    pub fn price_range(&self) -> StylePriceRange {
        let (min, max) = match self {
            Self::TwoDCharacter => (2400, 3500),
            Self::MotionGraphics => (2000, 3000),
            Self::ThreeDAnimation => (4000, 8000),
            Self::MixedMedia => (4000, 7000),
            Self::Whiteboard => (1800, 2500),
            Self::Isometric => (3000, 4500),
        };
        StylePriceRange { min, max }
    }

    pub fn production_timeline(&self) -> &'static str {
        match self {
            Self::TwoDCharacter | Self::MotionGraphics => "4-6 weeks",
            Self::ThreeDAnimation | Self::MixedMedia => "8-10 weeks",
            Self::Whiteboard => "3-4 weeks",
            Self::Isometric => "6-8 weeks",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TwoDCharacter => "2D Character Animation",
            Self::MotionGraphics => "Motion Graphics / Infographic Animation",
            Self::ThreeDAnimation => "3D Product Animation",
            Self::MixedMedia => "Mixed Media Animation",
            Self::Whiteboard => "Whiteboard Animation",
            Self::Isometric => "Isometric Illustration",
        }
    }

    /// Short label shown in form preferences.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::TwoDCharacter => "2D Character",
            Self::MotionGraphics => "Motion Graphics",
            Self::ThreeDAnimation => "3D Product",
            Self::MixedMedia => "Mixed Media",
            Self::Whiteboard => "Whiteboard",
            Self::Isometric => "Isometric",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::TwoDCharacter => "Character-driven narratives with custom illustrated characters",
            Self::MotionGraphics => "Clean, modern animations focusing on data and concepts",
            Self::ThreeDAnimation => "Photorealistic 3D rendering for hardware and medical devices",
            Self::MixedMedia => "Live action footage + animated overlays - unique hybrid style",
            Self::Whiteboard => "Hand-drawn style perfect for educational content",
            Self::Isometric => "Technical 3D-style illustrations (2.5D) for architecture/systems",
        }
    }

    pub fn best_for(&self) -> &'static str {
        match self {
            Self::TwoDCharacter => "Relatable storytelling, SaaS explainers, product launches",
            Self::MotionGraphics => "Data-heavy products, technical explanations, B2B SaaS",
            Self::ThreeDAnimation => "Hardware products, medical devices, manufacturing",
            Self::MixedMedia => "Brand anthems, testimonials, premium storytelling",
            Self::Whiteboard => "Training videos, educational content, explainers",
            Self::Isometric => "System architecture, network diagrams, infrastructure",
        }
    }
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AnimationStyle {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<AnimationStyle> for String {
    fn from(style: AnimationStyle) -> Self {
        style.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_canonical_keys() {
        for style in AnimationStyle::ALL {
            assert_eq!(AnimationStyle::parse(style.as_str()), Ok(style));
        }
    }

    #[test]
    fn test_parse_unknown_style() {
        assert_eq!(
            AnimationStyle::parse("claymation"),
            Err(CoreError::UnknownStyle("claymation".to_string()))
        );
        // Keys are case-sensitive.
        assert!(AnimationStyle::parse("Whiteboard").is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_style() {
        let ok: AnimationStyle = serde_json::from_str("\"3dAnimation\"").unwrap();
        assert_eq!(ok, AnimationStyle::ThreeDAnimation);

        let err = serde_json::from_str::<AnimationStyle>("\"stopMotion\"").unwrap_err();
        assert!(err.to_string().contains("stopMotion"));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            AnimationStyle::from_label("2D Character"),
            Some(AnimationStyle::TwoDCharacter)
        );
        assert_eq!(
            AnimationStyle::from_label("3D Product"),
            Some(AnimationStyle::ThreeDAnimation)
        );
        assert_eq!(
            AnimationStyle::from_label("Motion Graphics / Infographic Animation"),
            Some(AnimationStyle::MotionGraphics)
        );
        assert_eq!(AnimationStyle::from_label("Stop Motion"), None);
    }

    #[test]
    fn test_price_label() {
        assert_eq!(
            AnimationStyle::TwoDCharacter.price_range().label(),
            "$2,400 - $3,500"
        );
    }
}
