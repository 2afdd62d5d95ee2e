pub mod context;
pub mod package;
pub mod service;
pub mod strategy;
pub mod style;

pub use context::{UserContext, DEFAULT_FUNDING_STAGE, DEFAULT_INDUSTRY, FUNDING_STAGES};
pub use package::{PackageTier, FLICK_THRESHOLD, PREMIUM_THRESHOLD};
pub use service::VideoType;
pub use strategy::{
    CreativeBrief, FunnelStage, FunnelStep, PortfolioMatch, Recommendation, StrategyResult,
    UserInput,
};
pub use style::{AnimationStyle, StylePriceRange};
