//! Core domain for the video strategy copilot.
//!
//! # Architecture
//!
//! - **Domain**: animation styles, packages, services, user context and the
//!   strategy result model
//! - **Budget**: cost calculator, ROI estimator and option comparator
//! - **Knowledge**: static studio reference data used for prompting and the
//!   local strategy generator

pub mod budget;
pub mod domain;
pub mod error;
pub mod knowledge;

pub use budget::{
    compare_options, compute_cost, compute_roi, recommend_budget_options, ComparisonResult,
    CostBreakdown, ProductionConfig, RoiProjection,
};
pub use domain::{
    AnimationStyle, CreativeBrief, FunnelStage, FunnelStep, PackageTier, PortfolioMatch,
    Recommendation, StrategyResult, UserContext, UserInput, VideoType,
};
pub use error::{CoreError, Result};
