//! Strategy copilot for Broadcast2World video briefs.
//!
//! Turns a short product form into ranked video recommendations, a creative
//! brief and portfolio matches.
//!
//! # Architecture
//!
//! - **Gemini**: client for the generation proxy and its wire types
//! - **Prompts**: system instruction and per-request prompt assembly
//! - **Parser**: JSON extraction and validation of model output
//! - **Fallback**: deterministic strategy from the knowledge base
//! - **Generator**: model first, fallback on any failure
//! - **Comparison**: side-by-side view of up to three recommendations
//! - **Export**: Markdown brief and comparison documents
//! - **I18n / Profile**: translation tables and the persisted form profile

pub mod comparison;
pub mod error;
pub mod export;
pub mod fallback;
pub mod gemini;
pub mod generator;
pub mod i18n;
pub mod parser;
pub mod profile;
pub mod prompts;

pub use comparison::{ComparisonExport, ComparisonOption, ComparisonSession};
pub use error::{CopilotError, CopilotResult};
pub use export::BriefExporter;
pub use gemini::{ProxyClient, DEFAULT_TIMEOUT};
pub use generator::{FallbackReason, StrategyGenerator, StrategyOutcome};
pub use i18n::{Language, TranslationCache};
pub use profile::ProfileStore;
