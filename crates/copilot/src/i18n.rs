//! Translation tables loaded from `<dir>/<lang>.json` and cached per language.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::error::{CopilotError, CopilotResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::En, Self::Es, Self::Fr, Self::De];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::De => "Deutsch",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// English labels for the strategy brief and comparison exports.
pub fn builtin_english() -> Value {
    json!({
        "notifications": {
            "profileSaved": "Profile Saved",
            "profileLoaded": "Loaded",
            "formIncomplete": "Please fill in the description",
            "briefCopied": "Brief copied to clipboard"
        },
        "results": {
            "ctaPricing": "Recommended:",
            "briefAudience": "Audience",
            "briefMessage": "Message",
            "briefStoryArc": "Story Arc",
            "briefCta": "Call to Action",
            "matchLabel": "Match",
            "whyWorks": "Why It Works",
            "projectedOutcome": "Projected Outcome",
            "creativeBrief": "Creative Brief",
            "provenSuccess": "Proven Success Stories",
            "budgetCalculator": "Budget Calculator"
        },
        "export": {
            "exportSuccess": "Exported successfully:",
            "exportError": "Export failed",
            "portfolioMatches": "Portfolio Matches",
            "nextSteps": "Next Steps",
            "contactInfo": "Contact Information",
            "pdfTitle": "B2W Video Strategy"
        },
        "comparison": {
            "title": "Video Strategy Comparison",
            "option": "Option",
            "score": "Match",
            "style": "Style",
            "duration": "Duration",
            "bestFor": "Best For",
            "investment": "Investment",
            "timeToMarket": "Timeline"
        },
        "form": {
            "projectBrief": "Project Brief"
        }
    })
}

/// Per-language translation tables with English as the fallback.
#[derive(Debug, Clone)]
pub struct TranslationCache {
    dir: Option<PathBuf>,
    current: Language,
    tables: HashMap<Language, Value>,
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TranslationCache {
    /// Cache backed by `<dir>/<lang>.json` files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            current: Language::En,
            tables: HashMap::new(),
        }
    }

    /// Cache with only the built-in English table.
    pub fn builtin() -> Self {
        let mut tables = HashMap::new();
        tables.insert(Language::En, builtin_english());
        Self {
            dir: None,
            current: Language::En,
            tables,
        }
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
        Language::ALL.iter().map(|l| (l.code(), l.name())).collect()
    }

    fn read_table(&self, lang: Language) -> CopilotResult<Value> {
        let dir = self.dir.as_ref().ok_or_else(|| {
            CopilotError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no translation directory configured",
            ))
        })?;
        let content = std::fs::read_to_string(dir.join(format!("{}.json", lang.code())))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads a language once. A language that fails to load resolves to
    /// English; English that fails to load resolves to an empty table.
    pub fn load(&mut self, lang: Language) -> &Value {
        if !self.tables.contains_key(&lang) {
            match self.read_table(lang) {
                Ok(table) => {
                    debug!(language = %lang, "Loaded translations");
                    self.tables.insert(lang, table);
                }
                Err(e) if lang != Language::En => {
                    warn!(
                        language = %lang,
                        error = %e,
                        "Failed to load translations, falling back to English"
                    );
                    return self.load(Language::En);
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load English translations");
                    self.tables.insert(lang, Value::Object(Map::new()));
                }
            }
        }
        &self.tables[&lang]
    }

    /// Switches language. Unsupported codes are ignored with a warning.
    pub fn set_language(&mut self, code: &str) -> bool {
        let Some(lang) = Language::parse(code) else {
            warn!(code, "Language not supported");
            return false;
        };
        self.current = lang;
        self.load(lang);
        true
    }

    /// Looks up a dotted key such as `export.nextSteps`, returning the key
    /// itself when it is missing.
    pub fn t(&self, key: &str) -> String {
        let table = self
            .tables
            .get(&self.current)
            .or_else(|| self.tables.get(&Language::En));

        let Some(mut value) = table else {
            return key.to_string();
        };

        for part in key.split('.') {
            match value.get(part) {
                Some(next) => value = next,
                None => return key.to_string(),
            }
        }

        match value {
            Value::String(s) => s.clone(),
            Value::Object(_) | Value::Null => key.to_string(),
            other => other.to_string(),
        }
    }
}
