use std::path::{Path, PathBuf};

use copilot_core::domain::UserInput;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{CopilotError, CopilotResult};
use crate::i18n::Language;

pub const DATA_DIR: &str = ".video-copilot";
pub const STORE_FILE: &str = "store.json";

/// Last submitted form input.
pub const PROFILE_KEY: &str = "b2w_profile_v2";
/// Preferred interface language code.
pub const LANGUAGE_KEY: &str = "b2w_language";

/// Small key-value store persisted as one JSON object.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Store under `~/.video-copilot`, or `./.video-copilot` without a home
    /// directory.
    pub fn new() -> Self {
        let dir = dirs::home_dir()
            .map(|h| h.join(DATA_DIR))
            .unwrap_or_else(|| PathBuf::from(DATA_DIR));
        Self { dir }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STORE_FILE)
    }

    /// Unreadable or corrupt stores read as empty.
    fn read_all(&self) -> Map<String, Value> {
        let path = self.path();
        if !path.exists() {
            return Map::new();
        }

        match std::fs::read_to_string(&path)
            .map_err(CopilotError::from)
            .and_then(|content| Ok(serde_json::from_str::<Map<String, Value>>(&content)?))
        {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable profile store");
                Map::new()
            }
        }
    }

    fn write_all(&self, entries: &Map<String, Value>) -> CopilotResult<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let path = self.path();
        let temp_path = path.with_extension("json.tmp");

        std::fs::write(&temp_path, json)?;
        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> CopilotResult<()> {
        let value = serde_json::to_value(value)?;
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
            .map_err(|e| CopilotError::Store(format!("{}: {e}", self.path().display())))?;
        debug!(key, "Saved profile entry");
        Ok(())
    }

    /// Missing keys and values of the wrong shape both read as `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.read_all().remove(key)?;
        match serde_json::from_value(value) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed profile entry");
                None
            }
        }
    }

    pub fn save_profile(&self, input: &UserInput) -> CopilotResult<()> {
        self.save(PROFILE_KEY, input)
    }

    pub fn load_profile(&self) -> Option<UserInput> {
        self.load(PROFILE_KEY)
    }

    pub fn save_language(&self, language: Language) -> CopilotResult<()> {
        self.save(LANGUAGE_KEY, &language)
    }

    pub fn load_language(&self) -> Option<Language> {
        self.load(LANGUAGE_KEY)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
