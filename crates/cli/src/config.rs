use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use copilot::profile::DATA_DIR;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CopilotConfig {
    pub proxy: ProxyConfig,
    pub server: ServerConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// URL of a running `/api/generate` proxy. Empty means local strategies
    /// only.
    pub url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: PathBuf,
    /// Directory holding `<lang>.json` translation tables.
    pub translations_dir: Option<PathBuf>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            translations_dir: None,
        }
    }
}

impl CopilotConfig {
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(DATA_DIR))
            .unwrap_or_else(|| PathBuf::from(DATA_DIR))
    }

    /// Reads `<dir>/config.toml`, falling back to defaults when it is absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let path = dir.join(CONFIG_FILE);
        let temp_path = path.with_extension("toml.tmp");
        std::fs::write(&temp_path, toml::to_string_pretty(self)?)?;
        std::fs::rename(&temp_path, &path)?;
        Ok(path)
    }

    pub fn proxy_url(&self) -> Option<&str> {
        Some(self.proxy.url.trim()).filter(|url| !url.is_empty())
    }

    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy.timeout_secs.max(1))
    }
}
