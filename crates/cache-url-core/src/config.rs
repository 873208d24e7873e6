use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no URL is given explicitly.
pub const DEFAULT_ENV: &str = "CACHE_URL";

/// URL used when the environment variable is unset or empty.
pub const DEFAULT_URL: &str = "locmem://";

/// How parsed configurations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// Tool configuration loaded from `~/.config/cache-url/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Name of the environment variable holding the cache URL.
    pub env_var: String,
    /// Fallback URL when the variable is unset or empty.
    pub default_url: String,
    /// Output format: "json" (default) or "toml".
    pub format: OutputFormat,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            env_var: DEFAULT_ENV.to_string(),
            default_url: DEFAULT_URL.to_string(),
            format: OutputFormat::Json,
        }
    }
}

impl ToolConfig {
    /// Picks the cache URL: the value of `env_var` as returned by `lookup`, or
    /// `default_url` when that is unset or empty.
    pub fn resolve_url<F>(&self, lookup: F) -> String
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(&self.env_var) {
            Some(url) if !url.is_empty() => url,
            _ => {
                tracing::debug!(
                    "{} unset or empty, using default {}",
                    self.env_var,
                    self.default_url
                );
                self.default_url.clone()
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cache-url")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG config dir; built-in defaults when no file exists.
pub fn load() -> Result<ToolConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(ToolConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<ToolConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ToolConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
