//! CLI command handlers.

mod env;
mod parse;
mod schemes;

pub use env::run_env;
pub use parse::run_parse;
pub use schemes::run_schemes;

use anyhow::Result;
use cache_url::config::OutputFormat;
use cache_url::CacheConfig;

/// Renders a configuration for printing.
pub(crate) fn render(cfg: &CacheConfig, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(cfg)?,
        OutputFormat::Toml => toml::to_string_pretty(cfg)?,
    })
}
