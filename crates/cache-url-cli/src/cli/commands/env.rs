//! `cache-url env` – resolve the URL from the environment, then parse it.

use anyhow::{Context, Result};
use cache_url::config::ToolConfig;

use super::render;

pub fn run_env(cfg: &ToolConfig) -> Result<()> {
    let url = cfg.resolve_url(|name| std::env::var(name).ok());
    // The URL may carry a password; log only where it came from.
    tracing::info!("resolving cache url from ${}", cfg.env_var);
    let parsed = cache_url::parse(&url)
        .with_context(|| format!("invalid cache URL in ${}", cfg.env_var))?;
    println!("{}", render(&parsed, cfg.format)?);
    Ok(())
}
