//! `cache-url parse <url>` – parse one URL and print its configuration.

use anyhow::{Context, Result};
use cache_url::config::OutputFormat;

use super::render;

pub fn run_parse(url: &str, format: OutputFormat) -> Result<()> {
    let cfg = cache_url::parse(url).context("invalid cache URL")?;
    println!("{}", render(&cfg, format)?);
    Ok(())
}
