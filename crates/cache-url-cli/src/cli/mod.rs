//! CLI for inspecting cache URLs.

mod commands;

use anyhow::Result;
use cache_url::config::{self, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};

use commands::{run_env, run_parse, run_schemes};

/// Top-level CLI for cache URL parsing.
#[derive(Debug, Parser)]
#[command(name = "cache-url")]
#[command(about = "Parse cache connection URLs into cache backend configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format flag; overrides `format` from config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Toml,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Toml => OutputFormat::Toml,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a cache URL and print the resulting configuration.
    Parse {
        /// Cache URL, e.g. redis://127.0.0.1:6379/0/prefix.
        url: String,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Read the cache URL from the environment and print its configuration.
    Env {
        /// Environment variable to read (default from config, else CACHE_URL).
        #[arg(long, value_name = "NAME")]
        var: Option<String>,
        /// URL used when the variable is unset or empty (default from config, else locmem://).
        #[arg(long, value_name = "URL")]
        default: Option<String>,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// List registered URL schemes and their backends.
    Schemes,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, format } => {
                run_parse(&url, format.map_or(cfg.format, Into::into))?
            }
            CliCommand::Env {
                var,
                default,
                format,
            } => {
                if let Some(var) = var {
                    cfg.env_var = var;
                }
                if let Some(default) = default {
                    cfg.default_url = default;
                }
                if let Some(format) = format {
                    cfg.format = format.into();
                }
                run_env(&cfg)?;
            }
            CliCommand::Schemes => run_schemes(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
