//! Tests for the env subcommand.

use super::parse;
use crate::cli::{CliCommand, FormatArg};

#[test]
fn cli_parse_env_defaults() {
    match parse(&["cache-url", "env"]) {
        CliCommand::Env {
            var,
            default,
            format,
        } => {
            assert!(var.is_none());
            assert!(default.is_none());
            assert!(format.is_none());
        }
        _ => panic!("expected Env"),
    }
}

#[test]
fn cli_parse_env_overrides() {
    match parse(&[
        "cache-url",
        "env",
        "--var",
        "HERP",
        "--default",
        "memcached://127.0.0.1:11211",
        "--format",
        "json",
    ]) {
        CliCommand::Env {
            var,
            default,
            format,
        } => {
            assert_eq!(var.as_deref(), Some("HERP"));
            assert_eq!(default.as_deref(), Some("memcached://127.0.0.1:11211"));
            assert_eq!(format, Some(FormatArg::Json));
        }
        _ => panic!("expected Env with overrides"),
    }
}
