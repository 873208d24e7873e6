//! Cache backend configuration produced by [`parse`](crate::parse).
//!
//! Serialises with the upper-case key names cache frameworks expect
//! (`BACKEND`, `LOCATION`, `KEY_PREFIX`, `OPTIONS`); absent values are omitted.

use serde::{Deserialize, Serialize};

/// Where the backend lives: one target, or an ordered list of servers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Location::Single(s.to_string())
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Location::Single(s)
    }
}

/// Backend-specific extra settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CacheOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CacheOptions {
    pub fn is_empty(&self) -> bool {
        self.parser_class.is_none() && self.password.is_none()
    }
}

/// Configuration for one cache alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CacheConfig {
    pub backend: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<CacheOptions>,
}

impl CacheConfig {
    pub(crate) fn new(backend: &str) -> Self {
        Self {
            backend: backend.to_string(),
            location: None,
            key_prefix: None,
            options: None,
        }
    }

    /// Attaches `options` unless they carry nothing.
    pub(crate) fn set_options(&mut self, options: CacheOptions) {
        self.options = (!options.is_empty()).then_some(options);
    }

    /// Single location string, if the location is not a server list.
    pub fn location_str(&self) -> Option<&str> {
        match &self.location {
            Some(Location::Single(s)) => Some(s),
            _ => None,
        }
    }

    pub fn parser_class(&self) -> Option<&str> {
        self.options.as_ref()?.parser_class.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.options.as_ref()?.password.as_deref()
    }
}
