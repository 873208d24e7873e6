//! Errors raised while turning a cache URL into a backend configuration.

use thiserror::Error;

/// Failure of a single [`parse`](crate::parse) call. No partial configuration is
/// ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheUrlError {
    /// Input could not be split into URL components at all.
    #[error("malformed cache URL {url:?}: {reason}")]
    MalformedUrl { url: String, reason: &'static str },

    /// Scheme has no registered cache backend.
    #[error("unknown cache URL scheme {scheme:?}")]
    UnknownScheme { scheme: String },
}

impl CacheUrlError {
    pub(crate) fn malformed(url: &str, reason: &'static str) -> Self {
        CacheUrlError::MalformedUrl {
            url: url.to_string(),
            reason,
        }
    }

    /// Description without the input URL, which may carry credentials.
    pub fn redacted(&self) -> String {
        match self {
            CacheUrlError::MalformedUrl { reason, .. } => format!("malformed cache URL: {reason}"),
            CacheUrlError::UnknownScheme { .. } => self.to_string(),
        }
    }
}
