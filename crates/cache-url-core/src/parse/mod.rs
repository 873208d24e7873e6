//! Cache URL parsing: split, look up the scheme, dispatch on its family.

mod adapter;
mod redis;
mod simple;

use crate::cache_config::{CacheConfig, Location};
use crate::error::CacheUrlError;
use crate::scheme::{Scheme, SchemeFamily};
use crate::url_model::{split_url, UrlParts};

/// Parses a cache URL into a backend configuration.
///
/// # Examples
///
/// - `parse("file:///herp")` → `BACKEND` = file-based cache, `LOCATION` = `"/herp"`
/// - `parse("redis://:pw@127.0.0.1:6379/0/prefix")` → `LOCATION` = `"127.0.0.1:6379:0"`,
///   `KEY_PREFIX` = `"prefix"`, `OPTIONS.PASSWORD` = `"pw"`
///
/// # Errors
///
/// [`CacheUrlError::MalformedUrl`] when the input is not URL-shaped,
/// [`CacheUrlError::UnknownScheme`] when the scheme has no registered backend.
pub fn parse(url: &str) -> Result<CacheConfig, CacheUrlError> {
    let parts = split_url(url).inspect_err(log_rejection)?;
    let scheme = Scheme::from_token(&parts.scheme).inspect_err(log_rejection)?;

    let family = scheme.family();
    let cfg = match family {
        SchemeFamily::Simple => simple::extract(scheme, &parts),
        SchemeFamily::File => file(scheme, &parts),
        SchemeFamily::DirectRedis => redis::extract(scheme, &parts),
        SchemeFamily::AdapterRedis => adapter::extract(scheme, &parts),
    };

    tracing::debug!(
        "parsed cache url scheme={} family={:?} backend={}",
        scheme,
        family,
        cfg.backend
    );
    Ok(cfg)
}

fn log_rejection(err: &CacheUrlError) {
    tracing::warn!("rejected cache url: {}", err.redacted());
}

/// Path is the cache directory; nothing else applies.
fn file(scheme: Scheme, parts: &UrlParts<'_>) -> CacheConfig {
    let mut cfg = CacheConfig::new(scheme.backend());
    cfg.location = Some(Location::from(parts.path));
    cfg
}
