//! Netloc-as-location schemes: db, dummy, locmem and the memcached family.

use crate::cache_config::{CacheConfig, Location};
use crate::scheme::Scheme;
use crate::url_model::{hosts, UrlParts};

/// `LOCATION` is the netloc (a list when comma-separated), `KEY_PREFIX` the
/// path without its leading slash.
pub(super) fn extract(scheme: Scheme, parts: &UrlParts<'_>) -> CacheConfig {
    let mut cfg = CacheConfig::new(scheme.backend());

    let servers = hosts(parts.netloc);
    cfg.location = Some(if servers.len() > 1 {
        Location::Multiple(servers.into_iter().map(str::to_string).collect())
    } else {
        Location::from(parts.netloc)
    });
    cfg.key_prefix = Some(
        parts
            .path
            .strip_prefix('/')
            .unwrap_or(parts.path)
            .to_string(),
    );

    cfg
}
