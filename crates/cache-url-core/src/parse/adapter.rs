//! `dj*` schemes for the django_redis backend.
//!
//! The location is itself a connection URL (`redis://host:port?db=0`,
//! `rediss://...`, `unix://@/path.sock?db=1`). Database and prefix come from
//! the `db`/`prefix` query parameters, or from `/db/prefix` in the path for
//! the network variants.

use crate::cache_config::{CacheConfig, CacheOptions};
use crate::scheme::{Scheme, HIREDIS_PARSER_CLASS};
use crate::url_model::UrlParts;

const ADAPTER_PREFIX: &str = "dj";
const HIREDIS_PREFIX: &str = "hi";
const UNIX_SCHEME: &str = "unix";

/// Netloc written when the input has none.
const EMPTY_NETLOC: &str = "@";

pub(super) fn extract(scheme: Scheme, parts: &UrlParts<'_>) -> CacheConfig {
    let mut cfg = CacheConfig::new(scheme.backend());

    let query = parts.query_params();
    let (mut db, mut prefix) = if query.is_empty() {
        (None, String::new())
    } else {
        (
            Some(encode_query_value(query.first("db").unwrap_or("0"))),
            query.first("prefix").unwrap_or("").to_string(),
        )
    };

    let (target, hiredis) = target_scheme(scheme);
    let mut path = parts.path;

    if target != UNIX_SCHEME && !path.is_empty() {
        // Path segments are still in their raw, encoded form.
        let mut bits = path.splitn(3, '/').skip(1);
        db = bits.next().filter(|d| !d.is_empty()).map(str::to_string);
        if let Some(p) = bits.next() {
            prefix = p.to_string();
        }
        path = "";
    }

    cfg.key_prefix = Some(prefix);
    if hiredis {
        cfg.set_options(CacheOptions {
            parser_class: Some(HIREDIS_PARSER_CLASS.to_string()),
            password: None,
        });
    }
    cfg.location = Some(connection_url(target, parts.netloc, path, db.as_deref()).into());

    cfg
}

/// Scheme of the emitted connection URL, and whether hiredis was requested.
fn target_scheme(scheme: Scheme) -> (&'static str, bool) {
    let token = scheme.token();
    let stripped = token.strip_prefix(ADAPTER_PREFIX).unwrap_or(token);
    let (target, hiredis) = match stripped.strip_prefix(HIREDIS_PREFIX) {
        Some(rest) => (rest, true),
        None => (stripped, false),
    };
    if token.contains(UNIX_SCHEME) {
        (UNIX_SCHEME, hiredis)
    } else {
        (target, hiredis)
    }
}

/// Re-encodes a decoded query value for the emitted query string.
fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `db` must already be in its encoded form.
fn connection_url(scheme: &str, netloc: &str, path: &str, db: Option<&str>) -> String {
    let netloc = if netloc.is_empty() { EMPTY_NETLOC } else { netloc };
    let mut out = format!("{scheme}://{netloc}");
    if !path.is_empty() && !path.starts_with('/') {
        out.push('/');
    }
    out.push_str(path);
    if let Some(db) = db.filter(|d| !d.is_empty()) {
        out.push_str("?db=");
        out.push_str(db);
    }
    out
}
