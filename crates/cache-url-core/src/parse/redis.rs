//! `redis://` and `hiredis://` for the redis_cache backend.
//!
//! Network form: `redis://[user:password@]host:port/db/prefix...`
//! Socket form:  `redis://unix/path/to/redis.sock[/db][/prefix...]`

use crate::cache_config::{CacheConfig, CacheOptions};
use crate::scheme::{Scheme, HIREDIS_PARSER_CLASS};
use crate::url_model::{password, split_userinfo, UrlParts};

/// Netloc that switches to the unix socket form.
const UNIX_NETLOC: &str = "unix";

/// Database used when the URL names none.
const DEFAULT_DATABASE: &str = "0";

const SOCKET_SUFFIXES: [&str; 2] = [".sock", ".socket"];

pub(super) fn extract(scheme: Scheme, parts: &UrlParts<'_>) -> CacheConfig {
    let mut cfg = CacheConfig::new(scheme.backend());
    let mut options = CacheOptions::default();

    let (location, prefix) = if parts.netloc == UNIX_NETLOC {
        socket_location(parts)
    } else {
        let (userinfo, hostport) = split_userinfo(parts.netloc);
        options.password = userinfo.and_then(password).map(str::to_string);
        network_location(hostport, parts)
    };
    cfg.location = Some(location.into());
    cfg.key_prefix = Some(prefix);

    if scheme == Scheme::Hiredis {
        options.parser_class = Some(HIREDIS_PARSER_CLASS.to_string());
    }
    cfg.set_options(options);

    cfg
}

/// `host:port:db` plus the remaining segments as prefix.
fn network_location(hostport: &str, parts: &UrlParts<'_>) -> (String, String) {
    let segments = parts.path_segments();
    let database = segments.first().copied().unwrap_or(DEFAULT_DATABASE);
    let prefix = segments.get(1..).unwrap_or(&[]).join("/");
    (format!("{hostport}:{database}"), prefix)
}

/// `unix:/path/to.sock[:db]` plus the segments after the database as prefix.
fn socket_location(parts: &UrlParts<'_>) -> (String, String) {
    let segments = parts.path_segments();
    let marker = segments
        .iter()
        .position(|s| SOCKET_SUFFIXES.iter().any(|suffix| s.ends_with(suffix)));

    let (socket, database, prefix): (&[&str], Option<String>, &[&str]) = match marker {
        // No socket file extension: the whole path is the socket.
        None => (segments.as_slice(), None, &[][..]),
        Some(index) => {
            let (socket, rest) = segments.split_at(index + 1);
            match rest.split_first() {
                None => (socket, None, &[][..]),
                Some((first, tail)) => match database_index(first) {
                    Some(db) => (socket, Some(db), tail),
                    None => (socket, Some(DEFAULT_DATABASE.to_string()), rest),
                },
            }
        }
    };

    let mut location = format!("{UNIX_NETLOC}:/{}", socket.join("/"));
    if let Some(db) = database {
        location.push(':');
        location.push_str(&db);
    }
    (location, prefix.join("/"))
}

/// Normalised integer form of `segment` (`+007` → `7`, `-0` → `0`), or `None`
/// when it is not an optionally signed run of ASCII digits. Unbounded.
fn database_index(segment: &str) -> Option<String> {
    let (negative, digits) = match segment.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, segment.strip_prefix('+').unwrap_or(segment)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.trim_start_matches('0');
    Some(match (magnitude.is_empty(), negative) {
        (true, _) => DEFAULT_DATABASE.to_string(),
        (false, true) => format!("-{magnitude}"),
        (false, false) => magnitude.to_string(),
    })
}
