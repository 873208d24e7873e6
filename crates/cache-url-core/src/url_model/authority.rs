//! Network location helpers: user-info, password, host lists.

/// Splits `netloc` into `(userinfo, hostport)` at the last `@`.
pub fn split_userinfo(netloc: &str) -> (Option<&str>, &str) {
    match netloc.rsplit_once('@') {
        Some((userinfo, hostport)) => (Some(userinfo), hostport),
        None => (None, netloc),
    }
}

/// Password part of a `user:password` user-info. A user-info without `:` or
/// with an empty password yields `None`.
pub fn password(userinfo: &str) -> Option<&str> {
    userinfo
        .split_once(':')
        .map(|(_, password)| password)
        .filter(|p| !p.is_empty())
}

/// Splits a comma-separated `host:port,host:port` list, preserving order.
pub fn hosts(netloc: &str) -> Vec<&str> {
    netloc.split(',').collect()
}
