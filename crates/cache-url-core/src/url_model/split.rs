//! Generic `scheme://netloc/path?query#fragment` splitting.
//!
//! `url::Url` applies WHATWG host rules (single port, no comma-separated host
//! lists) that cache URLs routinely break, so the components are cut out by
//! hand here. Every registered scheme uses netloc syntax: a `//` right after
//! the colon always opens the network location.

use crate::error::CacheUrlError;

use super::UrlParts;

/// Splits `input` into its URL components without interpreting them.
pub fn split_url(input: &str) -> Result<UrlParts<'_>, CacheUrlError> {
    // Leading whitespace and control characters only; trailing ones belong to the path.
    let trimmed =
        input.trim_start_matches(|c: char| c.is_ascii_whitespace() || c.is_ascii_control());
    if trimmed.is_empty() {
        return Err(CacheUrlError::malformed(input, "empty URL"));
    }

    let (scheme, rest) = trimmed
        .split_once(':')
        .ok_or_else(|| CacheUrlError::malformed(input, "missing scheme"))?;
    if !is_valid_scheme(scheme) {
        return Err(CacheUrlError::malformed(input, "invalid scheme"));
    }

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(|c: char| matches!(c, '/' | '?' | '#')).unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    };
    if netloc.contains('[') != netloc.contains(']') {
        return Err(CacheUrlError::malformed(input, "unbalanced IPv6 brackets"));
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    Ok(UrlParts {
        scheme: scheme.to_ascii_lowercase(),
        netloc,
        path,
        query,
        fragment,
    })
}

/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let p = split_url("redis://:pw@127.0.0.1:6379/0/prefix?x=1#frag").unwrap();
        assert_eq!(p.scheme, "redis");
        assert_eq!(p.netloc, ":pw@127.0.0.1:6379");
        assert_eq!(p.path, "/0/prefix");
        assert_eq!(p.query, "x=1");
        assert_eq!(p.fragment, "frag");
    }

    #[test]
    fn comma_separated_hosts_stay_in_netloc() {
        let p = split_url("memcached://127.0.0.1:11211,192.168.0.100:11211/prefix").unwrap();
        assert_eq!(p.netloc, "127.0.0.1:11211,192.168.0.100:11211");
        assert_eq!(p.path, "/prefix");
    }

    #[test]
    fn empty_netloc() {
        let p = split_url("file:///herp").unwrap();
        assert_eq!(p.netloc, "");
        assert_eq!(p.path, "/herp");

        let p = split_url("locmem://").unwrap();
        assert_eq!(p.netloc, "");
        assert_eq!(p.path, "");
    }

    #[test]
    fn query_directly_after_netloc() {
        let p = split_url("djredis://host:6379?db=2").unwrap();
        assert_eq!(p.netloc, "host:6379");
        assert_eq!(p.path, "");
        assert_eq!(p.query, "db=2");
    }

    #[test]
    fn scheme_is_lowercased_and_leading_space_trimmed() {
        let p = split_url("  REDIS://localhost/0").unwrap();
        assert_eq!(p.scheme, "redis");
        assert_eq!(p.netloc, "localhost");
        assert_eq!(p.path, "/0");
    }

    #[test]
    fn trailing_space_stays_in_path() {
        let p = split_url("file:///herp ").unwrap();
        assert_eq!(p.path, "/herp ");
    }

    #[test]
    fn no_authority() {
        let p = split_url("file:/var/tmp/cache").unwrap();
        assert_eq!(p.netloc, "");
        assert_eq!(p.path, "/var/tmp/cache");
    }

    #[test]
    fn rejects_unsplittable_input() {
        assert!(matches!(
            split_url(""),
            Err(CacheUrlError::MalformedUrl { reason: "empty URL", .. })
        ));
        assert!(matches!(
            split_url("just-a-host"),
            Err(CacheUrlError::MalformedUrl { reason: "missing scheme", .. })
        ));
        assert!(matches!(
            split_url("1redis://x"),
            Err(CacheUrlError::MalformedUrl { reason: "invalid scheme", .. })
        ));
        assert!(matches!(
            split_url("://x"),
            Err(CacheUrlError::MalformedUrl { reason: "invalid scheme", .. })
        ));
        assert!(matches!(
            split_url("redis://[::1:6379/0"),
            Err(CacheUrlError::MalformedUrl {
                reason: "unbalanced IPv6 brackets",
                ..
            })
        ));
    }
}
