//! URL decomposition for cache connection strings.
//!
//! Splits a cache URL into scheme, network location, path, query and fragment,
//! and offers the small helpers the per-scheme extractors need (user-info,
//! host lists, path segments, query parameters).

mod authority;
mod query;
mod split;

pub use authority::{hosts, password, split_userinfo};
pub use query::QueryParams;
pub use split::split_url;

/// Components of a cache URL, borrowed from the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Lower-cased scheme token.
    pub scheme: String,
    pub netloc: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

impl<'a> UrlParts<'a> {
    /// Non-empty `/`-separated path segments.
    pub fn path_segments(&self) -> Vec<&'a str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    pub fn query_params(&self) -> QueryParams {
        QueryParams::parse(self.query)
    }
}
