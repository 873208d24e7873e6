//! Cache URL parsing.
//!
//! Turns a connection string such as `redis://:pw@127.0.0.1:6379/0/prefix` or
//! `memcached://10.0.0.1:11211,10.0.0.2:11211` into a [`CacheConfig`] naming the
//! cache backend, its location, key prefix and options.

pub mod cache_config;
pub mod config;
pub mod error;
pub mod logging;
pub mod parse;
pub mod scheme;
pub mod url_model;

pub use cache_config::{CacheConfig, CacheOptions, Location};
pub use error::CacheUrlError;
pub use parse::parse;
pub use scheme::{Scheme, SchemeFamily, HIREDIS_PARSER_CLASS};
