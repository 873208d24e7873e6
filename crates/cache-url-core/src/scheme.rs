//! Scheme registry: URL scheme token to cache backend identifier.
//!
//! The table is a closed enum rather than a runtime map, so every recognised
//! token has exactly one backend and one parsing family, checked by the
//! compiler through exhaustive matches.

use crate::error::CacheUrlError;

/// Parser class that selects the hiredis protocol parser in redis backends.
pub const HIREDIS_PARSER_CLASS: &str = "redis.connection.HiredisParser";

const DATABASE_CACHE: &str = "django.core.cache.backends.db.DatabaseCache";
const DUMMY_CACHE: &str = "django.core.cache.backends.dummy.DummyCache";
const FILE_BASED_CACHE: &str = "django.core.cache.backends.filebased.FileBasedCache";
const LOCMEM_CACHE: &str = "django.core.cache.backends.locmem.LocMemCache";
const PYLIBMC_CACHE: &str = "django.core.cache.backends.memcached.PyLibMCCache";
const DJANGO_PYLIBMC_CACHE: &str = "django_pylibmc.memcached.PyLibMCCache";
const MEMCACHED_CACHE: &str = "django.core.cache.backends.memcached.MemcachedCache";
const REDIS_CACHE: &str = "redis_cache.cache.RedisCache";
const DJANGO_REDIS_CACHE: &str = "django_redis.cache.RedisCache";

/// A registered cache URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Db,
    Dummy,
    File,
    Locmem,
    Memcached,
    DjangoPylibmc,
    Pymemcached,
    Redis,
    Hiredis,
    DjRedis,
    DjRedisUnix,
    DjRedisS,
    DjHiredis,
    DjHiredisUnix,
    DjHiredisS,
}

/// How the rest of the URL is interpreted once the scheme is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeFamily {
    /// Netloc is the location (possibly comma-separated), path is the key prefix.
    Simple,
    /// Path is the location.
    File,
    /// `host:port:db` or `unix:/socket:db` locations for the redis_cache backend.
    DirectRedis,
    /// Locations re-encoded as connection URLs for the django_redis backend.
    AdapterRedis,
}

impl Scheme {
    /// Every registered scheme, in registry order.
    pub const ALL: [Scheme; 15] = [
        Scheme::Db,
        Scheme::Dummy,
        Scheme::File,
        Scheme::Locmem,
        Scheme::Memcached,
        Scheme::DjangoPylibmc,
        Scheme::Pymemcached,
        Scheme::Redis,
        Scheme::Hiredis,
        Scheme::DjRedis,
        Scheme::DjRedisUnix,
        Scheme::DjRedisS,
        Scheme::DjHiredis,
        Scheme::DjHiredisUnix,
        Scheme::DjHiredisS,
    ];

    /// Looks up a scheme by its URL token. Tokens are matched exactly; callers
    /// pass the already lower-cased scheme.
    pub fn from_token(token: &str) -> Result<Self, CacheUrlError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.token() == token)
            .ok_or_else(|| CacheUrlError::UnknownScheme {
                scheme: token.to_string(),
            })
    }

    /// The literal scheme token as it appears in URLs.
    pub fn token(self) -> &'static str {
        match self {
            Scheme::Db => "db",
            Scheme::Dummy => "dummy",
            Scheme::File => "file",
            Scheme::Locmem => "locmem",
            Scheme::Memcached => "memcached",
            Scheme::DjangoPylibmc => "djangopylibmc",
            Scheme::Pymemcached => "pymemcached",
            Scheme::Redis => "redis",
            Scheme::Hiredis => "hiredis",
            Scheme::DjRedis => "djredis",
            Scheme::DjRedisUnix => "djredisunix",
            Scheme::DjRedisS => "djrediss",
            Scheme::DjHiredis => "djhiredis",
            Scheme::DjHiredisUnix => "djhiredisunix",
            Scheme::DjHiredisS => "djhirediss",
        }
    }

    /// Backend identifier written to `BACKEND`.
    pub fn backend(self) -> &'static str {
        match self {
            Scheme::Db => DATABASE_CACHE,
            Scheme::Dummy => DUMMY_CACHE,
            Scheme::File => FILE_BASED_CACHE,
            Scheme::Locmem => LOCMEM_CACHE,
            Scheme::Memcached => PYLIBMC_CACHE,
            Scheme::DjangoPylibmc => DJANGO_PYLIBMC_CACHE,
            Scheme::Pymemcached => MEMCACHED_CACHE,
            Scheme::Redis | Scheme::Hiredis => REDIS_CACHE,
            Scheme::DjRedis
            | Scheme::DjRedisUnix
            | Scheme::DjRedisS
            | Scheme::DjHiredis
            | Scheme::DjHiredisUnix
            | Scheme::DjHiredisS => DJANGO_REDIS_CACHE,
        }
    }

    pub fn family(self) -> SchemeFamily {
        match self {
            Scheme::Db
            | Scheme::Dummy
            | Scheme::Locmem
            | Scheme::Memcached
            | Scheme::DjangoPylibmc
            | Scheme::Pymemcached => SchemeFamily::Simple,
            Scheme::File => SchemeFamily::File,
            Scheme::Redis | Scheme::Hiredis => SchemeFamily::DirectRedis,
            Scheme::DjRedis
            | Scheme::DjRedisUnix
            | Scheme::DjRedisS
            | Scheme::DjHiredis
            | Scheme::DjHiredisUnix
            | Scheme::DjHiredisS => SchemeFamily::AdapterRedis,
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
