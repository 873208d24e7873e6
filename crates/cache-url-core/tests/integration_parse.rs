//! Integration test: end-to-end parsing of every supported URL shape through the
//! public API, checked against the serialised configuration.

use cache_url::config::ToolConfig;
use cache_url::{parse, CacheConfig, CacheUrlError, Location, Scheme, HIREDIS_PARSER_CLASS};
use serde_json::json;

const REDIS_CACHE: &str = "redis_cache.cache.RedisCache";
const DJANGO_REDIS_CACHE: &str = "django_redis.cache.RedisCache";

fn to_json(url: &str) -> serde_json::Value {
    serde_json::to_value(parse(url).expect("parse")).expect("serialise")
}

#[test]
fn database_cache() {
    assert_eq!(
        to_json("db://super_caching_table"),
        json!({
            "BACKEND": "django.core.cache.backends.db.DatabaseCache",
            "LOCATION": "super_caching_table",
            "KEY_PREFIX": ""
        })
    );
}

#[test]
fn dummy_cache() {
    let cfg = parse("dummy://").unwrap();
    assert_eq!(cfg.backend, "django.core.cache.backends.dummy.DummyCache");
}

#[test]
fn file_cache() {
    assert_eq!(
        to_json("file:///herp"),
        json!({
            "BACKEND": "django.core.cache.backends.filebased.FileBasedCache",
            "LOCATION": "/herp"
        })
    );
}

#[test]
fn default_url_is_locmem() {
    let url = ToolConfig::default().resolve_url(|_| None);
    let cfg = parse(&url).unwrap();
    assert_eq!(cfg.backend, "django.core.cache.backends.locmem.LocMemCache");
}

#[test]
fn memcached_single_and_multiple() {
    let cfg = parse("memcached://127.0.0.1:11211/prefix").unwrap();
    assert_eq!(
        cfg.backend,
        "django.core.cache.backends.memcached.PyLibMCCache"
    );
    assert_eq!(cfg.location_str(), Some("127.0.0.1:11211"));
    assert_eq!(cfg.key_prefix.as_deref(), Some("prefix"));

    let cfg = parse("memcached://127.0.0.1:11211,192.168.0.100:11211/prefix").unwrap();
    assert_eq!(
        cfg.location,
        Some(Location::Multiple(vec![
            "127.0.0.1:11211".to_string(),
            "192.168.0.100:11211".to_string(),
        ]))
    );
    assert_eq!(cfg.key_prefix.as_deref(), Some("prefix"));
}

#[test]
fn memcached_variants_backends() {
    assert_eq!(
        parse("djangopylibmc://127.0.0.1:11211").unwrap().backend,
        "django_pylibmc.memcached.PyLibMCCache"
    );
    assert_eq!(
        parse("pymemcached://127.0.0.1:11211").unwrap().backend,
        "django.core.cache.backends.memcached.MemcachedCache"
    );
}

#[test]
fn redis_with_password() {
    assert_eq!(
        to_json("redis://:redispass@127.0.0.1:6379/0/prefix"),
        json!({
            "BACKEND": REDIS_CACHE,
            "LOCATION": "127.0.0.1:6379:0",
            "KEY_PREFIX": "prefix",
            "OPTIONS": {"PASSWORD": "redispass"}
        })
    );
}

#[test]
fn hiredis_network() {
    assert_eq!(
        to_json("hiredis://127.0.0.1:6379/0/prefix"),
        json!({
            "BACKEND": REDIS_CACHE,
            "LOCATION": "127.0.0.1:6379:0",
            "KEY_PREFIX": "prefix",
            "OPTIONS": {"PARSER_CLASS": HIREDIS_PARSER_CLASS}
        })
    );
}

#[test]
fn redis_socket_variants() {
    let cases = [
        (
            "redis://unix/path/to/socket/file.sock/1/prefix",
            "unix:/path/to/socket/file.sock:1",
            "prefix",
        ),
        (
            "redis://unix/path/to/socket/file.sock/1",
            "unix:/path/to/socket/file.sock:1",
            "",
        ),
        (
            "redis://unix/path/to/socket/file.sock/prefix",
            "unix:/path/to/socket/file.sock:0",
            "prefix",
        ),
        (
            "hiredis://unix/path/to/socket/file.sock/1",
            "unix:/path/to/socket/file.sock:1",
            "",
        ),
    ];
    for (url, location, prefix) in cases {
        let cfg = parse(url).unwrap();
        assert_eq!(cfg.backend, REDIS_CACHE, "{url}");
        assert_eq!(cfg.location_str(), Some(location), "{url}");
        assert_eq!(cfg.key_prefix.as_deref(), Some(prefix), "{url}");
    }
}

#[test]
fn django_redis_network_variants() {
    let cases = [
        ("djredis://127.0.0.1:6379/0/prefix", "redis://127.0.0.1:6379?db=0", false),
        ("djrediss://127.0.0.1:6379/0/prefix", "rediss://127.0.0.1:6379?db=0", false),
        ("djhiredis://127.0.0.1:6379/0/prefix", "redis://127.0.0.1:6379?db=0", true),
        ("djhirediss://127.0.0.1:6379/0/prefix", "rediss://127.0.0.1:6379?db=0", true),
    ];
    for (url, location, hiredis) in cases {
        let cfg = parse(url).unwrap();
        assert_eq!(cfg.backend, DJANGO_REDIS_CACHE, "{url}");
        assert_eq!(cfg.location_str(), Some(location), "{url}");
        assert_eq!(cfg.key_prefix.as_deref(), Some("prefix"), "{url}");
        assert_eq!(
            cfg.parser_class(),
            hiredis.then_some(HIREDIS_PARSER_CLASS),
            "{url}"
        );
    }
}

#[test]
fn django_redis_socket_variants() {
    let cases = [
        (
            "djredisunix:///path/to/socket/file.sock?db=1&prefix=prefix",
            "unix://@/path/to/socket/file.sock?db=1",
            "prefix",
        ),
        (
            "djredisunix:///path/to/socket/file.sock?db=1",
            "unix://@/path/to/socket/file.sock?db=1",
            "",
        ),
        (
            "djredisunix:///path/to/socket/file.sock?prefix=prefix",
            "unix://@/path/to/socket/file.sock?db=0",
            "prefix",
        ),
        (
            "djhiredisunix:///path/to/socket/file.sock?db=1",
            "unix://@/path/to/socket/file.sock?db=1",
            "",
        ),
        (
            "djhiredisunix:///path/to/socket/file.sock?prefix=prefix",
            "unix://@/path/to/socket/file.sock?db=0",
            "prefix",
        ),
    ];
    for (url, location, prefix) in cases {
        let cfg = parse(url).unwrap();
        assert_eq!(cfg.backend, DJANGO_REDIS_CACHE, "{url}");
        assert_eq!(cfg.location_str(), Some(location), "{url}");
        assert_eq!(cfg.key_prefix.as_deref(), Some(prefix), "{url}");
    }
    assert_eq!(
        parse("djhiredisunix:///path/to/socket/file.sock?db=1")
            .unwrap()
            .parser_class(),
        Some(HIREDIS_PARSER_CLASS)
    );
}

#[test]
fn parsing_is_idempotent() {
    for scheme in Scheme::ALL {
        let url = format!("{}://:pw@host:1234/1/prefix?db=2", scheme.token());
        let first: CacheConfig = parse(&url).unwrap();
        let second: CacheConfig = parse(&url).unwrap();
        assert_eq!(first, second, "{url}");
    }
}

#[test]
fn errors_name_the_offending_input() {
    let err = parse("bogus://x").unwrap_err();
    assert!(matches!(err, CacheUrlError::UnknownScheme { .. }));
    assert!(err.to_string().contains("bogus"));

    let err = parse("localhost:6379").unwrap_err();
    assert!(matches!(err, CacheUrlError::UnknownScheme { .. }));

    let err = parse("no scheme here").unwrap_err();
    assert!(matches!(err, CacheUrlError::MalformedUrl { .. }));
    assert!(err.to_string().contains("no scheme here"));
}

#[test]
fn toml_output_of_server_list() {
    let cfg = parse("memcached://a:11211,b:11211/p").unwrap();
    let rendered = toml::to_string(&cfg).unwrap();
    let back: CacheConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(back, cfg);
}
