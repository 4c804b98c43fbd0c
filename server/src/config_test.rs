use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "  On  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn database_url_is_required() {
    assert_eq!(AppConfig::from_lookup(lookup_from(&[])), Err(ConfigError::Missing("DATABASE_URL")));
    assert_eq!(
        AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])),
        Err(ConfigError::Missing("DATABASE_URL"))
    );
}

#[test]
fn defaults_apply_when_only_database_url_set() {
    let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/cj")])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.session_ttl_days, 30);
    assert_eq!(config.site, SiteConfig::default());
    assert_eq!(config.site.hostname, "https://concertjournal.de");
    assert!(config.cookie_secure, "https hostname implies secure cookies");
    assert_eq!(config.seed, SeedConfig::default());
}

#[test]
fn explicit_values_override_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://localhost/cj"),
        ("PORT", "8080"),
        ("SITE_HOSTNAME", "http://localhost:3000/"),
        ("SITEMAP_ROUTES", "/, /sign-in ,,/new-entry"),
        ("SITEMAP_EXCLUDE", ""),
        ("SEED_DEFAULT_ADMIN", "off"),
        ("SEED_DEMO_EVENTS", "3"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site.hostname, "http://localhost:3000");
    assert_eq!(config.site.routes, vec!["/", "/sign-in", "/new-entry"]);
    assert!(config.site.exclude.is_empty());
    assert!(!config.cookie_secure);
    assert!(!config.seed.enabled);
    assert_eq!(config.seed.demo_events, 3);
}

#[test]
fn cookie_secure_explicit_value_wins_over_scheme() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://localhost/cj"),
        ("COOKIE_SECURE", "false"),
    ]))
    .unwrap();
    assert!(!config.cookie_secure);
}

#[test]
fn invalid_port_is_reported_with_value() {
    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn invalid_seed_flag_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("SEED_DEFAULT_ADMIN", "sometimes")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SEED_DEFAULT_ADMIN", .. }));
}

#[test]
fn db_max_connections_defaults_and_overrides() {
    let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")])).unwrap();
    assert_eq!(config.db_max_connections, 5);

    let config =
        AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "12")])).unwrap();
    assert_eq!(config.db_max_connections, 12);
}

#[test]
fn invalid_db_max_connections_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "lots")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", value: "lots".to_owned() });
}
