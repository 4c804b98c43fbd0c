//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so every value here can come
//! from either the process environment or that file.

use crate::services::seed::SeedConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SESSION_TTL_DAYS: i32 = 30;
pub const DEFAULT_SITE_HOSTNAME: &str = "https://concertjournal.de";
pub const DEFAULT_SITEMAP_ROUTES: &[&str] = &["/", "/sign-in", "/your-journal"];
pub const DEFAULT_SITEMAP_EXCLUDE: &[&str] = &["/secret-page"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Public site settings used to build the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub hostname: String,
    pub routes: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_SITE_HOSTNAME.to_owned(),
            routes: DEFAULT_SITEMAP_ROUTES.iter().map(|r| (*r).to_owned()).collect(),
            exclude: DEFAULT_SITEMAP_EXCLUDE.iter().map(|r| (*r).to_owned()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub cookie_secure: bool,
    pub session_ttl_days: i32,
    pub site: SiteConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `COOKIE_SECURE`: inferred from the `SITE_HOSTNAME` scheme when absent
    /// - `SESSION_TTL_DAYS`: default 30
    /// - `SITE_HOSTNAME`, `SITEMAP_ROUTES`, `SITEMAP_EXCLUDE`
    /// - `SEED_DEFAULT_ADMIN`, `SEED_ADMIN_EMAIL`, `SEED_ADMIN_PASSWORD`, `SEED_DEMO_EVENTS`
    ///
    /// # Errors
    ///
    /// Returns an error when `DATABASE_URL` is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let session_ttl_days = parse_or("SESSION_TTL_DAYS", lookup("SESSION_TTL_DAYS"), DEFAULT_SESSION_TTL_DAYS)?;

        let site_defaults = SiteConfig::default();
        let site = SiteConfig {
            hostname: lookup("SITE_HOSTNAME")
                .map(|h| h.trim().trim_end_matches('/').to_owned())
                .filter(|h| !h.is_empty())
                .unwrap_or(site_defaults.hostname),
            routes: lookup("SITEMAP_ROUTES").map_or(site_defaults.routes, |raw| split_list(&raw)),
            exclude: lookup("SITEMAP_EXCLUDE").map_or(site_defaults.exclude, |raw| split_list(&raw)),
        };

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => site.hostname.starts_with("https://"),
        };

        let seed_defaults = SeedConfig::default();
        let seed = SeedConfig {
            enabled: match lookup("SEED_DEFAULT_ADMIN") {
                Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "SEED_DEFAULT_ADMIN", value: raw })?,
                None => seed_defaults.enabled,
            },
            admin_email: lookup("SEED_ADMIN_EMAIL").unwrap_or(seed_defaults.admin_email),
            admin_password: lookup("SEED_ADMIN_PASSWORD").unwrap_or(seed_defaults.admin_password),
            demo_events: parse_or("SEED_DEMO_EVENTS", lookup("SEED_DEMO_EVENTS"), seed_defaults.demo_events)?,
        };

        Ok(Self { database_url, db_max_connections, port, cookie_secure, session_ttl_days, site, seed })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
