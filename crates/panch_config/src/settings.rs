//! Layered configuration: compiled-in defaults, overridden by an optional
//! TOML file, overridden in turn by environment variables. Each layer only
//! supplies what the one below it didn't.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use panch_vedic::AyanamshaSystem;

use crate::error::ConfigError;

/// Concurrency bound for the batch executor's semaphore (spec: sized
/// around a ~50-80 MiB per-task footprint against a 512 MiB budget).
const DEFAULT_BATCH_CONCURRENCY: usize = 6;
/// Process-local TTL store lifetime, in seconds.
const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;
/// Default path searched for a TOML config file, relative to the
/// process's working directory.
const DEFAULT_CONFIG_FILE: &str = "panch.toml";
const DEFAULT_AYANAMSA: AyanamshaSystem = AyanamshaSystem::Lahiri;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct FileSettings {
    database_url: Option<String>,
    swiss_ephe_path: Option<PathBuf>,
    cache_ttl_seconds: Option<u64>,
    batch_concurrency: Option<usize>,
    default_ayanamsa: Option<String>,
}

/// Fully-resolved process configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Connection string for the persistent cache store. `None` disables
    /// the persistent tier; the in-memory TTL store still works.
    pub database_url: Option<String>,
    /// Override for the ephemeris kernel search path (mirrors the
    /// `SWISS_EPHE_PATH` variable the ephemeris adapter reads directly;
    /// surfaced here too so operators have one place to look).
    pub swiss_ephe_path: Option<PathBuf>,
    /// TTL, in seconds, for the in-memory month-record cache.
    pub cache_ttl_seconds: u64,
    /// Maximum concurrent month computations in the batch executor.
    pub batch_concurrency: usize,
    /// Ayanamsa used when a caller doesn't specify one explicitly.
    pub default_ayanamsa: AyanamshaSystem,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: None,
            swiss_ephe_path: None,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
            default_ayanamsa: DEFAULT_AYANAMSA,
        }
    }
}

impl Settings {
    /// Resolve settings from (in increasing priority): compiled-in
    /// defaults, a `panch.toml` file (or the path named by `PANCH_CONFIG`)
    /// if one exists, then environment variables.
    pub fn resolve() -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(file) = load_file_settings()? {
            if file.database_url.is_some() {
                settings.database_url = file.database_url;
            }
            if file.swiss_ephe_path.is_some() {
                settings.swiss_ephe_path = file.swiss_ephe_path;
            }
            if let Some(ttl) = file.cache_ttl_seconds {
                settings.cache_ttl_seconds = ttl;
            }
            if let Some(n) = file.batch_concurrency {
                settings.batch_concurrency = n;
            }
            if let Some(token) = &file.default_ayanamsa {
                settings.default_ayanamsa = AyanamshaSystem::from_token(token)
                    .ok_or_else(|| ConfigError::InvalidEnvValue {
                        var: "default_ayanamsa (panch.toml)",
                        value: token.clone(),
                    })?;
            }
        }

        apply_env_overrides(&mut settings)?;
        Ok(settings)
    }

    /// Render as a JSON object, for diagnostic logging at startup.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("Settings serialization is infallible")
    }
}

fn config_file_path() -> PathBuf {
    env::var("PANCH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn load_file_settings() -> Result<Option<FileSettings>, ConfigError> {
    let path = config_file_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return Ok(None);
    };
    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::TomlParse(e.to_string()))
}

fn apply_env_overrides(settings: &mut Settings) -> Result<(), ConfigError> {
    if let Ok(v) = env::var("DATABASE_URL") {
        settings.database_url = Some(v);
    }
    if let Ok(v) = env::var("SWISS_EPHE_PATH") {
        settings.swiss_ephe_path = Some(PathBuf::from(v));
    }
    if let Ok(v) = env::var("PANCH_CACHE_TTL_SECONDS") {
        settings.cache_ttl_seconds = v.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: "PANCH_CACHE_TTL_SECONDS",
            value: v,
        })?;
    }
    if let Ok(v) = env::var("PANCH_BATCH_CONCURRENCY") {
        settings.batch_concurrency = v.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: "PANCH_BATCH_CONCURRENCY",
            value: v,
        })?;
    }
    if let Ok(v) = env::var("PANCH_DEFAULT_AYANAMSA") {
        settings.default_ayanamsa = AyanamshaSystem::from_token(&v).ok_or_else(|| {
            ConfigError::InvalidEnvValue { var: "PANCH_DEFAULT_AYANAMSA", value: v }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let s = Settings::default();
        assert_eq!(s.cache_ttl_seconds, DEFAULT_CACHE_TTL_SECONDS);
        assert_eq!(s.batch_concurrency, DEFAULT_BATCH_CONCURRENCY);
        assert!(s.database_url.is_none());
        assert_eq!(s.default_ayanamsa, AyanamshaSystem::Lahiri);
    }

    #[test]
    fn file_settings_accept_an_ayanamsa_token() {
        let parsed: FileSettings = toml::from_str(r#"default_ayanamsa = "raman""#).unwrap();
        assert_eq!(parsed.default_ayanamsa.as_deref(), Some("raman"));
    }

    #[test]
    fn file_settings_deserialize_with_missing_fields() {
        let parsed: FileSettings = toml::from_str("cache_ttl_seconds = 120").unwrap();
        assert_eq!(parsed.cache_ttl_seconds, Some(120));
        assert!(parsed.database_url.is_none());
    }

    #[test]
    fn to_json_includes_batch_concurrency() {
        let s = Settings::default();
        assert!(s.to_json().contains("batch_concurrency"));
    }

    #[test]
    fn empty_file_settings_parse_to_all_none() {
        let parsed: FileSettings = toml::from_str("").unwrap();
        assert!(parsed.database_url.is_none());
        assert!(parsed.swiss_ephe_path.is_none());
        assert!(parsed.cache_ttl_seconds.is_none());
        assert!(parsed.batch_concurrency.is_none());
    }
}
