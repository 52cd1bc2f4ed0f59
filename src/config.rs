/// Service configuration: required secrets from the environment and optional
/// run-time tuning from scraper.toml.
///
/// Secrets (API key, database URL) are fatal when missing — the service
/// cannot do any useful work without them. Tuning values all have defaults,
/// so a missing scraper.toml simply means stock behavior.

use serde::Deserialize;
use std::env;
use std::fs;

use crate::forecast::MissingTimestampPolicy;

// ---------------------------------------------------------------------------
// Secrets
// ---------------------------------------------------------------------------

/// Required credentials read from the process environment.
#[derive(Debug, Clone)]
pub struct Secrets {
    /// WillyWeather API key (path component of every forecast URL).
    pub api_key: String,
    /// Postgres connection string.
    pub database_url: String,
}

/// Configuration validation error.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingVar(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "{} environment variable not set.\n\n", name)?;
                write!(f, "  Required Setup:\n")?;
                write!(f, "  1. Copy .env.example to .env: cp .env.example .env\n")?;
                write!(f, "  2. Edit .env and set WILLY_WEATHER_API_KEY and DATABASE_URL\n")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Loads required secrets, reading .env first if present.
///
/// # Errors
/// `ConfigError::MissingVar` naming the first absent variable. Callers at
/// the process entry point treat this as fatal.
pub fn load_secrets() -> Result<Secrets, ConfigError> {
    dotenv::dotenv().ok();

    let api_key = env::var("WILLY_WEATHER_API_KEY")
        .map_err(|_| ConfigError::MissingVar("WILLY_WEATHER_API_KEY"))?;
    let database_url =
        env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

    Ok(Secrets { api_key, database_url })
}

// ---------------------------------------------------------------------------
// Tuning
// ---------------------------------------------------------------------------

const TUNING_PATH: &str = "scraper.toml";

/// Run-time tuning knobs, all optional, loaded from scraper.toml.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Hours between scheduled scrape runs.
    pub poll_interval_hours: u64,
    /// Seconds to wait between per-region API calls (rate-limit courtesy).
    pub request_delay_secs: u64,
    /// Forecast day count requested per region.
    pub forecast_days: u32,
    /// Per-request HTTP timeout in seconds.
    pub http_timeout_secs: u64,
    /// What to do when no entry in a list carries a usable timestamp.
    pub missing_timestamp_policy: MissingTimestampPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            poll_interval_hours: 6,
            request_delay_secs: 3,
            forecast_days: 2,
            http_timeout_secs: 30,
            missing_timestamp_policy: MissingTimestampPolicy::NoMatch,
        }
    }
}

/// Loads tuning from scraper.toml in the working directory, falling back to
/// defaults when the file is absent.
///
/// A present-but-malformed file is reported so a typo cannot silently revert
/// the service to stock behavior.
pub fn load_tuning() -> Result<Tuning, String> {
    match fs::read_to_string(TUNING_PATH) {
        Ok(contents) => parse_tuning(&contents),
        Err(_) => Ok(Tuning::default()),
    }
}

fn parse_tuning(contents: &str) -> Result<Tuning, String> {
    toml::from_str(contents).map_err(|e| format!("Failed to parse {}: {}", TUNING_PATH, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_defaults() {
        let tuning = Tuning::default();
        assert_eq!(tuning.poll_interval_hours, 6);
        assert_eq!(tuning.request_delay_secs, 3);
        assert_eq!(tuning.forecast_days, 2);
        assert_eq!(tuning.http_timeout_secs, 30);
        assert_eq!(tuning.missing_timestamp_policy, MissingTimestampPolicy::NoMatch);
    }

    #[test]
    fn test_parse_tuning_partial_file_keeps_other_defaults() {
        let tuning = parse_tuning("poll_interval_hours = 12\n").expect("should parse");
        assert_eq!(tuning.poll_interval_hours, 12);
        assert_eq!(tuning.request_delay_secs, 3);
    }

    #[test]
    fn test_parse_tuning_policy_values() {
        let tuning = parse_tuning("missing_timestamp_policy = \"positional\"\n").expect("should parse");
        assert_eq!(tuning.missing_timestamp_policy, MissingTimestampPolicy::Positional);

        let tuning = parse_tuning("missing_timestamp_policy = \"no-match\"\n").expect("should parse");
        assert_eq!(tuning.missing_timestamp_policy, MissingTimestampPolicy::NoMatch);
    }

    #[test]
    fn test_parse_tuning_rejects_malformed_file() {
        assert!(parse_tuning("poll_interval_hours = \"six\"\n").is_err());
        assert!(parse_tuning("missing_timestamp_policy = \"quartiles\"\n").is_err());
    }

    #[test]
    fn test_config_error_names_variable() {
        let msg = ConfigError::MissingVar("WILLY_WEATHER_API_KEY").to_string();
        assert!(msg.contains("WILLY_WEATHER_API_KEY"));
    }
}
