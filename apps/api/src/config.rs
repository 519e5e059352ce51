use anyhow::{anyhow, Context, Result};

use crate::skills::SkillMatchMode;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_JOB_SOURCE_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Listings endpoint. Job search answers 503 when unset.
    pub job_source_url: Option<String>,
    pub job_source_timeout_secs: u64,
    pub skill_match_mode: SkillMatchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            job_source_url: None,
            job_source_timeout_secs: DEFAULT_JOB_SOURCE_TIMEOUT_SECS,
            skill_match_mode: SkillMatchMode::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or("PORT", &lookup, defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", &lookup, defaults.max_upload_bytes)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            job_source_url: lookup("JOB_SOURCE_URL").filter(|url| !url.trim().is_empty()),
            job_source_timeout_secs: parse_or(
                "JOB_SOURCE_TIMEOUT_SECS",
                &lookup,
                defaults.job_source_timeout_secs,
            )
            .context("JOB_SOURCE_TIMEOUT_SECS must be a whole number of seconds")?,
            skill_match_mode: match lookup("SKILL_MATCH_MODE") {
                Some(raw) => raw
                    .parse::<SkillMatchMode>()
                    .map_err(|e| anyhow!(e))
                    .context("SKILL_MATCH_MODE is invalid")?,
                None => defaults.skill_match_mode,
            },
        })
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("'{raw}' is not valid for {key}")),
        None => Ok(default),
    }
}
