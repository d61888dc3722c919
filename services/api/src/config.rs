//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// Gemini's OpenAI-compatible endpoint.
pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// The fixed delays that simulate network and human latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// From an accepted swipe to the match being recorded.
    pub swipe_match_delay: Duration,
    /// From any swipe to the deck advancing. Never shorter than `swipe_match_delay`.
    pub swipe_settle_delay: Duration,
    /// From a sent message to the scripted reply.
    pub chat_reply_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            swipe_match_delay: Duration::from_millis(300),
            swipe_settle_delay: Duration::from_millis(300),
            chat_reply_delay: Duration::from_millis(2000),
        }
    }
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub allowed_origin: String,
    pub llm_api_key: Option<String>,
    pub llm_api_base: String,
    pub llm_model: String,
    pub timings: Timings,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Load Server Settings ---
        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        // --- Load the LLM Settings (the key is optional) ---
        let llm_api_key = std::env::var("LLM_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());
        let llm_api_base =
            std::env::var("LLM_API_BASE").unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string());
        let llm_model =
            std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string());

        // --- Load the Simulated Latencies ---
        let defaults = Timings::default();
        let swipe_match_delay = millis_var("SWIPE_MATCH_DELAY_MS", defaults.swipe_match_delay)?;
        let swipe_settle_delay =
            millis_var("SWIPE_SETTLE_DELAY_MS", defaults.swipe_settle_delay)?.max(swipe_match_delay);
        let chat_reply_delay = millis_var("CHAT_REPLY_DELAY_MS", defaults.chat_reply_delay)?;

        Ok(Self {
            bind_address,
            log_level,
            allowed_origin,
            llm_api_key,
            llm_api_base,
            llm_model,
            timings: Timings {
                swipe_match_delay,
                swipe_settle_delay,
                chat_reply_delay,
            },
        })
    }
}

fn millis_var(name: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
