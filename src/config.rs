//! Build-time Configuration
//!
//! The dashboard is a static bundle, so its settings are baked in at build
//! time from environment variables and fall back to production defaults.

use log::LevelFilter;

/// Production API host
pub const DEFAULT_API_BASE: &str = "https://lampserver.uppolice.co.in";

/// localStorage key holding the bearer token issued at login
pub const TOKEN_STORAGE_KEY: &str = "ps_token";

/// Rows per dashboard page
pub const ITEMS_PER_PAGE: usize = 10;

/// Remote API location
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `ARMS_API_BASE` captured at compile time
    pub fn from_env() -> Self {
        Self::new(option_env!("ARMS_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

/// Console log level from `ARMS_LOG_LEVEL`, `info` when unset or invalid
pub fn log_level() -> LevelFilter {
    parse_level(option_env!("ARMS_LOG_LEVEL"))
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
