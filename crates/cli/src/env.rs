// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use pg_core::Preferences;

use crate::exit_error::ExitError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Resolve backend URL: `--api-url` > PG_API_URL > prefs `apiUrl` > default
pub fn api_url(flag: Option<&str>, prefs: &Preferences) -> String {
    let url = flag
        .map(str::to_string)
        .or_else(|| std::env::var("PG_API_URL").ok().filter(|s| !s.is_empty()))
        .or_else(|| prefs.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}

/// Backend request timeout (default 30s, configurable via `PG_TIMEOUT_MS`)
pub fn request_timeout() -> Duration {
    std::env::var("PG_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(pg_adapters::http::DEFAULT_TIMEOUT)
}

/// Resolve config directory: PG_CONFIG_DIR > platform config dir/pg
pub fn config_dir() -> Result<PathBuf, ExitError> {
    if let Ok(dir) = std::env::var("PG_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join("pg"))
        .ok_or_else(|| ExitError::usage("cannot determine config directory; set PG_CONFIG_DIR"))
}

/// Log filter directive (default `warn`)
pub fn log_filter() -> String {
    std::env::var("PG_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "warn".to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
