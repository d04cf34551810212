// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted user preferences.
//!
//! Stored as a flat JSON object under fixed keys: `theme`, `primaryColor`,
//! `clearLogsEachRun`, and `apiUrl`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors reading, writing, or editing preferences
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preferences: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown preference key: {0}")]
    UnknownKey(String),
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue { key: PreferenceKey, value: String, expected: &'static str },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

crate::simple_display! {
    Theme {
        Light => "light",
        Dark => "dark",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Theme,
    PrimaryColor,
    ClearLogsEachRun,
    ApiUrl,
}

crate::simple_display! {
    PreferenceKey {
        Theme => "theme",
        PrimaryColor => "primaryColor",
        ClearLogsEachRun => "clearLogsEachRun",
        ApiUrl => "apiUrl",
    }
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 4] = [
        PreferenceKey::Theme,
        PreferenceKey::PrimaryColor,
        PreferenceKey::ClearLogsEachRun,
        PreferenceKey::ApiUrl,
    ];
}

impl FromStr for PreferenceKey {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreferenceKey::ALL
            .into_iter()
            .find(|k| k.to_string() == s)
            .ok_or_else(|| PreferenceError::UnknownKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub clear_logs_each_run: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Preferences {
    /// Stringified value of a key; unset keys read as the empty string.
    pub fn get(&self, key: PreferenceKey) -> String {
        match key {
            PreferenceKey::Theme => self.theme.to_string(),
            PreferenceKey::PrimaryColor => self.primary_color.clone().unwrap_or_default(),
            PreferenceKey::ClearLogsEachRun => self.clear_logs_each_run.to_string(),
            PreferenceKey::ApiUrl => self.api_url.clone().unwrap_or_default(),
        }
    }

    /// Set a key from its string form. An empty string unsets free-form keys.
    pub fn set(&mut self, key: PreferenceKey, value: &str) -> Result<(), PreferenceError> {
        let invalid = |expected| PreferenceError::InvalidValue {
            key,
            value: value.to_string(),
            expected,
        };
        match key {
            PreferenceKey::Theme => {
                self.theme = match value {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    _ => return Err(invalid("light|dark")),
                };
            }
            PreferenceKey::PrimaryColor => {
                self.primary_color = non_empty(value);
            }
            PreferenceKey::ClearLogsEachRun => {
                self.clear_logs_each_run = value.parse().map_err(|_| invalid("true|false"))?;
            }
            PreferenceKey::ApiUrl => {
                self.api_url = non_empty(value);
            }
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
