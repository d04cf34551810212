// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compile option catalogue and picked-option mapping.
//!
//! Selections are held as strings because selection widgets compare string
//! values; they are mapped back to typed values when flattened.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A compiler flag value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl OptionValue {
    /// Parse a command-line value: `true`/`false`, then integers and floats,
    /// then plain text.
    ///
    /// A number is only produced when it prints back as the same text, so
    /// `007`, `1.50` or `1e3` reach the backend unchanged.
    pub fn parse(s: &str) -> Self {
        match s {
            "true" => return OptionValue::Bool(true),
            "false" => return OptionValue::Bool(false),
            _ => {}
        }
        let number = match s.parse::<i64>() {
            Ok(n) => Some(serde_json::Number::from(n)),
            Err(_) => s.parse::<f64>().ok().and_then(serde_json::Number::from_f64),
        };
        match number {
            Some(n) if n.to_string() == s => OptionValue::Number(n),
            _ => OptionValue::Text(s.to_string()),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n.into())
    }
}

/// Flag → value mapping sent with compile/run/share requests
pub type PickedOptions = IndexMap<String, OptionValue>;

/// One entry of the backend's compile option catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOption {
    pub flag: String,
    #[serde(default)]
    pub values: Vec<OptionValue>,
    pub default: OptionValue,
    /// Stringified selected value
    #[serde(default)]
    pub is_selected: String,
}

impl CompileOption {
    pub fn new(flag: impl Into<String>, values: Vec<OptionValue>, default: OptionValue) -> Self {
        let is_selected = default.to_string();
        Self { flag: flag.into(), values, default, is_selected }
    }

    /// Decode a catalogue entry, selecting its default.
    pub fn from_raw(raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut option: CompileOption = serde_json::from_value(raw)?;
        option.is_selected = option.default.to_string();
        Ok(option)
    }

    pub fn select(&mut self, value: &str) {
        self.is_selected = value.to_string();
    }

    /// Typed value of the current selection.
    ///
    /// Falls back to the default when it matches, and to plain text when no
    /// known value stringifies to the selection.
    pub fn selected_value(&self) -> OptionValue {
        self.values
            .iter()
            .chain(std::iter::once(&self.default))
            .find(|v| v.to_string() == self.is_selected)
            .cloned()
            .unwrap_or_else(|| OptionValue::Text(self.is_selected.clone()))
    }
}

/// Flatten a catalogue into the picked-options mapping, in catalogue order.
pub fn selected_options(options: &[CompileOption]) -> PickedOptions {
    options.iter().map(|o| (o.flag.clone(), o.selected_value())).collect()
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
