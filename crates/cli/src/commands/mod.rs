// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod exec;
pub mod options;
pub mod prefs;
pub mod share;
pub mod syntax;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use pg_adapters::{ApiClient, FilePreferenceStore, HttpTransport, PreferenceStore};
use pg_core::{OptionValue, PickedOptions, Preferences};
use pg_engine::{Actions, Session, SessionStore, Settings};

use crate::env;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

/// Global flags shared by every command
pub struct Context {
    pub api_url: Option<String>,
    pub format: OutputFormat,
}

impl Context {
    pub fn preference_store(&self) -> Result<FilePreferenceStore, ExitError> {
        Ok(FilePreferenceStore::in_dir(&env::config_dir()?))
    }

    pub fn preferences(&self) -> Result<Preferences, ExitError> {
        self.preference_store()?
            .load()
            .map_err(|e| ExitError::usage(format!("cannot read preferences: {e}")))
    }

    /// Actions over a fresh session talking to the resolved backend.
    pub fn actions(
        &self,
        prefs: &Preferences,
        settings: Settings,
    ) -> Result<Actions<HttpTransport>, ExitError> {
        let url = env::api_url(self.api_url.as_deref(), prefs);
        tracing::debug!(api_url = %url, "using backend");
        let transport = HttpTransport::new(&url, env::request_timeout())
            .map_err(|e| ExitError::usage(e.to_string()))?;
        let store = SessionStore::new(Session::new(settings));
        Ok(Actions::new(ApiClient::new(transport), store))
    }
}

/// Source input and compile options
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Source file, or `-` for stdin
    pub file: PathBuf,

    /// Compile option as FLAG=VALUE (repeatable)
    #[arg(
        short = 'O',
        long = "option",
        value_name = "FLAG=VALUE",
        value_parser = parse_option,
        allow_hyphen_values = true
    )]
    pub options: Vec<(String, OptionValue)>,
}

impl SourceArgs {
    pub fn read(&self) -> Result<String, ExitError> {
        read_source(&self.file)
    }

    /// Options in command-line order; a repeated flag keeps its last value.
    pub fn picked(&self) -> PickedOptions {
        self.options.iter().cloned().collect()
    }
}

pub fn read_source(path: &Path) -> Result<String, ExitError> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| ExitError::usage(format!("cannot read stdin: {e}")))?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .map_err(|e| ExitError::usage(format!("cannot read {}: {}", path.display(), e)))
}

/// Parse `FLAG=VALUE`; the value is typed as bool, number, or text.
pub fn parse_option(s: &str) -> Result<(String, OptionValue), String> {
    let (flag, value) =
        s.split_once('=').ok_or_else(|| format!("expected FLAG=VALUE, got '{s}'"))?;
    if flag.is_empty() {
        return Err(format!("missing flag in '{s}'"));
    }
    Ok((flag.to_string(), OptionValue::parse(value)))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
