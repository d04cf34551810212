// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pg prefs` — read and write persisted preferences.

use anyhow::Result;
use clap::{Args, Subcommand};
use indexmap::IndexMap;
use pg_adapters::PreferenceStore;
use pg_core::PreferenceKey;

use super::Context;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommand,
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommand {
    /// Print one preference
    Get {
        /// theme, primaryColor, clearLogsEachRun, or apiUrl
        key: String,
    },
    /// Set one preference; an empty value unsets free-form keys
    Set { key: String, value: String },
    /// Print every preference
    List {},
}

pub fn handle(command: PrefsCommand, ctx: &Context) -> Result<()> {
    let store = ctx.preference_store()?;
    let values = execute(&store, command)?;
    match ctx.format {
        OutputFormat::Json => print_json(&values)?,
        OutputFormat::Text => {
            for (key, value) in &values {
                println!("{} = {}", color::header(key), value);
            }
        }
    }
    Ok(())
}

/// Apply a prefs command; returns the affected keys and their values.
pub fn execute(
    store: &impl PreferenceStore,
    command: PrefsCommand,
) -> Result<IndexMap<String, String>, ExitError> {
    let mut prefs = store.load().map_err(|e| ExitError::usage(e.to_string()))?;
    let keys = match command {
        PrefsCommand::Get { key } => vec![parse_key(&key)?],
        PrefsCommand::Set { key, value } => {
            let key = parse_key(&key)?;
            prefs.set(key, &value).map_err(|e| ExitError::usage(e.to_string()))?;
            store.save(&prefs).map_err(|e| ExitError::usage(e.to_string()))?;
            vec![key]
        }
        PrefsCommand::List {} => PreferenceKey::ALL.to_vec(),
    };
    Ok(keys.into_iter().map(|k| (k.to_string(), prefs.get(k))).collect())
}

fn parse_key(key: &str) -> Result<PreferenceKey, ExitError> {
    key.parse().map_err(|e: pg_core::PreferenceError| ExitError::usage(e.to_string()))
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
