// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pg options` — list the backend's compile option catalogue.

use anyhow::Result;
use pg_core::CompileOption;
use pg_engine::Settings;

use super::Context;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

pub async fn handle(ctx: &Context) -> Result<()> {
    let prefs = ctx.preferences()?;
    let actions = ctx.actions(&prefs, Settings::from_preferences(&prefs))?;
    actions.load_options().await.map_err(ExitError::from)?;
    let options = actions.store().read(|s| s.available_options.clone());

    match ctx.format {
        OutputFormat::Json => print_json(&options)?,
        OutputFormat::Text => {
            if options.is_empty() {
                println!("No compile options");
                return Ok(());
            }
            let width = options.iter().map(|o| o.flag.len()).max().unwrap_or(0);
            for option in &options {
                println!("{}", format_option(option, width));
            }
        }
    }
    Ok(())
}

/// One catalogue line: padded flag, accepted values, default.
pub fn format_option(option: &CompileOption, width: usize) -> String {
    let values = option.values.iter().map(ToString::to_string).collect::<Vec<_>>().join("|");
    let flag = format!("{:<width$}", option.flag);
    format!(
        "{}  {}  {}",
        color::header(&flag),
        color::literal(&values),
        color::muted(&format!("(default: {})", option.default))
    )
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
