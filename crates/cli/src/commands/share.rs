// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pg share` and `pg fetch`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pg_adapters::ApiTransport;
use pg_core::SharedSnippet;
use pg_engine::{Actions, Settings};

use super::{Context, SourceArgs};
use crate::color;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug)]
pub struct ShareArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Share id printed by `pg share`
    pub uuid: String,

    /// Write the shared source to FILE instead of stdout
    #[arg(long, value_name = "FILE")]
    pub write: Option<PathBuf>,
}

pub async fn handle_share(args: ShareArgs, ctx: &Context) -> Result<()> {
    let source = args.source.read()?;
    let prefs = ctx.preferences()?;
    let actions = ctx.actions(&prefs, Settings::from_preferences(&prefs))?;
    actions.set_source(source);
    actions.pick_options(args.source.picked());

    let uuid = actions.share().await.map_err(ExitError::from)?;
    match ctx.format {
        OutputFormat::Text => println!("{uuid}"),
        OutputFormat::Json => print_json(&serde_json::json!({ "uuid": uuid }))?,
    }
    Ok(())
}

pub async fn handle_fetch(args: FetchArgs, ctx: &Context) -> Result<()> {
    let prefs = ctx.preferences()?;
    let actions = ctx.actions(&prefs, Settings::from_preferences(&prefs))?;
    let snippet = fetch(&actions, &args.uuid).await?;

    if let Some(path) = &args.write {
        std::fs::write(path, &snippet.code)
            .map_err(|e| ExitError::usage(format!("cannot write {}: {}", path.display(), e)))?;
    }

    match ctx.format {
        OutputFormat::Json => print_json(&snippet)?,
        OutputFormat::Text => {
            if args.write.is_none() {
                print!("{}", snippet.code);
            }
            for (flag, value) in snippet.options.iter().flatten() {
                eprintln!("{} {}", color::header(flag), color::context(&value.to_string()));
            }
        }
    }
    Ok(())
}

/// Load a shared snippet into the session and return what was loaded.
pub async fn fetch<T: ApiTransport>(
    actions: &Actions<T>,
    uuid: &str,
) -> Result<SharedSnippet, ExitError> {
    actions.load_shared(uuid).await?;
    Ok(actions.store().read(|s| SharedSnippet {
        code: s.source.clone(),
        options: pg_core::wire_options(&s.picked_options),
    }))
}

#[cfg(test)]
#[path = "share_tests.rs"]
mod tests;
