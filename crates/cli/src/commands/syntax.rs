// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pg syntax` — fetch and summarise the editor syntax definition.

use anyhow::Result;
use pg_core::{SyntaxDefinition, SyntaxNode};
use pg_engine::Settings;
use serde::Serialize;

use super::Context;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SyntaxSummary {
    pub keys: Vec<String>,
    pub patterns: usize,
    pub literals: usize,
}

impl SyntaxSummary {
    pub fn new(syntax: &SyntaxDefinition) -> Self {
        let keys = match syntax.root() {
            SyntaxNode::Map(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        };
        Self { keys, patterns: syntax.pattern_count(), literals: syntax.text_count() }
    }
}

pub async fn handle(ctx: &Context) -> Result<()> {
    let prefs = ctx.preferences()?;
    let actions = ctx.actions(&prefs, Settings::from_preferences(&prefs))?;
    actions.load_syntax().await.map_err(ExitError::from)?;
    let summary = actions.store().read(|s| s.syntax.as_ref().map(SyntaxSummary::new));
    let Some(summary) = summary else {
        return Err(ExitError::new(crate::exit_error::SERVICE, "backend returned no syntax").into());
    };

    match ctx.format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Text => {
            if !summary.keys.is_empty() {
                println!("keys:     {}", summary.keys.join(", "));
            }
            println!("patterns: {}", summary.patterns);
            println!("literals: {}", summary.literals);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
