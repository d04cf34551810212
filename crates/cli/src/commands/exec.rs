// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pg compile` and `pg run`

use anyhow::Result;
use clap::Args;
use pg_adapters::ApiTransport;
use pg_core::{Bucket, ExecutionResult, LogBuckets, Preferences};
use pg_engine::{Actions, Settings};

use super::{Context, SourceArgs};
use crate::exit_error::ExitError;
use crate::output::print_execution;

#[derive(Args, Debug)]
pub struct CompileArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Request disassembly of the compiled program
    #[arg(long)]
    pub disassemble: bool,

    /// Run the bytecode verifier
    #[arg(long)]
    pub verifier: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub compile: CompileArgs,

    /// Verify at runtime
    #[arg(long)]
    pub runtime_verify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Compile,
    Run,
}

/// Result of one compile or run together with the session logs
#[derive(Debug)]
pub struct Outcome {
    pub result: ExecutionResult,
    pub logs: LogBuckets,
}

impl Outcome {
    /// Diagnostics in the `err` bucket fail the command.
    pub fn has_diagnostics(&self) -> bool {
        self.logs.len(Bucket::Err) > 0
    }
}

impl CompileArgs {
    pub fn settings(&self, prefs: &Preferences) -> Settings {
        Settings {
            disassemble: self.disassemble,
            verifier: self.verifier,
            ..Settings::from_preferences(prefs)
        }
    }
}

pub async fn handle_compile(args: CompileArgs, ctx: &Context) -> Result<()> {
    handle(&args, false, Execution::Compile, ctx).await
}

pub async fn handle_run(args: RunArgs, ctx: &Context) -> Result<()> {
    handle(&args.compile, args.runtime_verify, Execution::Run, ctx).await
}

async fn handle(
    args: &CompileArgs,
    runtime_verify: bool,
    execution: Execution,
    ctx: &Context,
) -> Result<()> {
    let source = args.source.read()?;
    let prefs = ctx.preferences()?;
    let settings = Settings { runtime_verify, ..args.settings(&prefs) };

    let actions = ctx.actions(&prefs, settings)?;
    actions.set_source(source);
    actions.pick_options(args.source.picked());

    let outcome = execute(&actions, execution).await?;
    print_execution(&outcome.result, &outcome.logs, ctx.format)?;
    if outcome.has_diagnostics() {
        return Err(ExitError::diagnostics().into());
    }
    Ok(())
}

pub async fn execute<T: ApiTransport>(
    actions: &Actions<T>,
    execution: Execution,
) -> Result<Outcome, ExitError> {
    let result = match execution {
        Execution::Compile => actions.compile().await?,
        Execution::Run => actions.run().await?,
    };
    let logs = actions.store().read(|s| s.logs.clone());
    Ok(Outcome { result, logs })
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
