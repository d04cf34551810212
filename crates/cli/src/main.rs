// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `pg` — command-line client for the playground compile/run backend

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::exec::{CompileArgs, RunArgs};
use commands::prefs::PrefsArgs;
use commands::share::{FetchArgs, ShareArgs};
use commands::Context;
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "pg", version, about = "Compile and run code on a playground backend")]
#[command(styles = color::styles())]
struct Cli {
    /// Backend base URL (overrides PG_API_URL and the apiUrl preference)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Output format
    #[arg(short = 'o', long = "output", global = true, value_enum, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a source file and print its logs
    Compile(CompileArgs),
    /// Compile and run a source file
    Run(RunArgs),
    /// Share a source file and print its id
    Share(ShareArgs),
    /// Fetch a shared snippet
    Fetch(FetchArgs),
    /// List the compile option catalogue
    Options,
    /// Summarise the editor syntax definition
    Syntax,
    /// Read and write preferences
    Prefs(PrefsArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { exit_error::USAGE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("error: {e:#}");
                exit_error::USAGE
            }
        };
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = Context { api_url: cli.api_url, format: cli.output };
    match cli.command {
        Commands::Compile(args) => commands::exec::handle_compile(args, &ctx).await,
        Commands::Run(args) => commands::exec::handle_run(args, &ctx).await,
        Commands::Share(args) => commands::share::handle_share(args, &ctx).await,
        Commands::Fetch(args) => commands::share::handle_fetch(args, &ctx).await,
        Commands::Options => commands::options::handle(&ctx).await,
        Commands::Syntax => commands::syntax::handle(&ctx).await,
        Commands::Prefs(args) => commands::prefs::handle(args.command, &ctx),
    }
}

/// Diagnostics go to stderr so they never mix with program output.
fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
