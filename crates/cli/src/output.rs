// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use pg_core::{Bucket, ExecutionResult, LogBuckets};
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON shape of a compile or run command
#[derive(Debug, Serialize)]
pub struct ExecutionReport<'a> {
    pub result: &'a ExecutionResult,
    pub logs: &'a LogBuckets,
}

/// Write the aggregate buckets: `out` entries to `out`, `err` entries to `err`.
pub fn write_logs(
    logs: &LogBuckets,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    for entry in logs.entries(Bucket::Out) {
        writeln!(out, "{}", entry.message)?;
    }
    for entry in logs.entries(Bucket::Err) {
        writeln!(err, "{}", crate::color::error(&entry.message))?;
    }
    Ok(())
}

/// Print the logs of a compile/run in the requested format.
pub fn print_execution(
    result: &ExecutionResult,
    logs: &LogBuckets,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            write_logs(logs, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())?;
        }
        OutputFormat::Json => print_json(&ExecutionReport { result, logs })?,
    }
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
