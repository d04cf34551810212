// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log classification of compile/run/disassembly sections.
//!
//! First matching rule wins:
//!
//! | exit code | output    | error     | entry                         |
//! |-----------|-----------|-----------|-------------------------------|
//! | `0`       | non-empty | any       | out, `output`                 |
//! | `0`       | empty     | any       | out, stage success message    |
//! | non-zero  | any       | non-empty | err, `error`                  |
//! | non-zero  | non-empty | empty     | err, `output`                 |
//! | otherwise |           |           | none                          |

use crate::log::{LogEntry, LogSource};
use crate::result::{DisassemblyOutput, ExecutionResult, StageOutput};

/// Stage that produced a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Compile,
    Run,
    Disassembly,
}

crate::simple_display! {
    Stage {
        Compile => "compile",
        Run => "run",
        Disassembly => "disassembly",
    }
}

impl Stage {
    /// Message for a successful stage that printed nothing
    pub fn success_message(self) -> &'static str {
        match self {
            Stage::Compile => "Compile successful!",
            Stage::Run => "Run successful!",
            Stage::Disassembly => "Disassembly successful!",
        }
    }

    pub fn out_source(self) -> LogSource {
        match self {
            Stage::Compile => LogSource::CompileOut,
            Stage::Run => LogSource::RunOut,
            Stage::Disassembly => LogSource::DisasmOut,
        }
    }

    pub fn err_source(self) -> LogSource {
        match self {
            Stage::Compile => LogSource::CompileErr,
            Stage::Run => LogSource::RunErr,
            Stage::Disassembly => LogSource::DisasmErr,
        }
    }
}

/// Fields the classifier reads from a section
pub trait StageReport {
    fn output(&self) -> &str;
    fn error(&self) -> &str;
    fn exit_code(&self) -> Option<i64>;
}

impl StageReport for StageOutput {
    fn output(&self) -> &str {
        &self.output
    }

    fn error(&self) -> &str {
        &self.error
    }

    fn exit_code(&self) -> Option<i64> {
        self.exit_code
    }
}

impl StageReport for DisassemblyOutput {
    fn output(&self) -> &str {
        &self.output
    }

    fn error(&self) -> &str {
        &self.error
    }

    fn exit_code(&self) -> Option<i64> {
        self.exit_code
    }
}

/// Classify one section into at most one log entry.
pub fn classify<R: StageReport + ?Sized>(section: Option<&R>, stage: Stage) -> Option<LogEntry> {
    let section = section?;
    let code = section.exit_code()?;
    let (output, error) = (section.output(), section.error());

    if code == 0 {
        let message = if output.is_empty() { stage.success_message() } else { output };
        return Some(LogEntry::new(stage.out_source(), message));
    }
    if !error.is_empty() {
        return Some(LogEntry::new(stage.err_source(), error));
    }
    if !output.is_empty() {
        return Some(LogEntry::new(stage.err_source(), output));
    }
    None
}

/// Classify the compile, run, and disassembly sections of a result, in that order.
pub fn classify_result(result: &ExecutionResult) -> Vec<LogEntry> {
    [
        classify(Some(&result.compile), Stage::Compile),
        classify(result.run.output(), Stage::Run),
        classify(Some(&result.disassembly), Stage::Disassembly),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
