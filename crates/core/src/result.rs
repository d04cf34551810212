// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized compile/run results.
//!
//! Every section carries defined `output`/`error` strings. `exit_code` is
//! `None` when the backend did not report one; it is never defaulted to a
//! number.

use serde::{Deserialize, Serialize};

/// Output of a compile, run, or verifier stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageOutput {
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i64>,
}

crate::builder! {
    pub struct StageOutputBuilder => StageOutput {
        into { output: String = "", error: String = "" }
        option { exit_code: i64 = None }
    }
}

/// Output of the disassembly stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassemblyOutput {
    #[serde(default)]
    pub output: String,
    /// Disassembled listing
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i64>,
}

crate::builder! {
    pub struct DisassemblyOutputBuilder => DisassemblyOutput {
        into { output: String = "", code: String = "", error: String = "" }
        option { exit_code: i64 = None }
    }
}

/// Run section of a result.
///
/// Compile responses never carry one; run responses always do, even when the
/// backend omitted the section (it is then normalized to empty fields).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<StageOutput>", into = "Option<StageOutput>")]
pub enum RunSection {
    #[default]
    NotRequested,
    Ran(StageOutput),
}

impl RunSection {
    pub fn output(&self) -> Option<&StageOutput> {
        match self {
            RunSection::NotRequested => None,
            RunSection::Ran(stage) => Some(stage),
        }
    }

    pub fn is_not_requested(&self) -> bool {
        matches!(self, RunSection::NotRequested)
    }
}

impl From<Option<StageOutput>> for RunSection {
    fn from(stage: Option<StageOutput>) -> Self {
        match stage {
            Some(stage) => RunSection::Ran(stage),
            None => RunSection::NotRequested,
        }
    }
}

impl From<RunSection> for Option<StageOutput> {
    fn from(section: RunSection) -> Self {
        match section {
            RunSection::NotRequested => None,
            RunSection::Ran(stage) => Some(stage),
        }
    }
}

/// The normalized outcome of one compile or run request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    #[serde(default)]
    pub compile: StageOutput,
    #[serde(default)]
    pub disassembly: DisassemblyOutput,
    #[serde(default)]
    pub verifier: StageOutput,
    #[serde(default, skip_serializing_if = "RunSection::is_not_requested")]
    pub run: RunSection,
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
