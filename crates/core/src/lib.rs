// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pg-core: data model for the playground compile/run client

pub mod macros;

pub mod action;
pub mod classify;
pub mod log;
pub mod normalize;
pub mod options;
pub mod prefs;
pub mod request;
pub mod result;
pub mod syntax;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use action::ActionKind;
pub use classify::{classify, classify_result, Stage, StageReport};
pub use log::{Bucket, BucketSnapshot, LogBuckets, LogEntry, LogKind, LogSource};
pub use normalize::apply_defaults;
pub use options::{selected_options, CompileOption, OptionValue, PickedOptions};
pub use prefs::{PreferenceError, PreferenceKey, Preferences, Theme};
pub use request::{
    wire_options, CompileRequest, RunRequest, ShareRequest, ShareResponse, SharedSnippet,
};
pub use result::{DisassemblyOutput, ExecutionResult, RunSection, StageOutput};
pub use syntax::{SyntaxDefinition, SyntaxError, SyntaxNode};
