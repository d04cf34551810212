// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request and response bodies for the playground backend.

use serde::{Deserialize, Serialize};

use crate::options::PickedOptions;

/// Body of `POST /compile`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompileRequest {
    pub code: String,
    /// `None` lets the backend apply its defaults
    pub options: Option<PickedOptions>,
    pub disassemble: bool,
    pub verifier: bool,
}

impl CompileRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), ..Self::default() }
    }

    crate::setters! {
        set { disassemble: bool, verifier: bool }
        option { options: PickedOptions }
    }
}

/// Body of `POST /run`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunRequest {
    #[serde(flatten)]
    pub compile: CompileRequest,
    pub runtime_verify: bool,
}

impl RunRequest {
    pub fn new(compile: CompileRequest) -> Self {
        Self { compile, runtime_verify: false }
    }

    crate::setters! {
        set { runtime_verify: bool }
    }
}

/// Body of `POST /share`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShareRequest {
    pub code: String,
    pub options: Option<PickedOptions>,
}

/// Response of `POST /share`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareResponse {
    #[serde(default)]
    pub uuid: String,
}

/// Response of `GET /share/:uuid`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedSnippet {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub options: Option<PickedOptions>,
}

/// Picked options as sent on the wire: an empty mapping becomes `None`.
pub fn wire_options(picked: &PickedOptions) -> Option<PickedOptions> {
    if picked.is_empty() {
        None
    } else {
        Some(picked.clone())
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
