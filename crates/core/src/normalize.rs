// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response normalization.
//!
//! Backend payloads may omit any field or send `null`. Each section is filled
//! from a field template: a raw value is used only when it is present and not
//! `null`, otherwise the template value stands in. `exitCode` is never part
//! of the defaulting; it is copied when the backend sent an integer and left
//! unset otherwise.

use serde_json::{Map, Value};

use crate::result::{DisassemblyOutput, ExecutionResult, RunSection, StageOutput};

pub const EXIT_CODE: &str = "exitCode";

/// Fields of a compile, run, or verifier section
pub const STAGE_FIELDS: &[&str] = &["output", "error"];

/// Fields of a disassembly section
pub const DISASSEMBLY_FIELDS: &[&str] = &["output", "code", "error"];

/// Build a template mapping each field to the empty string.
pub fn template(fields: &[&str]) -> Map<String, Value> {
    fields.iter().map(|f| (f.to_string(), Value::String(String::new()))).collect()
}

/// Fill `raw` from `template`.
///
/// Keys not named by the template are dropped. A non-object `raw` (including
/// `null`) yields the template itself.
pub fn apply_defaults(raw: &Value, template: &Map<String, Value>) -> Map<String, Value> {
    let present = |key: &str| raw.get(key).filter(|v| !v.is_null());

    let mut out = Map::with_capacity(template.len() + 1);
    for (key, default) in template {
        if key == EXIT_CODE {
            continue;
        }
        let value = present(key).cloned().unwrap_or_else(|| default.clone());
        out.insert(key.clone(), value);
    }
    if let Some(code) = present(EXIT_CODE).filter(|v| v.as_i64().is_some()) {
        out.insert(EXIT_CODE.to_string(), code.clone());
    }
    out
}

fn text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn exit_code(fields: &Map<String, Value>) -> Option<i64> {
    fields.get(EXIT_CODE).and_then(Value::as_i64)
}

impl StageOutput {
    /// Normalize a raw compile/run/verifier section.
    pub fn from_raw(raw: &Value) -> Self {
        let fields = apply_defaults(raw, &template(STAGE_FIELDS));
        Self {
            output: text(&fields, "output"),
            error: text(&fields, "error"),
            exit_code: exit_code(&fields),
        }
    }
}

impl DisassemblyOutput {
    /// Normalize a raw disassembly section.
    pub fn from_raw(raw: &Value) -> Self {
        let fields = apply_defaults(raw, &template(DISASSEMBLY_FIELDS));
        Self {
            output: text(&fields, "output"),
            code: text(&fields, "code"),
            error: text(&fields, "error"),
            exit_code: exit_code(&fields),
        }
    }
}

impl ExecutionResult {
    /// Normalize a `/compile` response body.
    pub fn from_compile_response(raw: &Value) -> Self {
        Self {
            compile: StageOutput::from_raw(section(raw, "compile")),
            disassembly: DisassemblyOutput::from_raw(section(raw, "disassembly")),
            verifier: StageOutput::from_raw(section(raw, "verifier")),
            run: RunSection::NotRequested,
        }
    }

    /// Normalize a `/run` response body.
    pub fn from_run_response(raw: &Value) -> Self {
        Self {
            run: RunSection::Ran(StageOutput::from_raw(section(raw, "run"))),
            ..Self::from_compile_response(raw)
        }
    }
}

static MISSING: Value = Value::Null;

fn section<'a>(raw: &'a Value, key: &str) -> &'a Value {
    raw.get(key).unwrap_or(&MISSING)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
