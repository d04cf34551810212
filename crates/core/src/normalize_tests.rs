// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{raw_disassembly, raw_stage};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn empty_object_gets_template_fields_and_no_exit_code() {
    let out = apply_defaults(&json!({}), &template(STAGE_FIELDS));
    assert_eq!(Value::Object(out), json!({ "output": "", "error": "" }));
}

#[test]
fn empty_object_normalizes_to_unset_exit_code() {
    let stage = StageOutput::from_raw(&json!({}));
    assert_eq!(stage, StageOutput { output: String::new(), error: String::new(), exit_code: None });
}

#[yare::parameterized(
    missing        = { json!({ "output": "x" }),                     None },
    null           = { json!({ "exitCode": null }),                  None },
    zero           = { json!({ "exitCode": 0 }),                     Some(0) },
    nonzero        = { json!({ "exitCode": 139 }),                   Some(139) },
    negative       = { json!({ "exitCode": -1 }),                    Some(-1) },
    string_ignored = { json!({ "exitCode": "1" }),                   None },
    float_ignored  = { json!({ "exitCode": 1.5 }),                   None },
)]
fn exit_code_is_copied_only_when_integer(raw: Value, expected: Option<i64>) {
    assert_eq!(StageOutput::from_raw(&raw).exit_code, expected);
}

#[test]
fn null_fields_fall_back_to_template() {
    let stage = StageOutput::from_raw(&json!({ "output": null, "error": "e", "exitCode": 1 }));
    assert_eq!(stage.output, "");
    assert_eq!(stage.error, "e");
    assert_eq!(stage.exit_code, Some(1));
}

#[test]
fn non_string_values_are_stringified() {
    let stage = StageOutput::from_raw(&json!({ "output": 42, "error": false }));
    assert_eq!(stage.output, "42");
    assert_eq!(stage.error, "false");
}

#[test]
fn unknown_keys_are_dropped() {
    let out = apply_defaults(&json!({ "output": "a", "stdout": "b" }), &template(STAGE_FIELDS));
    assert!(!out.contains_key("stdout"));
}

#[test]
fn non_object_raw_yields_template() {
    let out = apply_defaults(&json!("oops"), &template(DISASSEMBLY_FIELDS));
    assert_eq!(Value::Object(out), json!({ "output": "", "code": "", "error": "" }));
}

#[test]
fn compile_response_normalizes_every_section() {
    let result = ExecutionResult::from_compile_response(&json!({
        "compile": { "output": "ok", "exitCode": 0 },
        "disassembly": { "code": "mov a, b" },
    }));
    assert_eq!(result.compile.output, "ok");
    assert_eq!(result.compile.exit_code, Some(0));
    assert_eq!(result.disassembly.code, "mov a, b");
    assert_eq!(result.disassembly.exit_code, None);
    assert_eq!(result.verifier, StageOutput::default());
    assert!(result.run.is_not_requested());
}

#[test]
fn run_response_always_has_run_section() {
    let result = ExecutionResult::from_run_response(&json!({}));
    assert_eq!(result.run, RunSection::Ran(StageOutput::default()));
}

#[test]
fn run_response_keeps_run_fields() {
    let result = ExecutionResult::from_run_response(&json!({
        "run": { "output": "trace", "error": "", "exitCode": 2 },
    }));
    let run = result.run.output().unwrap();
    assert_eq!(run.output, "trace");
    assert_eq!(run.exit_code, Some(2));
}

#[test]
fn empty_response_body_normalizes() {
    let result = ExecutionResult::from_compile_response(&Value::Null);
    assert_eq!(result, ExecutionResult::default());
}

proptest! {
    #[test]
    fn defaulting_is_idempotent(raw in raw_stage()) {
        let t = template(STAGE_FIELDS);
        let once = Value::Object(apply_defaults(&raw, &t));
        let twice = Value::Object(apply_defaults(&once, &t));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn defaulting_is_total(raw in raw_disassembly()) {
        let out = apply_defaults(&raw, &template(DISASSEMBLY_FIELDS));
        for field in DISASSEMBLY_FIELDS {
            let value = out.get(*field);
            prop_assert!(value.is_some_and(|v| !v.is_null()), "missing {}", field);
        }
        if let Some(code) = out.get(EXIT_CODE) {
            prop_assert!(code.as_i64().is_some());
        }
    }

    #[test]
    fn typed_normalization_is_idempotent(raw in raw_stage()) {
        let once = StageOutput::from_raw(&raw);
        let twice = StageOutput::from_raw(&serde_json::to_value(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn exit_code_never_defaults_to_zero(raw in raw_stage()) {
        let stage = StageOutput::from_raw(&raw);
        let sent = raw.get(EXIT_CODE).and_then(Value::as_i64);
        prop_assert_eq!(stage.exit_code, sent);
    }
}
