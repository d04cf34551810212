// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Proptest strategies shared by this crate's tests and downstream crates.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// A raw field value as a backend might send it: missing, `null`, or a string.
fn raw_text() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        Just(Some(json!(""))),
        "[a-z ]{1,12}".prop_map(|s| Some(Value::String(s))),
    ]
}

fn raw_exit_code() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        Just(Some(json!("1"))),
        (-3i64..4).prop_map(|c| Some(json!(c))),
    ]
}

/// A possibly partial raw compile/run/verifier section
pub fn raw_stage() -> impl Strategy<Value = Value> {
    (raw_text(), raw_text(), raw_exit_code(), any::<bool>()).prop_map(
        |(output, error, exit_code, extra)| {
            let mut map = Map::new();
            for (key, value) in [("output", output), ("error", error), ("exitCode", exit_code)] {
                if let Some(value) = value {
                    map.insert(key.to_string(), value);
                }
            }
            if extra {
                map.insert("stdout".to_string(), json!("ignored"));
            }
            Value::Object(map)
        },
    )
}

/// A possibly partial raw disassembly section
pub fn raw_disassembly() -> impl Strategy<Value = Value> {
    (raw_stage(), raw_text()).prop_map(|(mut stage, code)| {
        if let (Value::Object(map), Some(code)) = (&mut stage, code) {
            map.insert("code".to_string(), code);
        }
        stage
    })
}

/// `(exit_code, output, error)` triples covering every classifier rule
pub fn stage_fields() -> impl Strategy<Value = (Option<i64>, String, String)> {
    (
        prop_oneof![Just(None), (-2i64..3).prop_map(Some)],
        prop_oneof![Just(String::new()), "[a-z]{1,8}"],
        prop_oneof![Just(String::new()), "[a-z]{1,8}"],
    )
}
