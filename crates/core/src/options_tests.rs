// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[yare::parameterized(
    bool_true  = { "true",  OptionValue::Bool(true) },
    bool_false = { "false", OptionValue::Bool(false) },
    integer    = { "3",     OptionValue::from(3i64) },
    negative   = { "-1",    OptionValue::from(-1i64) },
    text       = { "es2019", OptionValue::from("es2019") },
    empty      = { "",      OptionValue::from("") },
    leading_zero  = { "007",  OptionValue::from("007") },
    trailing_zero = { "1.50", OptionValue::from("1.50") },
    exponent      = { "1e3",  OptionValue::from("1e3") },
    plus_sign     = { "+5",   OptionValue::from("+5") },
    negative_zero = { "-0",   OptionValue::from("-0") },
    infinity      = { "inf",  OptionValue::from("inf") },
)]
fn parse_cases(input: &str, expected: OptionValue) {
    assert_eq!(OptionValue::parse(input), expected);
}

#[test]
fn parse_float() {
    let value = OptionValue::parse("0.5");
    assert_eq!(value.to_string(), "0.5");
    assert!(matches!(value, OptionValue::Number(_)));
}

#[test]
fn values_deserialize_untagged() {
    let values: Vec<OptionValue> = serde_json::from_value(json!([true, 2, "x"])).unwrap();
    assert_eq!(
        values,
        vec![OptionValue::Bool(true), OptionValue::from(2i64), OptionValue::from("x")]
    );
}

#[test]
fn from_raw_selects_stringified_default() {
    let option = CompileOption::from_raw(json!({
        "flag": "--opt-level",
        "values": [0, 1, 2],
        "default": 2,
    }))
    .unwrap();
    assert_eq!(option.is_selected, "2");
    assert_eq!(option.selected_value(), OptionValue::from(2i64));
}

#[test]
fn from_raw_rejects_missing_flag() {
    assert!(CompileOption::from_raw(json!({ "default": 1 })).is_err());
}

#[test]
fn select_maps_back_to_typed_value() {
    let mut option =
        CompileOption::new("--debug", vec![true.into(), false.into()], OptionValue::Bool(false));
    option.select("true");
    assert_eq!(option.is_selected, "true");
    assert_eq!(option.selected_value(), OptionValue::Bool(true));
}

#[test]
fn unknown_selection_falls_back_to_text() {
    let mut option = CompileOption::new("--target", vec!["x86".into()], "x86".into());
    option.select("arm64");
    assert_eq!(option.selected_value(), OptionValue::from("arm64"));
}

#[test]
fn selected_options_keeps_catalogue_order() {
    let mut level = CompileOption::new("--opt-level", vec![0i64.into(), 2i64.into()], 0i64.into());
    level.select("2");
    let debug = CompileOption::new("--debug", vec![], false.into());

    let picked = selected_options(&[level, debug]);
    let flags: Vec<_> = picked.keys().cloned().collect();
    assert_eq!(flags, vec!["--opt-level", "--debug"]);
    assert_eq!(picked["--opt-level"], OptionValue::from(2i64));
    assert_eq!(picked["--debug"], OptionValue::Bool(false));
}

#[test]
fn picked_options_serialize_as_object() {
    let mut picked = PickedOptions::new();
    picked.insert("a".to_string(), "1".into());
    picked.insert("b".to_string(), true.into());
    assert_eq!(serde_json::to_value(&picked).unwrap(), json!({ "a": "1", "b": true }));
}
