// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pg prefs` specs

use crate::prelude::*;

#[test]
fn set_then_get_round_trips_through_config_dir() {
    let first = cli();
    let second = first.again();
    let config = first.config_dir().to_path_buf();
    // Holds the shared temp config dir alive after both invocations are consumed
    let _config_guard = first.again();

    first.args(&["prefs", "set", "theme", "dark"]).passes().stdout_eq("theme = dark\n");
    second.args(&["prefs", "get", "theme"]).passes().stdout_eq("theme = dark\n");

    let saved: Value =
        serde_json::from_str(&std::fs::read_to_string(config.join("prefs.json")).unwrap()).unwrap();
    assert_eq!(saved["theme"], "dark");
}

#[test]
fn list_as_json_has_every_key() {
    let output = cli().args(&["prefs", "list", "-o", "json"]).passes();
    let json = output.stdout_json();
    assert_eq!(json["theme"], "light");
    assert_eq!(json["clearLogsEachRun"], "false");
    assert_eq!(json["primaryColor"], "");
    assert_eq!(json["apiUrl"], "");
}

#[test]
fn unknown_key_exits_with_usage_code() {
    cli().args(&["prefs", "get", "fontSize"]).exits(3).stderr_has("fontSize");
}

#[test]
fn invalid_value_exits_with_usage_code() {
    cli().args(&["prefs", "set", "clearLogsEachRun", "maybe"]).exits(3);
}

#[test]
fn api_url_preference_is_used_for_requests() {
    let backend = Backend::start(&[(
        "/compile",
        200,
        json!({ "compile": { "exitCode": 0, "output": "from prefs" } }),
    )]);
    let first = cli();
    let second = first.again();

    first.args(&["prefs", "set", "apiUrl", &backend.url()]).passes();
    second.args(&["compile", "-"]).stdin("x").passes().stdout_has("from prefs");
}
