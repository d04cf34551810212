// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pg compile` / `pg run` specs against a canned backend

use crate::prelude::*;

fn source_file(dir: &tempfile::TempDir, contents: &str) -> String {
    let path = dir.path().join("main.ets");
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

#[test]
fn compile_prints_output_and_passes() {
    let compiled = json!({ "compile": { "exitCode": 0, "output": "ok" } });
    let backend = Backend::start(&[("/compile", 200, compiled)]);
    let dir = tempfile::tempdir().unwrap();
    let file = source_file(&dir, "print(1)");

    cli().backend(&backend).args(&["compile", &file]).passes().stdout_eq("ok\n");

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].body["code"], "print(1)");
    assert_eq!(requests[0].body["options"], Value::Null);
}

#[test]
fn compile_without_output_prints_success_message() {
    let backend = Backend::start(&[("/compile", 200, json!({ "compile": { "exitCode": 0 } }))]);

    cli()
        .backend(&backend)
        .args(&["compile", "-"])
        .stdin("x")
        .passes()
        .stdout_has("Compile successful!");
}

#[test]
fn compile_diagnostic_goes_to_stderr_and_exits_one() {
    let backend = Backend::start(&[(
        "/compile",
        200,
        json!({ "compile": { "exitCode": 1, "error": "syntax error at 1:3" } }),
    )]);

    cli()
        .backend(&backend)
        .args(&["compile", "-"])
        .stdin("let =")
        .exits(1)
        .stdout_lacks("syntax error")
        .stderr_has("syntax error at 1:3");
}

#[test]
fn run_sends_options_and_toggles() {
    let backend = Backend::start(&[(
        "/run",
        200,
        json!({ "compile": { "exitCode": 0 }, "run": { "exitCode": 0, "output": "hello" } }),
    )]);

    cli()
        .backend(&backend)
        .args(&["run", "-", "-O", "--opt-level=2", "--runtime-verify", "--disassemble"])
        .stdin("print('hello')")
        .passes()
        .stdout_eq("Compile successful!\nhello\n");

    let body = &backend.requests()[0].body;
    assert_eq!(body["options"], json!({ "--opt-level": 2 }));
    assert_eq!(body["runtime_verify"], true);
    assert_eq!(body["disassemble"], true);
    assert_eq!(body["verifier"], false);
}

#[test]
fn json_output_includes_result_and_logs() {
    let compiled = json!({ "compile": { "exitCode": 0, "output": "ok" } });
    let backend = Backend::start(&[("/compile", 200, compiled)]);

    let output = cli().backend(&backend).args(&["compile", "-", "-o", "json"]).stdin("x").passes();

    let json = output.stdout_json();
    assert_eq!(json["result"]["compile"]["output"], "ok");
    assert_eq!(json["result"]["compile"]["exitCode"], 0);
    assert_eq!(json["logs"]["out"][0]["message"], "ok");
}

#[test]
fn backend_error_status_exits_two() {
    let backend = Backend::start(&[("/compile", 500, json!("compiler crashed"))]);

    cli()
        .backend(&backend)
        .args(&["compile", "-"])
        .stdin("x")
        .exits(2)
        .stderr_has("compiler crashed");
}

#[test]
fn unreachable_backend_exits_two() {
    let url = Backend::unreachable_url();

    cli()
        .args(&["--api-url", &url, "compile", "-"])
        .stdin("x")
        .exits(2)
        .stderr_has("compile failed");
}

#[test]
fn missing_source_file_exits_three() {
    cli().args(&["compile", "/no/such/file.ets"]).exits(3).stderr_has("cannot read");
}
