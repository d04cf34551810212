// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pg share`, `pg fetch`, `pg options`, `pg syntax` specs

use crate::prelude::*;

#[test]
fn share_prints_uuid() {
    let backend = Backend::start(&[("/share", 200, json!({ "uuid": "5f0c" }))]);

    cli().backend(&backend).args(&["share", "-"]).stdin("main()").passes().stdout_eq("5f0c\n");

    assert_eq!(backend.requests()[0].body, json!({ "code": "main()", "options": null }));
}

#[test]
fn fetch_writes_shared_code_to_file() {
    let backend =
        Backend::start(&[("/share/5f0c", 200, json!({ "code": "main()\n", "options": null }))]);
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("shared.ets");

    cli()
        .backend(&backend)
        .args(&["fetch", "5f0c", "--write", &target.display().to_string()])
        .passes()
        .stdout_eq("");

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "main()\n");
    assert_eq!(backend.requests()[0].method, "GET");
}

#[test]
fn fetch_unknown_id_exits_two() {
    let backend = Backend::start(&[]);

    cli().backend(&backend).args(&["fetch", "missing"]).exits(2).stderr_has("no such route");
}

#[test]
fn options_lists_catalogue() {
    let backend = Backend::start(&[(
        "/options",
        200,
        json!([{ "flag": "--opt-level", "values": [0, 1, 2], "default": 0 }]),
    )]);

    cli()
        .backend(&backend)
        .args(&["options"])
        .passes()
        .stdout_has("--opt-level")
        .stdout_has("0|1|2")
        .stdout_has("(default: 0)");
}

#[test]
fn syntax_summarises_definition() {
    let backend = Backend::start(&[(
        "/syntax",
        200,
        json!({ "keywords": ["let"], "tokenizer": { "root": [["/[0-9]+/", "number"]] } }),
    )]);

    cli()
        .backend(&backend)
        .args(&["syntax"])
        .passes()
        .stdout_has("keys:     keywords, tokenizer")
        .stdout_has("patterns: 1")
        .stdout_has("literals: 2");
}

#[test]
fn fetch_keeps_id_inside_share_path() {
    let backend = Backend::start(&[("/compile", 200, json!({ "compile": { "exitCode": 0 } }))]);

    cli().backend(&backend).args(&["fetch", "../compile"]).exits(2).stderr_has("no such route");

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/share/..%2Fcompile");
}
