// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn pg_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("compile")
        .stdout_has("run")
        .stdout_has("share")
        .stdout_has("prefs");
}

#[test]
fn pg_compile_help_shows_toggles() {
    cli()
        .args(&["compile", "--help"])
        .passes()
        .stdout_has("--disassemble")
        .stdout_has("--verifier")
        .stdout_has("FLAG=VALUE")
        .stdout_lacks("--runtime-verify");
}

#[test]
fn pg_run_help_shows_runtime_verify() {
    cli().args(&["run", "--help"]).passes().stdout_has("--runtime-verify");
}

#[test]
fn pg_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn unknown_command_is_usage_error() {
    cli().args(&["frobnicate"]).exits(3).stderr_has("frobnicate");
}
