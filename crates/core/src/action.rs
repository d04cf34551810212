// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

/// Orchestration actions a session can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Compile,
    Run,
    Share,
    LoadShared,
    LoadOptions,
    LoadSyntax,
}

crate::simple_display! {
    ActionKind {
        Compile => "compile",
        Run => "run",
        Share => "share",
        LoadShared => "load_shared",
        LoadOptions => "load_options",
        LoadSyntax => "load_syntax",
    }
}
