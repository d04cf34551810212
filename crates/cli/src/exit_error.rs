// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use pg_engine::ActionError;
use std::fmt;

/// The program compiled or ran and reported diagnostics
pub const DIAGNOSTICS: i32 = 1;
/// The backend could not be reached or answered with a failure
pub const SERVICE: i32 = 2;
/// Bad arguments, unreadable input, or broken configuration
pub const USAGE: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit quietly; diagnostics were already printed.
    pub fn diagnostics() -> Self {
        Self::new(DIAGNOSTICS, "")
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE, message)
    }
}

impl From<ActionError> for ExitError {
    fn from(e: ActionError) -> Self {
        match e {
            ActionError::Syntax(_) => {
                Self::new(SERVICE, format!("malformed syntax definition: {e}"))
            }
            other => Self::new(SERVICE, other.to_string()),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
