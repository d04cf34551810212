// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-flight guard keyed by action kind.

use parking_lot::Mutex;
use pg_core::ActionKind;
use std::collections::HashSet;
use std::sync::Arc;

/// Tracks which actions are outstanding
#[derive(Clone, Default)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<ActionKind>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `kind`; `None` when an invocation is already outstanding.
    pub fn begin(&self, kind: ActionKind) -> Option<FlightGuard> {
        if self.active.lock().insert(kind) {
            Some(FlightGuard { kind, active: Arc::clone(&self.active) })
        } else {
            None
        }
    }

    pub fn is_active(&self, kind: ActionKind) -> bool {
        self.active.lock().contains(&kind)
    }
}

/// Releases its action kind on drop
#[must_use]
pub struct FlightGuard {
    kind: ActionKind,
    active: Arc<Mutex<HashSet<ActionKind>>>,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.active.lock().remove(&self.kind);
    }
}

#[cfg(test)]
#[path = "flight_tests.rs"]
mod tests;
