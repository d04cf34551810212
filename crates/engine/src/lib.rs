// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pg-engine: session state and orchestration actions

pub mod actions;
pub mod flight;
pub mod session;

pub use actions::{ActionError, Actions};
pub use flight::{FlightGuard, InFlight};
pub use session::{Mutation, Session, SessionStore, Settings};
