// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pg-adapters: backend transport, request service, and preference storage

pub mod api;
pub mod http;
pub mod prefs;
pub mod transport;

pub use api::{ApiClient, ApiResponse};
pub use http::HttpTransport;
pub use prefs::{FilePreferenceStore, PreferenceStore};
pub use transport::{ApiTransport, TransportError};

#[cfg(any(test, feature = "test-support"))]
pub use prefs::MemoryPreferenceStore;
#[cfg(any(test, feature = "test-support"))]
pub use transport::{FakeReply, FakeTransport, Gate, TransportCall};
