// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON transport to the playground backend.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from the transport layer
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("client setup failed: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Connect(String),
    #[error("request timed out")]
    Timeout,
    /// Non-success status; displays as the response body
    #[error("{}", status_message(*status, body))]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

fn status_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

/// Adapter for exchanging JSON documents with the backend
#[async_trait]
pub trait ApiTransport: Clone + Send + Sync + 'static {
    /// `GET path`; an empty body decodes as `null`
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    /// `POST path` with a JSON body; an empty body decodes as `null`
    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ApiTransport, TransportError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::Value;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// Recorded transport call
    #[derive(Debug, Clone, PartialEq)]
    pub struct TransportCall {
        pub method: &'static str,
        pub path: String,
        pub body: Option<Value>,
    }

    /// Scripted reply for a path
    #[derive(Debug, Clone)]
    pub enum FakeReply {
        Json(Value),
        Status(u16, String),
        Unreachable(String),
    }

    /// Holds requests to a path until released
    #[derive(Default)]
    pub struct Gate {
        entered: Notify,
        release: Notify,
    }

    impl Gate {
        /// Wait until a request has reached the gate.
        pub async fn entered(&self) {
            self.entered.notified().await;
        }

        /// Let the waiting request proceed.
        pub fn release(&self) {
            self.release.notify_one();
        }
    }

    #[derive(Default)]
    struct FakeTransportState {
        replies: HashMap<String, VecDeque<FakeReply>>,
        gates: HashMap<String, Arc<Gate>>,
        calls: Vec<TransportCall>,
    }

    /// Fake transport for testing
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        inner: Arc<Mutex<FakeTransportState>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a reply for the next request to `path`.
        ///
        /// Replies are consumed in order; the last one for a path repeats.
        pub fn reply(&self, path: &str, reply: FakeReply) -> &Self {
            self.inner.lock().replies.entry(path.to_string()).or_default().push_back(reply);
            self
        }

        pub fn reply_json(&self, path: &str, body: Value) -> &Self {
            self.reply(path, FakeReply::Json(body))
        }

        /// Hold requests to `path` until the returned gate is released.
        pub fn gate(&self, path: &str) -> Arc<Gate> {
            let gate = Arc::new(Gate::default());
            self.inner.lock().gates.insert(path.to_string(), Arc::clone(&gate));
            gate
        }

        /// Get all recorded calls
        pub fn calls(&self) -> Vec<TransportCall> {
            self.inner.lock().calls.clone()
        }

        async fn respond(
            &self,
            method: &'static str,
            path: &str,
            body: Option<Value>,
        ) -> Result<Value, TransportError> {
            let gate = {
                let mut inner = self.inner.lock();
                inner.calls.push(TransportCall { method, path: path.to_string(), body });
                inner.gates.get(path).cloned()
            };
            if let Some(gate) = gate {
                gate.entered.notify_one();
                gate.release.notified().await;
            }

            let reply = {
                let mut inner = self.inner.lock();
                match inner.replies.get_mut(path) {
                    Some(queue) if queue.len() > 1 => queue.pop_front(),
                    Some(queue) => queue.front().cloned(),
                    None => None,
                }
            };
            match reply {
                Some(FakeReply::Json(value)) => Ok(value),
                Some(FakeReply::Status(status, body)) => {
                    Err(TransportError::Status { status, body })
                }
                Some(FakeReply::Unreachable(msg)) => Err(TransportError::Connect(msg)),
                None => {
                    let body = format!("no route {}", path);
                    Err(TransportError::Status { status: 404, body })
                }
            }
        }
    }

    #[async_trait]
    impl ApiTransport for FakeTransport {
        async fn get(&self, path: &str) -> Result<Value, TransportError> {
            self.respond("GET", path, None).await
        }

        async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
            self.respond("POST", path, Some(body)).await
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeReply, FakeTransport, Gate, TransportCall};

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
