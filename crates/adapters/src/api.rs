// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request service for the playground backend.
//!
//! Every call yields an [`ApiResponse`]: on success `data` holds the
//! normalized payload and `error` is empty; on failure `data` is the type's
//! default and `error` carries the message. Callers never branch on a
//! missing payload. No call is retried.

use pg_core::{
    CompileOption, CompileRequest, ExecutionResult, RunRequest, ShareRequest, ShareResponse,
    SharedSnippet,
};
use serde::Serialize;
use serde_json::Value;

use crate::transport::{ApiTransport, TransportError};

pub const COMPILE_PATH: &str = "/compile";
pub const RUN_PATH: &str = "/run";
pub const SHARE_PATH: &str = "/share";
pub const SYNTAX_PATH: &str = "/syntax";
pub const OPTIONS_PATH: &str = "/options";

/// Payload plus error message; `error` is empty on success
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub error: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { data, error: String::new() }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }

    pub fn into_result(self) -> Result<T, String> {
        if self.error.is_empty() {
            Ok(self.data)
        } else {
            Err(self.error)
        }
    }
}

impl<T: Default> ApiResponse<T> {
    pub fn failed(error: impl Into<String>) -> Self {
        let error = error.into();
        // An empty message would read as success
        let error = if error.is_empty() { "request failed".to_string() } else { error };
        Self { data: T::default(), error }
    }
}

impl<T: Default> From<Result<T, TransportError>> for ApiResponse<T> {
    fn from(result: Result<T, TransportError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Typed client over an [`ApiTransport`]
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: ApiTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn compile(&self, request: &CompileRequest) -> ApiResponse<ExecutionResult> {
        self.post(COMPILE_PATH, request, |raw| Ok(ExecutionResult::from_compile_response(&raw)))
            .await
    }

    pub async fn run(&self, request: &RunRequest) -> ApiResponse<ExecutionResult> {
        self.post(RUN_PATH, request, |raw| Ok(ExecutionResult::from_run_response(&raw))).await
    }

    pub async fn share(&self, request: &ShareRequest) -> ApiResponse<ShareResponse> {
        self.post(SHARE_PATH, request, decode).await
    }

    pub async fn load_shared(&self, uuid: &str) -> ApiResponse<SharedSnippet> {
        let Some(path) = share_path(uuid) else {
            tracing::warn!(uuid, "rejected share id");
            return ApiResponse::failed(format!("invalid share id {:?}", uuid));
        };
        self.get(&path, decode).await
    }

    /// Raw tokenizer definition; see `pg_core::SyntaxDefinition` for conversion
    pub async fn syntax(&self) -> ApiResponse<Value> {
        self.get(SYNTAX_PATH, Ok).await
    }

    pub async fn options(&self) -> ApiResponse<Vec<CompileOption>> {
        self.get(OPTIONS_PATH, |raw| match raw {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .map(CompileOption::from_raw)
                .collect::<Result<_, _>>()
                .map_err(|e| TransportError::Decode(e.to_string())),
            other => Err(TransportError::Decode(format!("expected option list, got {}", other))),
        })
        .await
    }

    async fn get<R: Default>(
        &self,
        path: &str,
        transform: impl FnOnce(Value) -> Result<R, TransportError>,
    ) -> ApiResponse<R> {
        let result = self.transport.get(path).await.and_then(transform);
        log_failure("GET", path, &result);
        result.into()
    }

    async fn post<B: Serialize, R: Default>(
        &self,
        path: &str,
        body: &B,
        transform: impl FnOnce(Value) -> Result<R, TransportError>,
    ) -> ApiResponse<R> {
        let body = match serde_json::to_value(body) {
            Ok(body) => body,
            Err(e) => return ApiResponse::failed(e.to_string()),
        };
        let result = self.transport.post(path, body).await.and_then(transform);
        log_failure("POST", path, &result);
        result.into()
    }
}

/// `/share/<id>` with the id percent-encoded as a single path segment.
///
/// Empty and dot-segment ids would resolve to another endpoint.
fn share_path(uuid: &str) -> Option<String> {
    match uuid {
        "" | "." | ".." => None,
        id => Some(format!("{}/{}", SHARE_PATH, urlencoding::encode(id))),
    }
}

fn decode<R: serde::de::DeserializeOwned + Default>(raw: Value) -> Result<R, TransportError> {
    if raw.is_null() {
        return Ok(R::default());
    }
    serde_json::from_value(raw).map_err(|e| TransportError::Decode(e.to_string()))
}

fn log_failure<R>(method: &str, path: &str, result: &Result<R, TransportError>) {
    if let Err(e) = result {
        tracing::warn!(method, path, error = %e, "backend request failed");
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
