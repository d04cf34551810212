// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a `pg` command builder and a canned HTTP backend.

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::routing::any;
use axum::Router;

pub use serde_json::{json, Value};
use tempfile::TempDir;

/// `pg` with an isolated config dir and no ambient backend settings
pub fn cli() -> Cli {
    let config = tempfile::tempdir().unwrap();
    Cli::in_config(Arc::new(config))
}

pub struct Cli {
    cmd: assert_cmd::Command,
    config: Arc<TempDir>,
    stdin: Option<String>,
}

impl Cli {
    fn in_config(config: Arc<TempDir>) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("pg").unwrap();
        cmd.env("PG_CONFIG_DIR", config.path())
            .env("NO_COLOR", "1")
            .env("PG_TIMEOUT_MS", "5000")
            .env_remove("PG_API_URL")
            .env_remove("PG_LOG");
        Self { cmd, config, stdin: None }
    }

    /// A second invocation sharing this one's config dir.
    pub fn again(&self) -> Cli {
        Cli::in_config(Arc::clone(&self.config))
    }

    pub fn config_dir(&self) -> &Path {
        self.config.path()
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn backend(self, backend: &Backend) -> Self {
        let url = backend.url();
        self.args(&["--api-url", &url])
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn passes(self) -> Output {
        self.exits(0)
    }

    pub fn exits(mut self, code: i32) -> Output {
        if let Some(input) = self.stdin.take() {
            self.cmd.write_stdin(input);
        }
        let output = self.cmd.output().unwrap();
        let out = Output {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit status\n--- stdout ---\n{}\n--- stderr ---\n{}",
            out.stdout,
            out.stderr
        );
        out
    }
}

pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// Recorded request to the canned backend
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub body: Value,
}

type Requests = Arc<Mutex<Vec<Request>>>;

/// Backend answering each path with a fixed status and JSON body
pub struct Backend {
    port: u16,
    requests: Requests,
}

impl Backend {
    pub fn start(routes: &[(&str, u16, Value)]) -> Backend {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Requests::default();

        let mut router: Router<Requests> = Router::new();
        for (path, status, body) in routes {
            let status = StatusCode::from_u16(*status).unwrap();
            let payload = body.to_string();
            let canned = move |State(requests): State<Requests>,
                               method: Method,
                               uri: Uri,
                               body: Bytes| {
                record(&requests, &method, &uri, &body);
                let payload = payload.clone();
                async move { (status, [(header::CONTENT_TYPE, "application/json")], payload) }
            };
            router = router.route(path, any(canned));
        }
        let app = router.fallback(unrouted).with_state(Arc::clone(&requests));

        std::thread::spawn(move || {
            let runtime =
                tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });
        Backend { port, requests }
    }

    /// A URL nothing listens on.
    pub fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

async fn unrouted(
    State(requests): State<Requests>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, &'static str) {
    record(&requests, &method, &uri, &body);
    (StatusCode::NOT_FOUND, "no such route")
}

fn record(requests: &Mutex<Vec<Request>>, method: &Method, uri: &Uri, body: &[u8]) {
    let body = serde_json::from_slice(body).unwrap_or(Value::Null);
    let request = Request { method: method.to_string(), path: uri.path().to_string(), body };
    requests.lock().unwrap().push(request);
}
