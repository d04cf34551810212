// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestration actions.
//!
//! Compile and run follow the same sequence:
//!
//! 1. loading flag on, compile and run results cleared, aggregate log
//!    buckets cleared when `clear_logs_each_run` is set
//! 2. one backend request built from the current session
//! 3. on failure: error logged, loading flag off, nothing stored
//! 4. on success: sections classified into log buckets, result stored,
//!    loading flag off
//!
//! A second invocation of an action while the first is outstanding is
//! rejected with [`ActionError::InFlight`] and leaves the session untouched.

use pg_adapters::{ApiClient, ApiResponse, ApiTransport};
use pg_core::{
    classify_result, selected_options, wire_options, ActionKind, Bucket, CompileRequest,
    ExecutionResult, PickedOptions, RunRequest, ShareRequest, SyntaxDefinition, SyntaxError,
};
use std::future::Future;
use std::time::Instant;
use thiserror::Error;

use crate::flight::{FlightGuard, InFlight};
use crate::session::{Mutation, SessionStore, Settings};

/// Errors that end an action
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{0} is already in progress")]
    InFlight(ActionKind),
    /// Transport or service failure; not a compiler diagnostic
    #[error("{kind} failed: {message}")]
    Service { kind: ActionKind, message: String },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Session actions backed by an API client
pub struct Actions<T> {
    api: ApiClient<T>,
    store: SessionStore,
    flights: InFlight,
}

impl<T: Clone> Clone for Actions<T> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone(), store: self.store.clone(), flights: self.flights.clone() }
    }
}

impl<T: ApiTransport> Actions<T> {
    pub fn new(api: ApiClient<T>, store: SessionStore) -> Self {
        Self { api, store, flights: InFlight::new() }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn is_in_flight(&self, kind: ActionKind) -> bool {
        self.flights.is_active(kind)
    }

    pub fn set_source(&self, source: impl Into<String>) {
        self.store.apply(Mutation::SetSource(source.into()));
    }

    pub fn set_settings(&self, settings: Settings) {
        self.store.apply(Mutation::SetSettings(settings));
    }

    /// Replace the picked options wholesale. Flags are not validated.
    pub fn pick_options(&self, picked: PickedOptions) {
        self.store.apply(Mutation::PickOptions(picked));
    }

    /// Clear picked options so the backend applies its defaults.
    pub fn reset_options(&self) {
        self.store.apply(Mutation::ResetOptions);
    }

    /// Select a catalogue value and re-flatten the catalogue into the picked options.
    pub fn select_option(&self, flag: &str, value: &str) {
        self.store.apply(Mutation::SelectOption {
            flag: flag.to_string(),
            value: value.to_string(),
        });
        let picked = self.store.read(|s| selected_options(&s.available_options));
        self.pick_options(picked);
    }

    pub fn mark_read(&self, bucket: Bucket) {
        self.store.apply(Mutation::MarkRead(bucket));
    }

    pub fn clear_logs(&self) {
        self.store.apply(Mutation::ClearLogs(Bucket::ALL.to_vec()));
    }

    pub async fn compile(&self) -> Result<ExecutionResult, ActionError> {
        self.traced(ActionKind::Compile, async {
            let _flight = self.claim(ActionKind::Compile)?;
            let request = self.begin_execution(Mutation::SetCompileLoading(true));
            let response = self.api.compile(&request).await;
            self.settle(
                ActionKind::Compile,
                response,
                Mutation::StoreCompileResult,
                Mutation::SetCompileLoading(false),
            )
        })
        .await
    }

    pub async fn run(&self) -> Result<ExecutionResult, ActionError> {
        self.traced(ActionKind::Run, async {
            let _flight = self.claim(ActionKind::Run)?;
            let compile = self.begin_execution(Mutation::SetRunLoading(true));
            let runtime_verify = self.store.read(|s| s.settings.runtime_verify);
            let request = RunRequest::new(compile).runtime_verify(runtime_verify);
            let response = self.api.run(&request).await;
            self.settle(
                ActionKind::Run,
                response,
                Mutation::StoreRunResult,
                Mutation::SetRunLoading(false),
            )
        })
        .await
    }

    /// Share the current source and picked options; returns the share id.
    pub async fn share(&self) -> Result<String, ActionError> {
        self.traced(ActionKind::Share, async {
            let _flight = self.claim(ActionKind::Share)?;
            let request = self.store.read(|s| ShareRequest {
                code: s.source.clone(),
                options: wire_options(&s.picked_options),
            });
            let uuid = service(ActionKind::Share, self.api.share(&request).await)?.uuid;
            if uuid.is_empty() {
                return Err(service_error(ActionKind::Share, "backend returned no share id".into()));
            }
            self.store.apply(Mutation::SetShareId(uuid.clone()));
            Ok(uuid)
        })
        .await
    }

    /// Replace source and picked options with a shared snippet.
    pub async fn load_shared(&self, uuid: &str) -> Result<(), ActionError> {
        self.traced(ActionKind::LoadShared, async {
            let _flight = self.claim(ActionKind::LoadShared)?;
            let snippet = service(ActionKind::LoadShared, self.api.load_shared(uuid).await)?;
            self.store.apply(Mutation::SetSource(snippet.code));
            self.store.apply(Mutation::PickOptions(snippet.options.unwrap_or_default()));
            Ok(())
        })
        .await
    }

    /// Fetch the compile option catalogue into the session.
    pub async fn load_options(&self) -> Result<(), ActionError> {
        self.traced(ActionKind::LoadOptions, async {
            let _flight = self.claim(ActionKind::LoadOptions)?;
            let options = service(ActionKind::LoadOptions, self.api.options().await)?;
            self.store.apply(Mutation::SetAvailableOptions(options));
            Ok(())
        })
        .await
    }

    /// Fetch and compile the editor syntax definition into the session.
    pub async fn load_syntax(&self) -> Result<(), ActionError> {
        self.traced(ActionKind::LoadSyntax, async {
            let _flight = self.claim(ActionKind::LoadSyntax)?;
            let raw = service(ActionKind::LoadSyntax, self.api.syntax().await)?;
            let syntax = SyntaxDefinition::from_json(&raw)?;
            self.store.apply(Mutation::SetSyntax(syntax));
            Ok(())
        })
        .await
    }

    fn claim(&self, kind: ActionKind) -> Result<FlightGuard, ActionError> {
        self.flights.begin(kind).ok_or(ActionError::InFlight(kind))
    }

    /// Enter the loading state and build the request from the session.
    fn begin_execution(&self, loading: Mutation) -> CompileRequest {
        self.store.apply(loading);
        self.store.apply(Mutation::ClearResults);

        let (source, picked, settings) =
            self.store.read(|s| (s.source.clone(), s.picked_options.clone(), s.settings));
        if settings.clear_logs_each_run {
            self.store.apply(Mutation::ClearLogs(Bucket::AGGREGATES.to_vec()));
        }

        let mut request = CompileRequest::new(source)
            .disassemble(settings.disassemble)
            .verifier(settings.verifier);
        request.options = wire_options(&picked);
        request
    }

    fn settle(
        &self,
        kind: ActionKind,
        response: ApiResponse<ExecutionResult>,
        store: fn(ExecutionResult) -> Mutation,
        done: Mutation,
    ) -> Result<ExecutionResult, ActionError> {
        let result = match service(kind, response) {
            Ok(result) => result,
            Err(e) => {
                self.store.apply(done);
                return Err(e);
            }
        };

        for entry in classify_result(&result) {
            self.store.apply(Mutation::AppendLog(entry));
        }
        self.store.apply(store(result.clone()));
        self.store.apply(done);
        Ok(result)
    }

    async fn traced<R>(
        &self,
        kind: ActionKind,
        action: impl Future<Output = Result<R, ActionError>>,
    ) -> Result<R, ActionError> {
        tracing::info!("executing action={}", kind);
        let start = Instant::now();
        let result = action.await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(action = %kind, elapsed_ms, "completed"),
            Err(ActionError::InFlight(_)) => {
                tracing::warn!(action = %kind, "rejected, already in flight")
            }
            Err(e) => tracing::debug!(action = %kind, error = %e, elapsed_ms, "failed"),
        }
        result
    }
}

/// Unwrap a service response, logging failures to the diagnostic channel.
fn service<R>(kind: ActionKind, response: ApiResponse<R>) -> Result<R, ActionError> {
    response.into_result().map_err(|message| service_error(kind, message))
}

fn service_error(kind: ActionKind, message: String) -> ActionError {
    tracing::error!(action = %kind, error = %message, "backend request failed");
    ActionError::Service { kind, message }
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
