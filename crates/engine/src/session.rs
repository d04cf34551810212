// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session state store.
//!
//! All state changes go through [`Mutation`] values applied by
//! [`SessionStore::apply`]; subscribers see every applied mutation in order.

use parking_lot::Mutex;
use pg_core::{
    Bucket, CompileOption, ExecutionResult, LogBuckets, LogEntry, PickedOptions, Preferences,
    SyntaxDefinition,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Toggles read by compile/run actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub disassemble: bool,
    pub verifier: bool,
    pub runtime_verify: bool,
    pub clear_logs_each_run: bool,
}

impl Settings {
    /// Settings seeded from persisted preferences
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self { clear_logs_each_run: prefs.clear_logs_each_run, ..Self::default() }
    }
}

/// In-memory state of one playground session
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub source: String,
    pub compile_loading: bool,
    pub run_loading: bool,
    pub compile_result: Option<ExecutionResult>,
    pub run_result: Option<ExecutionResult>,
    pub logs: LogBuckets,
    pub picked_options: PickedOptions,
    pub available_options: Vec<CompileOption>,
    pub syntax: Option<SyntaxDefinition>,
    pub settings: Settings,
    /// Id of the last shared snippet
    pub share_id: Option<String>,
}

/// A named state change
#[derive(Debug, Clone)]
pub enum Mutation {
    SetSource(String),
    SetSettings(Settings),
    SetCompileLoading(bool),
    SetRunLoading(bool),
    /// Drop both the compile and the run result
    ClearResults,
    StoreCompileResult(ExecutionResult),
    StoreRunResult(ExecutionResult),
    AppendLog(LogEntry),
    ClearLogs(Vec<Bucket>),
    MarkRead(Bucket),
    /// Replace the picked options wholesale
    PickOptions(PickedOptions),
    ResetOptions,
    SetAvailableOptions(Vec<CompileOption>),
    SelectOption { flag: String, value: String },
    SetSyntax(SyntaxDefinition),
    SetShareId(String),
}

impl Mutation {
    /// Mutation name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetSource(_) => "set_source",
            Mutation::SetSettings(_) => "set_settings",
            Mutation::SetCompileLoading(_) => "set_compile_loading",
            Mutation::SetRunLoading(_) => "set_run_loading",
            Mutation::ClearResults => "clear_results",
            Mutation::StoreCompileResult(_) => "store_compile_result",
            Mutation::StoreRunResult(_) => "store_run_result",
            Mutation::AppendLog(_) => "append_log",
            Mutation::ClearLogs(_) => "clear_logs",
            Mutation::MarkRead(_) => "mark_read",
            Mutation::PickOptions(_) => "pick_options",
            Mutation::ResetOptions => "reset_options",
            Mutation::SetAvailableOptions(_) => "set_available_options",
            Mutation::SelectOption { .. } => "select_option",
            Mutation::SetSyntax(_) => "set_syntax",
            Mutation::SetShareId(_) => "set_share_id",
        }
    }
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self { settings, ..Self::default() }
    }

    /// Apply a mutation in place.
    pub fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::SetSource(source) => self.source = source.clone(),
            Mutation::SetSettings(settings) => self.settings = *settings,
            Mutation::SetCompileLoading(loading) => self.compile_loading = *loading,
            Mutation::SetRunLoading(loading) => self.run_loading = *loading,
            Mutation::ClearResults => {
                self.compile_result = None;
                self.run_result = None;
            }
            Mutation::StoreCompileResult(result) => self.compile_result = Some(result.clone()),
            Mutation::StoreRunResult(result) => self.run_result = Some(result.clone()),
            Mutation::AppendLog(entry) => self.logs.push(entry.clone()),
            Mutation::ClearLogs(buckets) => {
                for bucket in buckets {
                    self.logs.clear(*bucket);
                }
            }
            Mutation::MarkRead(bucket) => self.logs.mark_read(*bucket),
            Mutation::PickOptions(picked) => self.picked_options = picked.clone(),
            Mutation::ResetOptions => self.picked_options = PickedOptions::new(),
            Mutation::SetAvailableOptions(options) => self.available_options = options.clone(),
            Mutation::SelectOption { flag, value } => {
                if let Some(option) = self.available_options.iter_mut().find(|o| &o.flag == flag)
                {
                    option.select(value);
                }
            }
            Mutation::SetSyntax(syntax) => self.syntax = Some(syntax.clone()),
            Mutation::SetShareId(id) => self.share_id = Some(id.clone()),
        }
    }
}

/// Shared handle to a session
#[derive(Clone, Default)]
pub struct SessionStore {
    session: Arc<Mutex<Session>>,
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<Mutation>>>>,
}

impl SessionStore {
    pub fn new(session: Session) -> Self {
        Self { session: Arc::new(Mutex::new(session)), subscribers: Arc::default() }
    }

    /// Apply a mutation and notify subscribers.
    pub fn apply(&self, mutation: Mutation) {
        tracing::trace!(mutation = mutation.name(), "apply");
        let mut session = self.session.lock();
        session.apply(&mutation);
        // Notify under the session lock so subscribers see application order
        self.subscribers.lock().retain(|tx| tx.send(mutation.clone()).is_ok());
    }

    /// Receive every mutation applied from now on.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Mutation> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        rx
    }

    pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&*self.session.lock())
    }

    pub fn snapshot(&self) -> Session {
        self.session.lock().clone()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
