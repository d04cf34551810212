// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log entries and the buckets that hold them.
//!
//! Entries are immutable once created. Buckets are shared snapshots
//! (`Arc<Vec<_>>`): every change builds a new vector and swaps it in, so a
//! holder of an earlier snapshot never observes later appends.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

/// Pipeline stage and channel that produced a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogSource {
    CompileOut,
    CompileErr,
    RunOut,
    RunErr,
    DisasmOut,
    DisasmErr,
}

crate::simple_display! {
    LogSource {
        CompileOut => "compileOut",
        CompileErr => "compileErr",
        RunOut => "runOut",
        RunErr => "runErr",
        DisasmOut => "disasmOut",
        DisasmErr => "disasmErr",
    }
}

impl LogSource {
    pub fn kind(self) -> LogKind {
        match self {
            LogSource::CompileOut | LogSource::RunOut | LogSource::DisasmOut => LogKind::Out,
            LogSource::CompileErr | LogSource::RunErr | LogSource::DisasmErr => LogKind::Err,
        }
    }

    /// Bucket dedicated to this source
    pub fn bucket(self) -> Bucket {
        match self {
            LogSource::CompileOut => Bucket::CompileOut,
            LogSource::CompileErr => Bucket::CompileErr,
            LogSource::RunOut => Bucket::RunOut,
            LogSource::RunErr => Bucket::RunErr,
            LogSource::DisasmOut => Bucket::DisasmOut,
            LogSource::DisasmErr => Bucket::DisasmErr,
        }
    }
}

/// Output vs. error channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Out,
    Err,
}

crate::simple_display! {
    LogKind {
        Out => "out",
        Err => "err",
    }
}

impl LogKind {
    /// Aggregate bucket collecting entries of this kind across all sources
    pub fn bucket(self) -> Bucket {
        match self {
            LogKind::Out => Bucket::Out,
            LogKind::Err => Bucket::Err,
        }
    }
}

/// Named log bucket: one per source plus the `out`/`err` aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    CompileOut,
    CompileErr,
    RunOut,
    RunErr,
    DisasmOut,
    DisasmErr,
    Out,
    Err,
}

crate::simple_display! {
    Bucket {
        CompileOut => "compileOut",
        CompileErr => "compileErr",
        RunOut => "runOut",
        RunErr => "runErr",
        DisasmOut => "disasmOut",
        DisasmErr => "disasmErr",
        Out => "out",
        Err => "err",
    }
}

impl Bucket {
    pub const ALL: [Bucket; 8] = [
        Bucket::CompileOut,
        Bucket::CompileErr,
        Bucket::RunOut,
        Bucket::RunErr,
        Bucket::DisasmOut,
        Bucket::DisasmErr,
        Bucket::Out,
        Bucket::Err,
    ];

    /// Aggregate buckets cleared at the start of a run when
    /// "clear logs each run" is enabled
    pub const AGGREGATES: [Bucket; 2] = [Bucket::Out, Bucket::Err];

    fn index(self) -> usize {
        self as usize
    }
}

/// One line of user-visible output or error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub from: LogSource,
}

impl LogEntry {
    pub fn new(from: LogSource, message: impl Into<String>) -> Self {
        Self { message: message.into(), is_read: false, from }
    }

    pub fn kind(&self) -> LogKind {
        self.from.kind()
    }
}

/// Immutable snapshot of one bucket
pub type BucketSnapshot = Arc<Vec<LogEntry>>;

/// All log buckets of a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBuckets {
    slots: [BucketSnapshot; 8],
}

impl LogBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot of a bucket
    pub fn snapshot(&self, bucket: Bucket) -> BucketSnapshot {
        Arc::clone(&self.slots[bucket.index()])
    }

    pub fn entries(&self, bucket: Bucket) -> &[LogEntry] {
        &self.slots[bucket.index()]
    }

    pub fn len(&self, bucket: Bucket) -> usize {
        self.slots[bucket.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_empty())
    }

    /// Number of unread entries in a bucket
    pub fn unread(&self, bucket: Bucket) -> usize {
        self.entries(bucket).iter().filter(|e| !e.is_read).count()
    }

    /// Append an entry to its source bucket and to its aggregate bucket.
    pub fn push(&mut self, entry: LogEntry) {
        self.append(entry.from.bucket(), entry.clone());
        self.append(entry.kind().bucket(), entry);
    }

    fn append(&mut self, bucket: Bucket, entry: LogEntry) {
        let current = &self.slots[bucket.index()];
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(entry);
        self.slots[bucket.index()] = Arc::new(next);
    }

    /// Replace a bucket with a copy whose entries are all marked read.
    pub fn mark_read(&mut self, bucket: Bucket) {
        let next: Vec<LogEntry> = self
            .entries(bucket)
            .iter()
            .map(|e| LogEntry { is_read: true, ..e.clone() })
            .collect();
        self.slots[bucket.index()] = Arc::new(next);
    }

    pub fn clear(&mut self, bucket: Bucket) {
        self.slots[bucket.index()] = BucketSnapshot::default();
    }

    pub fn clear_all(&mut self) {
        for bucket in Bucket::ALL {
            self.clear(bucket);
        }
    }
}

impl Serialize for LogBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Bucket::ALL.len()))?;
        for bucket in Bucket::ALL {
            map.serialize_entry(&bucket.to_string(), self.entries(bucket))?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
