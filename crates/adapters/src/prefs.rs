// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preference storage.

use pg_core::{PreferenceError, Preferences};
use std::path::{Path, PathBuf};

pub const PREFS_FILE: &str = "prefs.json";

/// Adapter for loading and saving preferences
pub trait PreferenceStore: Send + Sync {
    /// Load preferences; a store with nothing saved yields defaults.
    fn load(&self) -> Result<Preferences, PreferenceError>;

    fn save(&self, prefs: &Preferences) -> Result<(), PreferenceError>;
}

/// Preferences persisted as a JSON object in a file
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/prefs.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Preferences, PreferenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Preferences::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename: readers never observe a partial file
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(prefs)?)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::PreferenceStore;
    use parking_lot::Mutex;
    use pg_core::{PreferenceError, Preferences};
    use std::sync::Arc;

    /// In-memory preference store for testing
    #[derive(Clone, Default)]
    pub struct MemoryPreferenceStore {
        inner: Arc<Mutex<Preferences>>,
    }

    impl MemoryPreferenceStore {
        pub fn new(prefs: Preferences) -> Self {
            Self { inner: Arc::new(Mutex::new(prefs)) }
        }
    }

    impl PreferenceStore for MemoryPreferenceStore {
        fn load(&self) -> Result<Preferences, PreferenceError> {
            Ok(self.inner.lock().clone())
        }

        fn save(&self, prefs: &Preferences) -> Result<(), PreferenceError> {
            *self.inner.lock() = prefs.clone();
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::MemoryPreferenceStore;

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
