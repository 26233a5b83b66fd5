//! In-memory port doubles.

use super::ports::{DocumentRoot, PreferenceStore, StorageError};

/// An in-memory [`PreferenceStore`] with failure injection.
///
/// Stands in for browser storage in tests and server-side hosts. Load and
/// save failures toggle independently so either half of a storage outage
/// can be simulated.
///
/// # Example
///
/// ```rust
/// use prepaint::{MemoryStore, PreferenceStore};
///
/// let store = MemoryStore::new().with_value("dark").failing_saves();
/// assert_eq!(store.load().unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    fail_loads: bool,
    fail_saves: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a value, returning it for chaining.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Makes every load fail, returning the store for chaining.
    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    /// Makes every save fail, returning the store for chaining.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Returns the currently stored value, bypassing failure injection.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_loads {
            return Err(StorageError::new("load disabled"));
        }
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::new("save disabled"));
        }
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// An in-memory [`DocumentRoot`] that records what was applied.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    theme: Option<String>,
    applications: usize,
}

impl MemoryRoot {
    /// Creates a root with no theme applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently applied theme attribute value.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Returns how many times the attribute has been set.
    pub fn applications(&self) -> usize {
        self.applications
    }
}

impl DocumentRoot for MemoryRoot {
    fn set_theme(&mut self, value: &str) {
        self.theme = Some(value.to_string());
        self.applications += 1;
    }
}
