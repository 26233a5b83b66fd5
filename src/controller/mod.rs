//! Selector controller and its side-effect ports.
//!
//! This module provides:
//!
//! - [`PreferenceStore`] / [`DocumentRoot`]: Ports for the two pieces of
//!   state that outlive the controller (the storage entry, the document
//!   attribute)
//! - [`StorageError`]: The single failure kind a store can report
//! - [`ThemeController`]: The two-state (unmounted/mounted) control machine
//! - [`MemoryStore`] / [`MemoryRoot`]: In-memory port doubles for hosts and
//!   tests without a browser

#[allow(clippy::module_inception)]
mod controller;
mod memory;
mod ports;

pub use controller::ThemeController;
pub use memory::{MemoryRoot, MemoryStore};
pub use ports::{DocumentRoot, PreferenceStore, StorageError};
