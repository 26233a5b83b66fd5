//! Theme registry: the supported themes and the rules for resolving input.
//!
//! This module provides:
//!
//! - [`ThemeDefinition`]: An identifier/label pair for one selectable theme
//! - [`ThemeRegistry`]: The ordered set of themes plus a default, with
//!   fluent builder API
//! - [`RegistryError`]: Errors from registry validation
//! - [`default_registry`]: The canonical light/dark registry
//!
//! The registry is the single source of truth for what counts as a valid
//! theme: the bootstrap script generator and the selector controller both
//! derive their membership checks from it rather than carrying their own
//! lists.

mod definition;
mod error;
mod registry;

pub use definition::ThemeDefinition;
pub use error::RegistryError;
pub use registry::{default_registry, ThemeRegistry};
