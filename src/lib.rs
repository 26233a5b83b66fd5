//! Flash-free light/dark theme persistence for server-rendered pages.
//!
//! `prepaint` packages the pieces a server-rendered site needs to keep a
//! visitor's theme preference without a flash of the wrong theme on load:
//!
//! - [`ThemeRegistry`]: The ordered set of supported themes plus a default;
//!   its `normalize` is the single gate from stored input to a valid theme
//! - [`BootstrapScript`]: An inline head snippet, generated from the
//!   registry, that applies the stored theme before first paint
//! - [`ThemeController`]: The selector state machine, driven through
//!   injected storage/document ports so any host (or test) can run it
//! - [`SelectorMarkup`]: Server-side rendering of the selector control
//!
//! The preference lives under the storage key [`STORAGE_KEY`] and is
//! reflected on the document root element as the [`THEME_ATTRIBUTE`]
//! attribute, which styling rules key off. Storage failures never surface
//! anywhere: the worst case is the default theme with nothing persisted.
//!
//! # Example
//!
//! ```rust
//! use prepaint::{
//!     default_registry, BootstrapScript, MemoryRoot, MemoryStore, SelectorMarkup,
//!     ThemeController,
//! };
//!
//! let registry = default_registry();
//!
//! // Injected into the document head by the page-rendering layer.
//! let script = BootstrapScript::generate(registry).unwrap();
//! assert!(script.script_tag().starts_with("<script>"));
//!
//! // The control starts disabled, then mounts against the stored preference.
//! let store = MemoryStore::new().with_value("dark");
//! let mut controller = ThemeController::new(registry, store, MemoryRoot::new());
//! controller.mount();
//!
//! let markup = SelectorMarkup::new(registry).unwrap();
//! let html = markup.render_for(&controller).unwrap();
//! assert!(html.contains(r#"<option value="dark" selected>"#));
//! ```

pub mod controller;
pub mod script;
pub mod selector;
pub mod theme;

pub use controller::{
    DocumentRoot, MemoryRoot, MemoryStore, PreferenceStore, StorageError, ThemeController,
};
pub use script::{run_bootstrap, BootstrapScript};
pub use selector::SelectorMarkup;
pub use theme::{default_registry, RegistryError, ThemeDefinition, ThemeRegistry};

/// Storage key under which the preference persists across page loads.
pub const STORAGE_KEY: &str = "theme";

/// Attribute set on the document root element; styling rules read it.
pub const THEME_ATTRIBUTE: &str = "data-theme";
