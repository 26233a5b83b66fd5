//! Inline bootstrap script generation.
//!
//! This module produces the snippet injected into the document head so the
//! stored theme is applied synchronously, before first paint. The snippet is
//! templated from a [`ThemeRegistry`](crate::ThemeRegistry) rather than
//! hand-written, so its membership check can never drift from the registry.
//!
//! - [`BootstrapScript`]: The generated snippet and its `<script>` wrapper
//! - [`run_bootstrap`]: The same boot sequence executed against ports, for
//!   hosts (and tests) without a browser

mod bootstrap;
mod filters;

pub use bootstrap::{run_bootstrap, BootstrapScript};
