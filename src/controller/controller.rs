//! The selector control state machine.

use super::ports::{DocumentRoot, PreferenceStore};
use crate::theme::{ThemeDefinition, ThemeRegistry};

/// The interactive theme selector, independent of any UI framework.
///
/// The controller has two observable states. Freshly constructed it is
/// *unmounted*: the selection shows the registry default and the rendered
/// control is disabled. [`mount`](Self::mount) transitions it exactly once
/// to *mounted*: the persisted preference is read, resolved through the
/// registry, applied to the document root, written back, and the control
/// becomes interactive. From then on [`select`](Self::select) applies user
/// choices immediately.
///
/// Storage failures never surface: a failed read resolves to the default,
/// a failed write leaves the in-memory selection and the document attribute
/// authoritative for the current page view.
///
/// # Example
///
/// ```rust
/// use prepaint::{default_registry, MemoryRoot, MemoryStore, ThemeController};
///
/// let store = MemoryStore::new().with_value("dark");
/// let mut controller = ThemeController::new(default_registry(), store, MemoryRoot::new());
/// assert!(!controller.is_mounted());
/// assert_eq!(controller.selection(), "light");
///
/// controller.mount();
/// assert!(controller.is_mounted());
/// assert_eq!(controller.selection(), "dark");
/// assert_eq!(controller.root().theme(), Some("dark"));
/// ```
#[derive(Debug)]
pub struct ThemeController<'r, S, D> {
    registry: &'r ThemeRegistry,
    store: S,
    root: D,
    selection: String,
    mounted: bool,
}

impl<'r, S, D> ThemeController<'r, S, D>
where
    S: PreferenceStore,
    D: DocumentRoot,
{
    /// Creates an unmounted controller showing the registry default.
    pub fn new(registry: &'r ThemeRegistry, store: S, root: D) -> Self {
        Self {
            selection: registry.default_theme().to_string(),
            registry,
            store,
            root,
            mounted: false,
        }
    }

    /// Transitions to mounted; further calls are no-ops.
    ///
    /// Reads the persisted preference (a failed read counts as absent),
    /// resolves it through the registry, applies it to the document root,
    /// writes the resolved value back (a failed write is ignored), and
    /// updates the displayed selection.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        let stored = self.store.load().unwrap_or(None);
        let resolved = self.registry.resolve(stored.as_deref()).to_string();
        self.root.set_theme(&resolved);
        let _ = self.store.save(&resolved);
        self.selection = resolved;
        self.mounted = true;
    }

    /// Applies a user selection.
    ///
    /// Updates the displayed selection, sets the document attribute, and
    /// persists the value; a failed save does not roll anything back.
    ///
    /// Returns `false` without side effects while unmounted (the control is
    /// disabled) or when `value` is not a registered theme, so the applied
    /// theme is always a registry member.
    pub fn select(&mut self, value: &str) -> bool {
        if !self.mounted || !self.registry.contains(value) {
            return false;
        }
        self.selection = value.to_string();
        self.root.set_theme(value);
        let _ = self.store.save(value);
        true
    }

    /// Returns the identifier currently shown by the control.
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Returns true once [`mount`](Self::mount) has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns the choices the control offers, in display order.
    pub fn options(&self) -> &[ThemeDefinition] {
        self.registry.themes()
    }

    /// Returns the registry this controller resolves against.
    pub fn registry(&self) -> &ThemeRegistry {
        self.registry
    }

    /// Returns the preference store, for host inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the document root, for host inspection.
    pub fn root(&self) -> &D {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{MemoryRoot, MemoryStore};
    use crate::theme::default_registry;

    fn controller(store: MemoryStore) -> ThemeController<'static, MemoryStore, MemoryRoot> {
        ThemeController::new(default_registry(), store, MemoryRoot::new())
    }

    #[test]
    fn test_unmounted_shows_default() {
        let c = controller(MemoryStore::new());
        assert!(!c.is_mounted());
        assert_eq!(c.selection(), "light");
        assert_eq!(c.root().theme(), None);
    }

    #[test]
    fn test_mount_applies_stored_preference() {
        let mut c = controller(MemoryStore::new().with_value("dark"));
        c.mount();
        assert!(c.is_mounted());
        assert_eq!(c.selection(), "dark");
        assert_eq!(c.root().theme(), Some("dark"));
        assert_eq!(c.registry().label_for(c.selection()), Some("Dark"));
    }

    #[test]
    fn test_mount_overwrites_legacy_preference() {
        let mut c = controller(MemoryStore::new().with_value("sepia"));
        c.mount();
        assert_eq!(c.selection(), "light");
        assert_eq!(c.root().theme(), Some("light"));
        assert_eq!(c.store().value(), Some("light"));
    }

    #[test]
    fn test_mount_with_failing_load() {
        let mut c = controller(MemoryStore::new().failing_loads());
        c.mount();
        assert!(c.is_mounted());
        assert_eq!(c.selection(), "light");
        assert_eq!(c.root().theme(), Some("light"));
    }

    #[test]
    fn test_mount_runs_once() {
        let mut c = controller(MemoryStore::new().with_value("dark"));
        c.mount();
        c.select("light");
        // A second mount must not re-read storage or reapply
        c.mount();
        assert_eq!(c.selection(), "light");
        assert_eq!(c.root().applications(), 2);
    }

    #[test]
    fn test_select_applies_immediately() {
        let mut c = controller(MemoryStore::new());
        c.mount();
        assert!(c.select("dark"));
        assert_eq!(c.selection(), "dark");
        assert_eq!(c.root().theme(), Some("dark"));
        assert_eq!(c.store().value(), Some("dark"));
    }

    #[test]
    fn test_select_keeps_state_when_save_fails() {
        let mut c = controller(MemoryStore::new().failing_saves());
        c.mount();
        assert!(c.select("dark"));
        assert_eq!(c.selection(), "dark");
        assert_eq!(c.root().theme(), Some("dark"));
        assert_eq!(c.store().value(), None);
    }

    #[test]
    fn test_select_rejected_while_unmounted() {
        let mut c = controller(MemoryStore::new());
        assert!(!c.select("dark"));
        assert_eq!(c.selection(), "light");
        assert_eq!(c.root().theme(), None);
        assert_eq!(c.store().value(), None);
    }

    #[test]
    fn test_select_rejects_unregistered_value() {
        let mut c = controller(MemoryStore::new());
        c.mount();
        assert!(!c.select("sepia"));
        assert_eq!(c.selection(), "light");
        assert_eq!(c.root().theme(), Some("light"));
    }

    #[test]
    fn test_options_follow_registry_order() {
        let c = controller(MemoryStore::new());
        let values: Vec<&str> = c.options().iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["light", "dark"]);
    }
}
