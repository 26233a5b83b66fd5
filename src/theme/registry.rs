//! Theme registry with fluent builder API.

use once_cell::sync::Lazy;

use super::definition::ThemeDefinition;
use super::error::RegistryError;

/// The ordered set of supported themes plus the default.
///
/// A registry is built fluently and then validated by whichever component
/// turns it into output (script generation, selector markup). Insertion
/// order is display order.
///
/// # Example
///
/// ```rust
/// use prepaint::ThemeRegistry;
///
/// let registry = ThemeRegistry::new()
///     .add("light", "Light")
///     .add("dark", "Dark")
///     .default_value("light");
///
/// assert!(registry.validate().is_ok());
/// assert_eq!(registry.default_theme(), "light");
/// assert_eq!(registry.normalize(Some("dark")), Some("dark"));
/// assert_eq!(registry.normalize(Some("sepia")), None);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<ThemeDefinition>,
    default: String,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    ///
    /// An empty registry (or one without a registered default) fails
    /// [`validate`](Self::validate); callers are expected to `add` themes
    /// and set `default_value` before handing the registry to a consumer.
    pub fn new() -> Self {
        Self {
            themes: Vec::new(),
            default: String::new(),
        }
    }

    /// Adds a theme, returning an updated registry for chaining.
    pub fn add(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.themes.push(ThemeDefinition::new(value, label));
        self
    }

    /// Sets the default theme identifier, returning an updated registry.
    ///
    /// The value must name a registered theme; this is checked by
    /// [`validate`](Self::validate), not here.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    /// Returns the registered themes in insertion order.
    pub fn themes(&self) -> &[ThemeDefinition] {
        &self.themes
    }

    /// Returns the default theme identifier.
    pub fn default_theme(&self) -> &str {
        &self.default
    }

    /// Returns true if `value` names a registered theme.
    pub fn contains(&self, value: &str) -> bool {
        self.themes.iter().any(|t| t.value == value)
    }

    /// Returns the display label for a registered identifier.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.themes
            .iter()
            .find(|t| t.value == value)
            .map(|t| t.label.as_str())
    }

    /// Maps arbitrary stored input to a registered identifier, or absent.
    ///
    /// Returns `raw` unchanged iff it exactly matches a registered value;
    /// anything else (missing, wrong case, legacy identifiers) is absent.
    /// Pure function, no side effects.
    pub fn normalize<'a>(&self, raw: Option<&'a str>) -> Option<&'a str> {
        let raw = raw?;
        self.contains(raw).then_some(raw)
    }

    /// Resolves arbitrary stored input to a registered identifier.
    ///
    /// This is [`normalize`](Self::normalize) with the default as fallback:
    /// the one resolution rule shared by the bootstrap script and the
    /// selector controller.
    pub fn resolve<'a>(&'a self, raw: Option<&'a str>) -> &'a str {
        self.normalize(raw).unwrap_or(&self.default)
    }

    /// Validates that the registry is usable.
    ///
    /// This is called automatically before script or markup generation, but
    /// can be called explicitly for early error detection.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is empty, a value is registered
    /// twice, or the default is not a registered value.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.themes.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, theme) in self.themes.iter().enumerate() {
            if self.themes[..i].iter().any(|t| t.value == theme.value) {
                return Err(RegistryError::DuplicateTheme {
                    value: theme.value.clone(),
                });
            }
        }
        if !self.contains(&self.default) {
            return Err(RegistryError::UnknownDefault {
                value: self.default.clone(),
            });
        }
        Ok(())
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(|| {
    ThemeRegistry::new()
        .add("light", "Light")
        .add("dark", "Dark")
        .default_value("light")
});

/// Returns the canonical light/dark registry with `"light"` as default.
pub fn default_registry() -> &'static ThemeRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_dark() -> ThemeRegistry {
        ThemeRegistry::new()
            .add("light", "Light")
            .add("dark", "Dark")
            .default_value("light")
    }

    #[test]
    fn test_normalize_identity_on_members() {
        let registry = light_dark();
        assert_eq!(registry.normalize(Some("light")), Some("light"));
        assert_eq!(registry.normalize(Some("dark")), Some("dark"));
    }

    #[test]
    fn test_normalize_rejects_non_members() {
        let registry = light_dark();
        assert_eq!(registry.normalize(None), None);
        assert_eq!(registry.normalize(Some("")), None);
        assert_eq!(registry.normalize(Some("Light")), None);
        assert_eq!(registry.normalize(Some("sepia")), None);
        assert_eq!(registry.normalize(Some("dark ")), None);
    }

    #[test]
    fn test_default_is_accepted_by_normalize() {
        let registry = light_dark();
        assert_eq!(
            registry.normalize(Some(registry.default_theme())),
            Some("light")
        );
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let registry = light_dark();
        assert_eq!(registry.resolve(Some("dark")), "dark");
        assert_eq!(registry.resolve(Some("sepia")), "light");
        assert_eq!(registry.resolve(None), "light");
    }

    #[test]
    fn test_themes_keep_insertion_order() {
        let registry = light_dark();
        let values: Vec<&str> = registry.themes().iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["light", "dark"]);
    }

    #[test]
    fn test_label_for() {
        let registry = light_dark();
        assert_eq!(registry.label_for("dark"), Some("Dark"));
        assert_eq!(registry.label_for("sepia"), None);
    }

    #[test]
    fn test_validate_valid() {
        assert!(light_dark().validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.validate(), Err(RegistryError::Empty));
    }

    #[test]
    fn test_validate_duplicate() {
        let registry = ThemeRegistry::new()
            .add("light", "Light")
            .add("light", "Lighter")
            .default_value("light");
        assert_eq!(
            registry.validate(),
            Err(RegistryError::DuplicateTheme {
                value: "light".to_string()
            })
        );
    }

    #[test]
    fn test_validate_unknown_default() {
        let registry = ThemeRegistry::new()
            .add("light", "Light")
            .default_value("sepia");
        assert_eq!(
            registry.validate(),
            Err(RegistryError::UnknownDefault {
                value: "sepia".to_string()
            })
        );
    }

    #[test]
    fn test_validate_missing_default() {
        let registry = ThemeRegistry::new().add("light", "Light");
        assert!(matches!(
            registry.validate(),
            Err(RegistryError::UnknownDefault { .. })
        ));
    }

    #[test]
    fn test_default_registry() {
        let registry = default_registry();
        assert!(registry.validate().is_ok());
        assert_eq!(registry.default_theme(), "light");
        assert_eq!(registry.themes().len(), 2);
    }
}
