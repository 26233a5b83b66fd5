//! Theme definition type.

use serde::Serialize;

/// One selectable theme: a stable identifier plus its display label.
///
/// The identifier (`value`) is what gets persisted to storage and written to
/// the document attribute; the label is what the selector control shows.
/// Definitions serialize directly into template contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeDefinition {
    /// Stable identifier, e.g. `"light"` or `"dark"`.
    pub value: String,
    /// Human-readable label, e.g. `"Light"` or `"Dark"`.
    pub label: String,
}

impl ThemeDefinition {
    /// Creates a definition from an identifier and a display label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_new() {
        let def = ThemeDefinition::new("dark", "Dark");
        assert_eq!(def.value, "dark");
        assert_eq!(def.label, "Dark");
    }

    #[test]
    fn test_definition_serializes_for_templates() {
        let def = ThemeDefinition::new("light", "Light");
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["value"], "light");
        assert_eq!(json["label"], "Light");
    }
}
