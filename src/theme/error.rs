//! Registry validation errors.

/// Error returned when theme registry validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry contains no themes
    Empty,
    /// Two themes share the same identifier
    DuplicateTheme { value: String },
    /// The configured default is not a registered theme
    UnknownDefault { value: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::Empty => {
                write!(f, "theme registry has no themes")
            }
            RegistryError::DuplicateTheme { value } => {
                write!(f, "theme '{}' is registered more than once", value)
            }
            RegistryError::UnknownDefault { value } => {
                write!(f, "default theme '{}' is not a registered theme", value)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_theme_error_display() {
        let err = RegistryError::DuplicateTheme {
            value: "dark".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dark"));
        assert!(msg.contains("more than once"));
    }

    #[test]
    fn test_unknown_default_error_display() {
        let err = RegistryError::UnknownDefault {
            value: "sepia".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sepia"));
        assert!(msg.contains("not a registered"));
    }

    #[test]
    fn test_empty_error_display() {
        let msg = RegistryError::Empty.to_string();
        assert!(msg.contains("no themes"));
    }
}
