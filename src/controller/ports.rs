//! Side-effect ports for preference storage and the document root.

/// Error reported by a preference store.
///
/// Covers the one failure kind this mechanism knows: storage unavailable or
/// denied (disabled storage, quota, privacy restrictions, absent
/// environment). The controller and boot sequence swallow it; only port
/// implementations ever construct it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    /// Creates an error with a host-specific message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the host-specific message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "preference storage unavailable: {}", self.message)
    }
}

impl std::error::Error for StorageError {}

/// Durable storage for the persisted preference.
///
/// Implementations wrap whatever the host offers (browser local storage, an
/// in-memory map). Both operations are expected to fail whenever the host
/// denies access; callers in this crate treat a failed load as an absent
/// value and ignore a failed save.
pub trait PreferenceStore {
    /// Reads the stored preference, absent if never written.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Writes the preference.
    fn save(&mut self, value: &str) -> Result<(), StorageError>;
}

/// The document root element's theme attribute.
///
/// Setting an attribute cannot fail in any host, so this port is
/// infallible.
pub trait DocumentRoot {
    /// Sets the theme attribute to `value`.
    fn set_theme(&mut self, value: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::new("quota exceeded");
        let msg = err.to_string();
        assert!(msg.contains("unavailable"));
        assert!(msg.contains("quota exceeded"));
    }

    #[test]
    fn test_storage_error_message() {
        let err = StorageError::new("denied");
        assert_eq!(err.message(), "denied");
    }
}
