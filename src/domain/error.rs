//! Error types for the shopping list plugin.
//!
//! The core state machine never fails: blank items are dropped silently and
//! navigation is idempotent. Errors only come from the edges, namely reading
//! theme files and interpreting plugin configuration. They are collected in
//! [`ShoppingListError`] so every layer can use the same [`Result`] alias.

use thiserror::Error;

/// The main error type for shopping list operations.
///
/// # Examples
///
/// ```
/// use shopping_list::ShoppingListError;
///
/// let err = ShoppingListError::Config("appearance must be dark or light".to_string());
/// assert_eq!(err.to_string(), "Configuration error: appearance must be dark or light");
/// ```
#[derive(Debug, Error)]
pub enum ShoppingListError {
    /// Filesystem or I/O operation failed.
    ///
    /// Raised when a custom theme file cannot be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme definition could not be parsed or is unknown.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is present but malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ShoppingListError {
    fn from(err: toml::de::Error) -> Self {
        Self::Theme(err.to_string())
    }
}

/// A specialized `Result` type for shopping list operations.
pub type Result<T> = std::result::Result<T, ShoppingListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }

        let err = read().unwrap_err();
        assert!(matches!(err, ShoppingListError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn toml_errors_become_theme_errors() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("name = ");
        let err: ShoppingListError = parsed.unwrap_err().into();
        assert!(matches!(err, ShoppingListError::Theme(_)));
    }
}
