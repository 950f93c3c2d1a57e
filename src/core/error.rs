//! Error handling for contribution dependency resolution
//!
//! This module provides the typed error returned by every resolver operation and a
//! user-facing wrapper for printing errors to the diagnostic stream.
//!
//! # Architecture
//!
//! - [`ResolveError`] - Enumerated error kinds for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//!
//! # Error Kinds
//!
//! - **I/O**: [`ResolveError::Io`] - a file or directory could not be read or listed
//! - **Parsing**: [`ResolveError::Parse`] - a malformed payload, or JSON that does not
//!   match the expected descriptor shape
//! - **Descriptors**: [`ResolveError::InvalidDescriptor`] - a legacy descriptor without
//!   its required `ref` field
//! - **Configuration trees**: [`ResolveError::TypeMismatch`] - a `"ref"` value that is not
//!   a string
//! - **Imports**: [`ResolveError::InvalidImport`] - an import string the parser rejects
//! - **Configuration**: [`ResolveError::Config`] - a resolver configuration file that
//!   cannot be read or parsed
//!
//! # Examples
//!
//! ```rust,no_run
//! use contrib_resolver::core::{ResolveError, user_friendly_error};
//!
//! fn locate() -> Result<(), ResolveError> {
//!     Err(ResolveError::InvalidDescriptor {
//!         file: "trigger.json".to_string(),
//!     })
//! }
//!
//! if let Err(e) = locate() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display(); // Shows colored error with suggestions
//! }
//! ```

use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

/// The error type for resolver operations
///
/// Each variant carries enough context (file path, offending value) to produce a
/// useful message without the caller having to remember what it was doing.
///
/// I/O and parse failures are always recoverable: no operation in this crate
/// terminates the process.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A file or directory could not be opened, read, or listed
    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        /// The path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A payload is malformed or does not match the expected shape
    ///
    /// # Fields
    /// - `path`: The file that failed to parse, or `<inline>` for in-memory payloads
    /// - `reason`: The parser's error message
    #[error("Failed to parse '{path}': {reason}")]
    Parse {
        /// The file (or payload label) that failed to parse
        path: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// A legacy-format descriptor is missing its required `ref` field
    #[error("invalid legacy contribution descriptor: {file}")]
    InvalidDescriptor {
        /// File name of the offending descriptor
        file: String,
    },

    /// A `"ref"` key inside a configuration tree holds a non-string value
    #[error("Expected a string value for \"ref\", found {found}")]
    TypeMismatch {
        /// JSON rendering of the value that was found
        found: String,
    },

    /// An import string could not be parsed
    #[error("Invalid import '{import}': {reason}")]
    InvalidImport {
        /// The raw import string
        import: String,
        /// Why it was rejected
        reason: String,
    },

    /// Resolver configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl ResolveError {
    /// Build an [`ResolveError::Io`] for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a [`ResolveError::Parse`] for `path`.
    pub fn parse(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Clone for ResolveError {
    fn clone(&self) -> Self {
        match self {
            // io::Error is not Clone, keep its kind and message
            Self::Io {
                path,
                source,
            } => Self::Io {
                path: path.clone(),
                source: std::io::Error::new(source.kind(), source.to_string()),
            },
            Self::Parse {
                path,
                reason,
            } => Self::Parse {
                path: path.clone(),
                reason: reason.clone(),
            },
            Self::InvalidDescriptor {
                file,
            } => Self::InvalidDescriptor {
                file: file.clone(),
            },
            Self::TypeMismatch {
                found,
            } => Self::TypeMismatch {
                found: found.clone(),
            },
            Self::InvalidImport {
                import,
                reason,
            } => Self::InvalidImport {
                import: import.clone(),
                reason: reason.clone(),
            },
            Self::Config {
                message,
            } => Self::Config {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`ResolveError`] and adds optional suggestions for
/// resolution and additional details.
///
/// # Display Format
///
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable steps in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use contrib_resolver::core::{ErrorContext, ResolveError};
///
/// let context = ErrorContext::new(ResolveError::Config {
///     message: "unknown field".to_string(),
/// })
/// .with_suggestion("Remove the unknown field from the configuration file");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ResolveError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ResolveError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`ResolveError`] and [`std::io::Error`]; anything else is wrapped as a
/// configuration-free parse failure carrying the error's message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(resolve_error) = error.downcast_ref::<ResolveError>() {
        return create_error_context(resolve_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let ctx = ErrorContext::new(ResolveError::io(
            "unknown",
            std::io::Error::new(io_error.kind(), io_error.to_string()),
        ));
        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                ctx.with_suggestion("Check the permissions of the file or directory")
            }
            std::io::ErrorKind::NotFound => {
                ctx.with_suggestion("Check that the file or directory exists and the path is correct")
            }
            _ => ctx,
        };
    }

    ErrorContext::new(ResolveError::Parse {
        path: "<unknown>".to_string(),
        reason: format!("{error:#}"),
    })
}

fn create_error_context(error: ResolveError) -> ErrorContext {
    match &error {
        ResolveError::Io {
            path,
            source,
        } => {
            let suggestion = match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Check that '{}' exists and the path is correct", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Check the permissions of '{}'", path.display())
                }
                _ => format!("Verify that '{}' is readable", path.display()),
            };
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        ResolveError::Parse {
            path,
            ..
        } => {
            let suggestion = format!("Check the syntax of '{path}'");
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("The content must be well-formed and match the expected structure")
        }
        ResolveError::InvalidDescriptor {
            file,
        } => {
            let suggestion = format!(
                "Add a \"ref\" field to '{file}' or rename it to descriptor.json"
            );
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("Legacy descriptors (action.json, trigger.json, activity.json) must declare their package reference")
        }
        ResolveError::TypeMismatch {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Every \"ref\" entry in triggers, resources and actions must be a string"),
        ResolveError::InvalidImport {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Imports use the form '[alias ]module/path[@version][:relative/path]'"),
        ResolveError::Config {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the resolver configuration file, or unset CONTRIB_RESOLVER_CONFIG"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let error = ResolveError::InvalidDescriptor {
            file: "trigger.json".to_string(),
        };
        assert_eq!(error.to_string(), "invalid legacy contribution descriptor: trigger.json");

        let error = ResolveError::TypeMismatch {
            found: "42".to_string(),
        };
        assert!(error.to_string().contains("42"));

        let error = ResolveError::io("/tmp/app.json", Error::new(ErrorKind::NotFound, "gone"));
        let display = error.to_string();
        assert!(display.contains("/tmp/app.json"));
        assert!(display.contains("gone"));
    }

    #[test]
    fn test_clone_preserves_io_kind() {
        let error =
            ResolveError::io("app.json", Error::new(ErrorKind::PermissionDenied, "denied"));
        match error.clone() {
            ResolveError::Io {
                source,
                ..
            } => assert_eq!(source.kind(), ErrorKind::PermissionDenied),
            other => panic!("Expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(ResolveError::Config {
            message: "bad".to_string(),
        })
        .with_suggestion("fix it")
        .with_details("because");

        let display = format!("{ctx}");
        assert!(display.contains("Configuration error: bad"));
        assert!(display.contains("Details: because"));
        assert!(display.contains("Suggestion: fix it"));
    }

    #[test]
    fn test_user_friendly_error_invalid_descriptor() {
        let error = ResolveError::InvalidDescriptor {
            file: "action.json".to_string(),
        };
        let ctx = user_friendly_error(anyhow::Error::from(error));

        match ctx.error {
            ResolveError::InvalidDescriptor {
                ..
            } => {}
            _ => panic!("Expected InvalidDescriptor"),
        }
        assert!(ctx.suggestion.unwrap().contains("action.json"));
        assert!(ctx.details.is_some());
    }

    #[test]
    fn test_user_friendly_error_io() {
        let anyhow_error = anyhow::Error::from(Error::new(ErrorKind::NotFound, "missing"));
        let ctx = user_friendly_error(anyhow_error);

        assert!(matches!(ctx.error, ResolveError::Io { .. }));
        assert!(ctx.suggestion.unwrap().contains("exists"));
    }

    #[test]
    fn test_user_friendly_error_generic() {
        let ctx = user_friendly_error(anyhow::anyhow!("Generic error"));
        match ctx.error {
            ResolveError::Parse {
                reason,
                ..
            } => assert_eq!(reason, "Generic error"),
            _ => panic!("Expected Parse error"),
        }
    }
}
