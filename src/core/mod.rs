//! Core types for contribution dependency resolution
//!
//! Holds the error type shared by every module and the user-facing error
//! rendering used for diagnostics.
//!
//! - [`ResolveError`] - Enumerated error kinds for all failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format

pub mod error;

pub use error::{ErrorContext, ResolveError, Result, user_friendly_error};
