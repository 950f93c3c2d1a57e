//! Generic TOML configuration parsing.
//!
//! Works with any `DeserializeOwned` type and reports the file path in both
//! read and parse failures.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::core::{ResolveError, Result};

/// Parse a TOML configuration file into the specified type.
///
/// # Errors
///
/// - [`ResolveError::Io`] if the file cannot be read
/// - [`ResolveError::Parse`] if the content is not valid TOML for `T`
pub fn parse_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| ResolveError::io(path, e))?;
    toml::from_str(&content).map_err(|e| ResolveError::parse(path, e))
}
