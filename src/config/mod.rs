//! Resolver configuration.
//!
//! Resolution has two knobs, both optional:
//!
//! ```toml
//! # Sort resolved imports by canonical import string instead of discovery order
//! sort_imports = true
//!
//! # Scan descriptor text for "ref" entries when no imports are declared
//! legacy_fallback = true
//! ```
//!
//! # Configuration Priority
//!
//! 1. An explicit file passed to [`ResolverConfig::load`]
//! 2. The file named by the `CONTRIB_RESOLVER_CONFIG` environment variable
//! 3. Default values

mod parser;

pub use parser::parse_config;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::{ResolveError, Result};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "CONTRIB_RESOLVER_CONFIG";

/// Options controlling how imports are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Sort resolved imports lexicographically by canonical import.
    ///
    /// Off by default: results keep discovery order.
    pub sort_imports: bool,

    /// Fall back to plain-text `"ref"` scanning when a descriptor declares no imports.
    pub legacy_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            sort_imports: false,
            legacy_fallback: true,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Config`] if the file cannot be read or is not a valid
    /// configuration.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading resolver configuration from {}", path.display());
        parse_config(path).map_err(|e| ResolveError::Config {
            message: e.to_string(),
        })
    }

    /// Load configuration from `CONTRIB_RESOLVER_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(&PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }
}
