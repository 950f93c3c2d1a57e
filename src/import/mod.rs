//! Import declarations and their parser.
//!
//! An import names one contribution package an application depends on. The raw
//! form accepted by [`Import::parse`] is:
//!
//! ```text
//! [alias ]module/path[@version][:relative/path]
//! ```
//!
//! - `github.com/project-flogo/contrib/activity/rest`
//! - `github.com/project-flogo/contrib/activity/rest@v0.9.0`
//! - `myrest github.com/project-flogo/contrib@v0.9.0:/activity/rest`
//!
//! The resolver only relies on two accessors: [`Import::canonical_import_path`]
//! (whose last segment is matched against `ref` values) and [`Import::alias`].
//!
//! # Examples
//!
//! ```rust
//! use contrib_resolver::import::Import;
//!
//! # fn example() -> contrib_resolver::core::Result<()> {
//! let import = Import::parse("rest github.com/project-flogo/contrib@v1.0.0:/activity/rest")?;
//! assert_eq!(import.alias(), Some("rest"));
//! assert_eq!(import.version(), Some("v1.0.0"));
//! assert_eq!(
//!     import.canonical_import_path(),
//!     "github.com/project-flogo/contrib/activity/rest"
//! );
//! # Ok(())
//! # }
//! ```

use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::core::{ResolveError, Result};

/// Pattern: `alias module@version:relative`, every part but the module optional.
const IMPORT_GRAMMAR: &str = r"^(?:([^ ]*) +)?([^@:]*)@?([^:]*):?(.*)$";

/// A parsed dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    module_path: String,
    relative_import_path: String,
    version: Option<String>,
    alias: Option<String>,
}

/// Ordered list of parsed imports.
pub type Imports = Vec<Import>;

impl Import {
    /// Parse a raw import string.
    ///
    /// Surrounding whitespace is ignored. Fails with
    /// [`ResolveError::InvalidImport`] when no module path is present.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let pattern = Regex::new(IMPORT_GRAMMAR).map_err(|e| ResolveError::InvalidImport {
            import: raw.to_string(),
            reason: e.to_string(),
        })?;

        let captures = pattern.captures(trimmed).ok_or_else(|| ResolveError::InvalidImport {
            import: raw.to_string(),
            reason: "does not match '[alias ]path[@version][:relative]'".to_string(),
        })?;

        let group = |index: usize| {
            captures.get(index).map(|m| m.as_str().trim()).filter(|s| !s.is_empty())
        };

        let module_path = group(2).ok_or_else(|| ResolveError::InvalidImport {
            import: raw.to_string(),
            reason: "missing module path".to_string(),
        })?;

        Ok(Self {
            module_path: module_path.to_string(),
            relative_import_path: group(4).unwrap_or_default().to_string(),
            version: group(3).map(str::to_string),
            alias: group(1).map(str::to_string),
        })
    }

    /// Module path, without version or relative path.
    #[must_use]
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Path of the package inside its module, empty when the module is the package.
    #[must_use]
    pub fn relative_import_path(&self) -> &str {
        &self.relative_import_path
    }

    /// Version after `@`, if one was declared.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Alias before the module path, if one was declared.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Full package path: module path joined with the relative path.
    #[must_use]
    pub fn canonical_import_path(&self) -> String {
        if self.relative_import_path.is_empty() {
            return self.module_path.clone();
        }
        format!(
            "{}/{}",
            self.module_path.trim_end_matches('/'),
            self.relative_import_path.trim_start_matches('/')
        )
    }

    /// The alias if declared, otherwise the last segment of the package path.
    #[must_use]
    pub fn canonical_alias(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => path_tail(&self.canonical_import_path()).to_string(),
        }
    }

    /// Normalized string form, parseable back by [`Import::parse`].
    #[must_use]
    pub fn canonical_import(&self) -> String {
        let mut out = String::new();
        if let Some(alias) = &self.alias {
            out.push_str(alias);
            out.push(' ');
        }
        out.push_str(&self.module_path);
        if let Some(version) = &self.version {
            out.push('@');
            out.push_str(version);
        }
        if !self.relative_import_path.is_empty() {
            out.push(':');
            out.push_str(&self.relative_import_path);
        }
        out
    }

    /// Whether `key` names this import, by package-path tail or by alias.
    #[must_use]
    pub fn matches_ref(&self, key: &str) -> bool {
        path_tail(&self.canonical_import_path()) == key || self.alias() == Some(key)
    }
}

impl FromStr for Import {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_import())
    }
}

/// Last `/`-separated segment of `path`, ignoring trailing slashes.
#[must_use]
pub fn path_tail(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Split an import path on its first `@` into `(path, version)`.
///
/// The version is empty when there is no `@`. Anything after a second `@`
/// stays part of the version.
///
/// ```rust
/// use contrib_resolver::import::split_import_path;
///
/// assert_eq!(split_import_path("foo/bar@v2.0.0"), ("foo/bar", "v2.0.0"));
/// assert_eq!(split_import_path("foo/bar"), ("foo/bar", ""));
/// ```
#[must_use]
pub fn split_import_path(path: &str) -> (&str, &str) {
    path.split_once('@').unwrap_or((path, ""))
}
