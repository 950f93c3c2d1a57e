//! Dependency resolution for application descriptors.
//!
//! Two entry points compute the contributions an application depends on:
//!
//! ## Configuration path ([`Resolver::imports_from_json`])
//!
//! 1. **Extraction**: [`extract_refs`] walks `triggers`, `resources` and `actions`
//!    (in that order) and collects every `"ref"` value
//! 2. **Reconciliation**: [`reconcile_imports`] pairs each reference with the
//!    declared imports it names, or synthesizes an import from the reference
//!
//! ## Descriptor path ([`Resolver::get_imports`])
//!
//! 1. The descriptor's declared `imports` are deduplicated
//! 2. If none are declared, [`scan_legacy_imports`] recovers references from the
//!    raw descriptor text
//! 3. Every unique string is parsed into an [`Import`]
//!
//! # Ordering
//!
//! By default results keep discovery order: reference order for the
//! configuration path, first-declaration order for the descriptor path. With
//! [`ResolverConfig::sort_imports`] both are sorted by canonical import string.
//!
//! # Example
//!
//! ```rust,no_run
//! use contrib_resolver::config::ResolverConfig;
//! use contrib_resolver::resolver::Resolver;
//! use std::path::Path;
//!
//! # fn example() -> contrib_resolver::core::Result<()> {
//! let resolver = Resolver::new(ResolverConfig::from_env()?);
//! for import in resolver.imports_from_json(Path::new("flogo.json"))? {
//!     println!("{import}");
//! }
//! # Ok(())
//! # }
//! ```

mod extractor;
mod legacy;
mod reconciler;

pub use extractor::{REF_KEY, extract_refs, refs_from_config};
pub use legacy::scan_legacy_imports;
pub use reconciler::reconcile_imports;

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::config::ResolverConfig;
use crate::core::Result;
use crate::descriptor::{AppConfig, AppDescriptor};
use crate::import::{Import, Imports};

/// Resolves application dependencies according to a [`ResolverConfig`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the given configuration.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self {
            config,
        }
    }

    /// Configuration this resolver was built with.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the imports an application configuration file depends on.
    ///
    /// # Errors
    ///
    /// - [`crate::core::ResolveError::Io`] if the file cannot be read
    /// - [`crate::core::ResolveError::Parse`] if it is not a valid configuration
    /// - [`crate::core::ResolveError::TypeMismatch`] if a `"ref"` is not a string
    /// - [`crate::core::ResolveError::InvalidImport`] if an import cannot be parsed
    pub fn imports_from_json(&self, path: &Path) -> Result<Imports> {
        let config = AppConfig::load(path)?;
        let imports = self.imports_from_config(&config)?;
        info!("Resolved {} import(s) from {}", imports.len(), path.display());
        Ok(imports)
    }

    /// Resolve the imports of an already parsed configuration.
    pub fn imports_from_config(&self, config: &AppConfig) -> Result<Imports> {
        let refs = refs_from_config(config)?;
        debug!("Discovered {} reference(s)", refs.len());
        let imports = reconcile_imports(&refs, &config.imports)?;
        Ok(self.finish(imports))
    }

    /// Unique top-level imports of an application descriptor file.
    ///
    /// Falls back to [`scan_legacy_imports`] when the descriptor declares no
    /// imports and [`ResolverConfig::legacy_fallback`] is enabled.
    ///
    /// # Errors
    ///
    /// - [`crate::core::ResolveError::Io`] if the file cannot be read
    /// - [`crate::core::ResolveError::Parse`] if it is not a valid descriptor
    /// - [`crate::core::ResolveError::InvalidImport`] if an import cannot be parsed
    pub fn get_imports(&self, path: &Path) -> Result<Imports> {
        let descriptor = AppDescriptor::load(path)?;

        let mut seen = HashSet::new();
        let mut unique: Vec<String> = Vec::new();
        let mut add = |raw: String| {
            if seen.insert(raw.clone()) {
                unique.push(raw);
            }
        };

        let declared = descriptor.imports.len();
        descriptor.imports.into_iter().for_each(&mut add);

        if declared == 0 && self.config.legacy_fallback {
            debug!("{} declares no imports, scanning for legacy references", path.display());
            scan_legacy_imports(path)?.into_iter().for_each(&mut add);
        }

        let imports = unique.iter().map(|raw| Import::parse(raw)).collect::<Result<Imports>>()?;
        Ok(self.finish(imports))
    }

    fn finish(&self, mut imports: Imports) -> Imports {
        if self.config.sort_imports {
            imports.sort_by_cached_key(Import::canonical_import);
        }
        imports
    }
}

/// [`Resolver::imports_from_json`] with default configuration.
pub fn imports_from_json(path: &Path) -> Result<Imports> {
    Resolver::default().imports_from_json(path)
}

/// [`Resolver::imports_from_config`] with default configuration.
pub fn imports_from_config(config: &AppConfig) -> Result<Imports> {
    Resolver::default().imports_from_config(config)
}

/// [`Resolver::get_imports`] with default configuration.
pub fn get_imports(path: &Path) -> Result<Imports> {
    Resolver::default().get_imports(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResolveError;
    use serde_json::json;

    fn rendered(imports: &Imports) -> Vec<String> {
        imports.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_imports_from_config() {
        let config = AppConfig {
            imports: vec![
                "github.com/project-flogo/contrib/trigger/rest@v0.9.0".to_string(),
                "github.com/project-flogo/flow".to_string(),
            ],
            triggers: json!([{"id": "http", "ref": "#rest"}]),
            resources: json!([{"data": {"tasks": [{"activity": {"ref": "#log"}}]}}]),
            actions: json!([{"ref": "#flow"}]),
        };

        let imports = imports_from_config(&config).unwrap();
        assert_eq!(
            rendered(&imports),
            vec![
                "github.com/project-flogo/contrib/trigger/rest@v0.9.0",
                "log",
                "github.com/project-flogo/flow",
            ]
        );
    }

    #[test]
    fn test_sorted_output() {
        let config = AppConfig {
            triggers: json!([{"ref": "zeta"}, {"ref": "alpha"}, {"ref": "mid"}]),
            ..Default::default()
        };
        let resolver = Resolver::new(ResolverConfig {
            sort_imports: true,
            ..Default::default()
        });

        let imports = resolver.imports_from_config(&config).unwrap();
        assert_eq!(rendered(&imports), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_type_mismatch_propagates() {
        let config = AppConfig {
            actions: json!({"ref": true}),
            ..Default::default()
        };
        assert!(matches!(imports_from_config(&config), Err(ResolveError::TypeMismatch { .. })));
    }
}
