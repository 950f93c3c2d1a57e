//! Reconciliation of discovered references with declared imports.
//!
//! Every discovered reference is looked up in the declared imports. A declared
//! import matches a reference when the last segment of its package path, or its
//! alias, equals the reference. All matching declared imports are kept, in
//! declaration order; a reference with no match becomes an import parsed from
//! the reference string itself.
//!
//! The output follows reference order, not declaration order, and is not
//! deduplicated: one reference matched by two declared imports yields both, and
//! a reference found twice yields its imports twice.

use tracing::{debug, trace};

use crate::core::Result;
use crate::import::{Import, Imports};

/// Resolve `refs` against the `declared` import strings.
///
/// # Errors
///
/// [`crate::core::ResolveError::InvalidImport`] if a declared import, or an
/// unmatched reference, cannot be parsed.
///
/// # Examples
///
/// ```rust
/// use contrib_resolver::resolver::reconcile_imports;
///
/// let declared = vec!["github.com/x/y@v1".to_string()];
/// let imports = reconcile_imports(&["y".to_string(), "z".to_string()], &declared).unwrap();
///
/// assert_eq!(imports[0].to_string(), "github.com/x/y@v1");
/// assert_eq!(imports[1].to_string(), "z");
/// ```
pub fn reconcile_imports(refs: &[String], declared: &[String]) -> Result<Imports> {
    if refs.is_empty() {
        return Ok(Imports::new());
    }

    let declared = declared.iter().map(|raw| Import::parse(raw)).collect::<Result<Vec<_>>>()?;

    let mut result = Imports::with_capacity(refs.len());
    for key in refs {
        let before = result.len();
        result.extend(declared.iter().filter(|import| import.matches_ref(key)).cloned());

        if result.len() == before {
            debug!("No declared import for '{}', using it as an import path", key);
            result.push(Import::parse(key)?);
        } else {
            trace!("Reference '{}' matched {} declared import(s)", key, result.len() - before);
        }
    }

    Ok(result)
}
