//! Reference extraction from untyped configuration trees.
//!
//! Triggers, resources and actions have no fixed shape. Every object in them
//! that has a `"ref"` key names exactly one contribution; the walk collects
//! those names depth-first.
//!
//! # Rules
//!
//! - **Object with `"ref"`**: the value, with leading and trailing `#` removed, is
//!   the object's only contribution. Sibling keys are not visited, so nested
//!   `"ref"` entries below a referencing object are never reported.
//! - **Object without `"ref"`**: every value is visited.
//! - **Array**: every element is visited in order.
//! - **Scalars**: contribute nothing.
//!
//! Object keys are visited in the map's iteration order (lexicographic with the
//! default `serde_json` map); callers must not depend on ordering across keys.

use serde_json::Value;
use tracing::trace;

use crate::core::{ResolveError, Result};
use crate::descriptor::AppConfig;

/// Key naming a contribution reference.
pub const REF_KEY: &str = "ref";

/// Collect every contribution reference in `value`.
///
/// # Errors
///
/// [`ResolveError::TypeMismatch`] if a `"ref"` value is not a string.
///
/// # Examples
///
/// ```rust
/// use contrib_resolver::resolver::extract_refs;
/// use serde_json::json;
///
/// let refs = extract_refs(&json!({"ref": "#foo#", "other": {"ref": "bar"}})).unwrap();
/// assert_eq!(refs, vec!["foo"]);
/// ```
pub fn extract_refs(value: &Value) -> Result<Vec<String>> {
    let mut refs = Vec::new();
    collect_refs(value, &mut refs)?;
    Ok(refs)
}

/// References of a configuration: triggers, then resources, then actions.
pub fn refs_from_config(config: &AppConfig) -> Result<Vec<String>> {
    let mut refs = extract_refs(&config.triggers)?;
    refs.extend(extract_refs(&config.resources)?);
    refs.extend(extract_refs(&config.actions)?);
    Ok(refs)
}

fn collect_refs(value: &Value, refs: &mut Vec<String>) -> Result<()> {
    match value {
        Value::Object(map) => {
            if let Some(reference) = map.get(REF_KEY) {
                let reference = reference.as_str().ok_or_else(|| ResolveError::TypeMismatch {
                    found: reference.to_string(),
                })?;
                trace!("Found reference '{}'", reference);
                refs.push(reference.trim_matches('#').to_string());
                return Ok(());
            }
            for child in map.values() {
                collect_refs(child, refs)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_refs(item, refs)?;
            }
        }
        _ => {}
    }
    Ok(())
}
