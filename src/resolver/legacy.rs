//! Plain-text import scanning for legacy descriptors.
//!
//! Older descriptors declare no `imports`; their contributions appear only as
//! `"ref"` fields. This scanner is line-based and not JSON-aware: it finds the
//! first `"ref"` token on each line and takes the next quoted string after it.
//! It is only correct when each `ref` sits on its own line, which is how those
//! descriptors were written.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::core::{ResolveError, Result};

const REF_TOKEN: &str = "\"ref\"";

/// Distinct `"ref"` values in `path`, in first-seen order.
///
/// # Errors
///
/// [`ResolveError::Io`] if the file cannot be opened or read.
pub fn scan_legacy_imports(path: &Path) -> Result<Vec<String>> {
    debug!("Scanning {} for legacy references", path.display());
    let file = File::open(path).map_err(|e| ResolveError::io(path, e))?;

    let mut seen = HashSet::new();
    let mut refs = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| ResolveError::io(path, e))?;
        if let Some(reference) = ref_on_line(&line) {
            if seen.insert(reference.to_string()) {
                refs.push(reference.to_string());
            }
        }
    }

    debug!("Found {} legacy reference(s) in {}", refs.len(), path.display());
    Ok(refs)
}

/// Quoted value following the first `"ref"` on `line`.
///
/// An unterminated value runs to the end of the line. Empty values are ignored.
fn ref_on_line(line: &str) -> Option<&str> {
    let after_token = &line[line.find(REF_TOKEN)? + REF_TOKEN.len()..];
    let value = &after_token[after_token.find('"')? + 1..];
    let value = value.find('"').map_or(value, |end| &value[..end]);
    (!value.is_empty()).then_some(value)
}
