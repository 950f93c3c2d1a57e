//! Contribution descriptor discovery.
//!
//! A contribution directory holds one descriptor file, either `descriptor.json`
//! or, for older contributions, one of `action.json`, `trigger.json` or
//! `activity.json`. File names are matched case-insensitively.
//!
//! # Selection
//!
//! Entries are examined in directory-listing order (unsorted). The first
//! candidate that parses and has a non-empty `type` is the descriptor.
//! Candidates that fail to read or parse, or have no `type`, are skipped. A
//! legacy candidate that is selected but has no `ref` is an error; scanning
//! stops there.
//!
//! # Example
//!
//! ```rust,no_run
//! use contrib_resolver::locator::find_contrib_descriptor;
//! use std::path::Path;
//!
//! # fn example() -> contrib_resolver::core::Result<()> {
//! match find_contrib_descriptor(Path::new("vendor/activity/log"))? {
//!     Some(desc) => println!("{} ({})", desc.name, desc.contrib_type()),
//!     None => println!("not a contribution"),
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use tracing::{debug, warn};

use crate::core::{ResolveError, Result, user_friendly_error};
use crate::descriptor::{ContribDescriptor, DescriptorFormat};

/// Find the contribution descriptor in `dir`.
///
/// Returns `Ok(None)` when no entry qualifies.
///
/// # Errors
///
/// - [`ResolveError::Io`] if `dir` cannot be listed; the failure is also
///   printed to stderr
/// - [`ResolveError::InvalidDescriptor`] if the selected descriptor is a legacy
///   file without a `ref` field
pub fn find_contrib_descriptor(dir: &Path) -> Result<Option<ContribDescriptor>> {
    let entries = std::fs::read_dir(dir).map_err(|e| report(ResolveError::io(dir, e)))?;

    for entry in entries {
        let entry = entry.map_err(|e| report(ResolveError::io(dir, e)))?;
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();

        let Some(format) = DescriptorFormat::classify(&file_name) else {
            continue;
        };

        let mut descriptor = match ContribDescriptor::load(&entry.path()) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                debug!("Skipping descriptor candidate {}: {}", file_name, e);
                continue;
            }
        };

        if descriptor.kind.is_empty() {
            debug!("Skipping {}: no type declared", file_name);
            continue;
        }

        if format.is_legacy() && descriptor.legacy_ref.is_empty() {
            return Err(ResolveError::InvalidDescriptor {
                file: file_name.into_owned(),
            });
        }

        descriptor.is_legacy = format.is_legacy();
        debug!("Found {} descriptor {} in {}", format, file_name, dir.display());
        return Ok(Some(descriptor));
    }

    Ok(None)
}

/// Print a listing failure to the diagnostic stream and hand it back.
fn report(error: ResolveError) -> ResolveError {
    warn!("{}", error);
    user_friendly_error(anyhow::Error::from(error.clone())).display();
    error
}
