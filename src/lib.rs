//! Contribution dependency resolution for declarative applications.
//!
//! Before an application can be packaged, the build needs the list of
//! contribution packages (triggers, activities, actions) it depends on. This
//! crate computes that list from the application's JSON descriptors and reads
//! the metadata of contribution packages on disk. It does not fetch, verify or
//! build anything.
//!
//! # Core Modules
//!
//! - [`resolver`] - Reference extraction, import reconciliation and legacy fallback
//! - [`locator`] - Finding and validating the descriptor of a contribution directory
//! - [`descriptor`] - Application, configuration and contribution descriptor models
//! - [`import`] - Import string parsing (`[alias ]path[@version][:relative]`)
//!
//! ## Supporting Modules
//!
//! - [`config`] - Resolver options (ordering, legacy fallback)
//! - [`core`] - Error types and user-facing error rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use contrib_resolver::locator::find_contrib_descriptor;
//! use contrib_resolver::resolver::imports_from_json;
//! use std::path::Path;
//!
//! # fn example() -> contrib_resolver::core::Result<()> {
//! let imports = imports_from_json(Path::new("app/flogo.json"))?;
//! for import in &imports {
//!     println!("{} -> {}", import.canonical_alias(), import.canonical_import_path());
//! }
//!
//! if let Some(desc) = find_contrib_descriptor(Path::new("vendor/trigger/rest"))? {
//!     println!("{} is a {} contribution", desc.name, desc.contrib_type());
//! }
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod core;
pub mod resolver;
pub mod locator;

// Data models
pub mod descriptor;
pub mod import;

// Supporting modules
pub mod config;
