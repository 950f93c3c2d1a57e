//! Application and contribution descriptor models.
//!
//! These are passive snapshots of JSON files, constructed once and read by the
//! resolver and the locator:
//!
//! - [`AppDescriptor`] - the application descriptor (`name`, `type`, `imports`, `triggers`, ...)
//! - [`AppConfig`] - the looser application configuration whose `triggers`, `resources`
//!   and `actions` are arbitrary nested JSON
//! - [`ContribDescriptor`] - metadata of one contribution package
//! - [`ContribBundleDescriptor`] - a named group of contributions
//!
//! # Example
//!
//! ```rust
//! use contrib_resolver::descriptor::AppDescriptor;
//!
//! # fn example() -> contrib_resolver::core::Result<()> {
//! let app = AppDescriptor::parse(r##"{
//!     "name": "sample",
//!     "type": "flogo:app",
//!     "version": "0.0.1",
//!     "imports": ["github.com/project-flogo/contrib/trigger/rest"],
//!     "triggers": [{"id": "rest", "ref": "#rest", "type": "t"}]
//! }"##)?;
//! assert_eq!(app.imports.len(), 1);
//! assert_eq!(app.triggers[0].id, "rest");
//! # Ok(())
//! # }
//! ```

mod format;

pub use format::DescriptorFormat;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::core::{ResolveError, Result};

/// Label used in parse errors for in-memory payloads.
const INLINE_PAYLOAD: &str = "<inline>";

/// Descriptor of an application.
///
/// Import strings are free-form and may repeat; duplicates are collapsed by
/// [`crate::resolver::get_imports`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub description: String,
    #[serde(rename = "appModel", skip_serializing_if = "String::is_empty")]
    pub app_model: String,
    /// Raw import strings, in declaration order.
    #[serde(deserialize_with = "null_as_default")]
    pub imports: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub triggers: Vec<TriggerConfig>,
}

/// Trigger entry of an [`AppDescriptor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AppDescriptor {
    /// Parse a descriptor from an in-memory JSON payload.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ResolveError::parse(INLINE_PAYLOAD, e))
    }

    /// Read and parse a descriptor file.
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

/// Application configuration with untyped `triggers`, `resources` and `actions`.
///
/// Each of the three trees is a JSON object or array of arbitrary depth. A
/// missing tree is `null` and contributes no references; any other scalar is
/// rejected as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub imports: Vec<String>,
    #[serde(deserialize_with = "config_tree")]
    pub triggers: Value,
    #[serde(skip_serializing_if = "Value::is_null", deserialize_with = "config_tree")]
    pub resources: Value,
    #[serde(skip_serializing_if = "Value::is_null", deserialize_with = "config_tree")]
    pub actions: Value,
}

impl AppConfig {
    /// Parse a configuration from an in-memory JSON payload.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ResolveError::parse(INLINE_PAYLOAD, e))
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

/// Metadata describing one contribution package.
///
/// A non-empty `type` marks the file as an authoritative descriptor. `is_legacy`
/// is not part of the JSON; the locator sets it from the file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContribDescriptor {
    pub name: String,
    /// Colon-delimited type, e.g. `flogo:activity`.
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub description: String,
    pub homepage: String,
    pub shim: String,
    /// Package reference, required by legacy descriptors only.
    #[serde(rename = "ref", skip_serializing_if = "String::is_empty")]
    pub legacy_ref: String,

    #[serde(skip)]
    pub is_legacy: bool,
}

impl ContribDescriptor {
    /// Read and parse a single descriptor file.
    ///
    /// Parse failures name the file in the returned [`ResolveError::Parse`].
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Contribution category after the `:` in `type`, empty when there is none.
    ///
    /// ```rust
    /// use contrib_resolver::descriptor::ContribDescriptor;
    ///
    /// let desc = ContribDescriptor { kind: "flogo:activity".into(), ..Default::default() };
    /// assert_eq!(desc.contrib_type(), "activity");
    /// ```
    #[must_use]
    pub fn contrib_type(&self) -> &str {
        self.kind.split(':').nth(1).unwrap_or_default()
    }

    /// Format this descriptor was loaded as.
    #[must_use]
    pub const fn format(&self) -> DescriptorFormat {
        if self.is_legacy {
            DescriptorFormat::Legacy
        } else {
            DescriptorFormat::Current
        }
    }
}

/// A named set of contributions shipped together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContribBundleDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "contributions", deserialize_with = "null_as_default")]
    pub contribs: Vec<String>,
}

impl ContribBundleDescriptor {
    /// Read and parse a bundle descriptor file.
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

/// An explicit `null` reads as the field's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A configuration tree: an object, an array, or `null`.
fn config_tree<'de, D>(deserializer: D) -> std::result::Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(_) | Value::Array(_) | Value::Null => Ok(value),
        other => Err(D::Error::custom(format!("expected an object or array, found {other}"))),
    }
}

/// Read `path` and deserialize it as JSON.
///
/// The file handle is closed before parsing starts.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading descriptor {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| ResolveError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ResolveError::parse(path, e))
}
