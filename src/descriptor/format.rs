//! Contribution descriptor file formats.

use std::fmt;

/// Format of a contribution descriptor, determined by its file name.
///
/// Current contributions ship a `descriptor.json`. Older contributions ship one
/// of `action.json`, `trigger.json` or `activity.json` and must carry a `ref`
/// field naming their package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorFormat {
    /// `descriptor.json`
    Current,
    /// `action.json`, `trigger.json` or `activity.json`
    Legacy,
}

impl DescriptorFormat {
    /// File name of current-format descriptors.
    pub const CURRENT_FILE_NAME: &'static str = "descriptor.json";

    /// File names of legacy-format descriptors.
    pub const LEGACY_FILE_NAMES: [&'static str; 3] = ["action.json", "trigger.json", "activity.json"];

    /// Classify a file name, case-insensitively.
    ///
    /// Returns `None` when the file is not a descriptor candidate.
    ///
    /// ```rust
    /// use contrib_resolver::descriptor::DescriptorFormat;
    ///
    /// assert_eq!(DescriptorFormat::classify("Descriptor.JSON"), Some(DescriptorFormat::Current));
    /// assert_eq!(DescriptorFormat::classify("trigger.json"), Some(DescriptorFormat::Legacy));
    /// assert_eq!(DescriptorFormat::classify("README.md"), None);
    /// ```
    #[must_use]
    pub fn classify(file_name: &str) -> Option<Self> {
        let lowercase = file_name.to_lowercase();
        if lowercase == Self::CURRENT_FILE_NAME {
            Some(Self::Current)
        } else if Self::LEGACY_FILE_NAMES.contains(&lowercase.as_str()) {
            Some(Self::Legacy)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

impl fmt::Display for DescriptorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}
