//! Manufacturer resolution by exact WMI match.

use std::collections::HashMap;

use crate::error::VinError;

/// Number of characters in a World Manufacturer Identifier.
pub const WMI_LENGTH: usize = 3;

/// Exact three-character WMI → manufacturer lookup.
#[derive(Debug, Clone, Default)]
pub struct ManufacturerTable {
    manufacturers: HashMap<String, String>,
}

impl ManufacturerTable {
    /// Build from `(wmi, manufacturer)` pairs.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        Self {
            manufacturers: entries
                .into_iter()
                .map(|(code, name)| (code.clone(), name.clone()))
                .collect(),
        }
    }

    /// Manufacturer registered for `code`.
    ///
    /// A code that is not exactly three characters is a caller error and
    /// fails with [`VinError::InvalidManufacturerCode`]. A well-formed code
    /// without an entry is `Ok(None)`.
    pub fn lookup(&self, code: &str) -> Result<Option<&str>, VinError> {
        if code.chars().count() != WMI_LENGTH {
            return Err(VinError::InvalidManufacturerCode(code.into()));
        }
        Ok(self.get(code))
    }

    /// Unchecked lookup for callers that already hold a three-character WMI.
    pub(crate) fn get(&self, wmi: &str) -> Option<&str> {
        self.manufacturers.get(wmi).map(String::as_str)
    }

    /// Number of listed WMIs.
    pub fn len(&self) -> usize {
        self.manufacturers.len()
    }

    /// True if no manufacturer is listed.
    pub fn is_empty(&self) -> bool {
        self.manufacturers.is_empty()
    }
}
