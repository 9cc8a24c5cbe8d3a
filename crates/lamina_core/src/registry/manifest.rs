//! # Null Manifest
//!
//! TOML description of the expected null encoding of named records,
//! loaded once at startup.
//!
//! ```toml
//! [[record]]
//! name = "Index"
//! null = [0xFF, 0xFF]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NullError, NullResult};

/// Expected null encodings, keyed by record name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullManifest {
    /// Listed records, in file order.
    #[serde(default, rename = "record")]
    pub records: Vec<ManifestRecord>,
}

/// Expected null encoding of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Short record name (last path segment of the Rust type).
    pub name: String,
    /// Byte encoding of the null record.
    pub null: Vec<u8>,
}

impl NullManifest {
    /// Parses a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`NullError::ManifestParse`] on malformed TOML or a byte
    /// outside `0..=255`.
    pub fn from_toml_str(text: &str) -> NullResult<Self> {
        toml::from_str(text).map_err(|e| NullError::ManifestParse(e.to_string()))
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`NullError::ManifestIo`] if the file cannot be read, or
    /// [`NullError::ManifestParse`] if it is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> NullResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| NullError::ManifestIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Encodes the manifest as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`NullError::ManifestEncode`] if serialization fails.
    pub fn to_toml_string(&self) -> NullResult<String> {
        toml::to_string(self).map_err(|e| NullError::ManifestEncode(e.to_string()))
    }

    /// Expected record named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ManifestRecord> {
        self.records.iter().find(|record| record.name == name)
    }
}
