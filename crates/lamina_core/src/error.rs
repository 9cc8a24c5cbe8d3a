//! # Null Registry Error Types
//!
//! Errors raised while declaring and auditing null records at startup.
//! Lookups themselves never fail: an absent record is substituted, not
//! reported.

use thiserror::Error;

/// Errors that can occur while registering or auditing null records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NullError {
    /// The same record type was registered twice.
    #[error("duplicate null registration for {type_name}")]
    DuplicateOverride {
        /// Full Rust type name of the record.
        type_name: &'static str,
    },

    /// Two distinct record types would share one manifest name.
    #[error("manifest name {name} of {type_name} is already taken by {existing}")]
    NameCollision {
        /// Manifest name both types map to.
        name: &'static str,
        /// Full type name of the record registered first.
        existing: &'static str,
        /// Full type name of the rejected record.
        type_name: &'static str,
    },

    /// A null manifest could not be parsed.
    #[error("invalid null manifest: {0}")]
    ManifestParse(String),

    /// A null manifest could not be encoded.
    #[error("cannot encode null manifest: {0}")]
    ManifestEncode(String),

    /// A null manifest file could not be read.
    #[error("cannot read null manifest {path}: {reason}")]
    ManifestIo {
        /// Path of the manifest file.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The manifest names a record that was never registered.
    #[error("unknown null record: {0}")]
    UnknownRecord(String),

    /// The compiled-in null of a record differs from the manifest.
    #[error("null mismatch for {name}: expected {expected:02X?}, found {actual:02X?}")]
    NullMismatch {
        /// Record name.
        name: String,
        /// Bytes listed in the manifest.
        expected: Vec<u8>,
        /// Bytes of the compiled-in null.
        actual: Vec<u8>,
    },
}

/// Result type for null registry operations.
pub type NullResult<T> = Result<T, NullError>;
