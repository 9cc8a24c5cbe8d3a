//! # Null Registry
//!
//! Startup audit of the null records an engine declares.
//!
//! Lookups never consult the registry: [`null_of`](crate::null_of) is
//! resolved per type at compile time. The registry exists so an engine can
//! list its records once at initialization, detect a record declared twice,
//! and check the compiled-in nulls against a [`NullManifest`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! static NULLS: NullRegistry = NullRegistry::new();
//!
//! NULLS.register::<Index>()?;
//! NULLS.register::<LangSys>()?;
//! NULLS.verify(&NullManifest::from_file("data/nulls.toml")?)?;
//! ```

mod manifest;

use std::any::{type_name, TypeId};
use std::mem::size_of;

use parking_lot::RwLock;

use crate::error::{NullError, NullResult};
use crate::memory::{null_bytes_of, NullRecord};

pub use manifest::{ManifestRecord, NullManifest};

/// One registered record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    type_id: TypeId,
    /// Full Rust type name.
    pub type_name: &'static str,
    /// Short record name, as used in manifests.
    pub name: &'static str,
    /// Record size in bytes.
    pub size: usize,
    /// Whether the null comes from an explicit override.
    pub overridden: bool,
    /// Byte encoding of the null record.
    pub null: &'static [u8],
}

/// Registry of null records, written during initialization.
///
/// Const-constructible so it can live in a `static`, and internally
/// synchronized so initialization may run on several threads.
pub struct NullRegistry {
    entries: RwLock<Vec<RegistryEntry>>,
}

impl NullRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: parking_lot::const_rwlock(Vec::new()),
        }
    }

    /// Registers record type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`NullError::DuplicateOverride`] if `T` is already registered,
    /// and [`NullError::NameCollision`] if another type already holds the
    /// manifest name of `T`.
    pub fn register<T: NullRecord>(&self) -> NullResult<()> {
        let type_id = TypeId::of::<T>();
        let type_name = type_name::<T>();
        let mut entries = self.entries.write();

        if entries.iter().any(|entry| entry.type_id == type_id) {
            tracing::warn!(record = type_name, "duplicate null registration rejected");
            return Err(NullError::DuplicateOverride { type_name });
        }

        let name = short_name(type_name);
        if let Some(existing) = entries.iter().find(|entry| entry.name == name) {
            tracing::warn!(
                record = type_name,
                existing = existing.type_name,
                "manifest name collision rejected"
            );
            return Err(NullError::NameCollision {
                name,
                existing: existing.type_name,
                type_name,
            });
        }

        let entry = RegistryEntry {
            type_id,
            type_name,
            name,
            size: size_of::<T>(),
            overridden: T::OVERRIDDEN,
            null: null_bytes_of::<T>(),
        };
        tracing::debug!(
            record = entry.name,
            size = entry.size,
            overridden = entry.overridden,
            "registered null record"
        );
        entries.push(entry);
        Ok(())
    }

    /// Whether record type `T` is registered.
    #[must_use]
    pub fn contains<T: NullRecord>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.entries.read().iter().any(|entry| entry.type_id == type_id)
    }

    /// Number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no record is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Null bytes of the record registered under `name`.
    #[must_use]
    pub fn null_bytes_of(&self, name: &str) -> Option<&'static [u8]> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.null)
    }

    /// Snapshot of all entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> Vec<RegistryEntry> {
        self.entries.read().clone()
    }

    /// Checks every record listed in `manifest` against its compiled-in null.
    ///
    /// All mismatches are logged; the first one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`NullError::UnknownRecord`] for a record that was never
    /// registered and [`NullError::NullMismatch`] when the bytes differ.
    pub fn verify(&self, manifest: &NullManifest) -> NullResult<()> {
        let mut first_error = None;

        for record in &manifest.records {
            let outcome = match self.null_bytes_of(&record.name) {
                None => Err(NullError::UnknownRecord(record.name.clone())),
                Some(actual) if actual != record.null.as_slice() => {
                    Err(NullError::NullMismatch {
                        name: record.name.clone(),
                        expected: record.null.clone(),
                        actual: actual.to_vec(),
                    })
                }
                Some(_) => Ok(()),
            };

            if let Err(err) = outcome {
                tracing::warn!(record = record.name.as_str(), "{}", err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                tracing::info!(records = manifest.records.len(), "null manifest verified");
                Ok(())
            }
        }
    }

    /// Manifest describing every registered record.
    #[must_use]
    pub fn to_manifest(&self) -> NullManifest {
        NullManifest {
            records: self
                .entries
                .read()
                .iter()
                .map(|entry| ManifestRecord {
                    name: entry.name.to_owned(),
                    null: entry.null.to_vec(),
                })
                .collect(),
        }
    }
}

impl Default for NullRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_name(type_name: &'static str) -> &'static str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit("::").next().unwrap_or(base)
}
