//! # Lamina Shared
//!
//! Fixed-layout font records read in place from borrowed bytes.
//!
//! ## CRITICAL RULE
//!
//! Every record here is `#[repr(C)]`, alignment 1 and made only of byte
//! arrays, so it can be viewed over any font buffer without copying. Every
//! record declares its null, so an absent record always reads as empty.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod aat;
pub mod array;
pub mod layout;
pub mod scalar;
pub mod table;

pub use aat::AatLookupHeader;
pub use array::{RecordArray, RecordArrayMut};
pub use layout::{CoverageHeader, Index, LangSys, RangeRecord};
pub use scalar::{BeU16, BeU32, Offset16, Tag};
pub use table::{SubtableHeader, TableDirectory, TableRecord};

use lamina_core::{NullRegistry, NullResult};

/// Manifest of the null encodings of every record in this crate.
pub const BUILTIN_MANIFEST: &str = include_str!("../data/nulls.toml");

/// Registers every record of this crate with `registry`.
///
/// # Errors
///
/// Returns [`lamina_core::NullError::DuplicateOverride`] if any record is
/// already registered.
pub fn register_all(registry: &NullRegistry) -> NullResult<()> {
    registry.register::<BeU16>()?;
    registry.register::<BeU32>()?;
    registry.register::<Tag>()?;
    registry.register::<Offset16>()?;
    registry.register::<Index>()?;
    registry.register::<LangSys>()?;
    registry.register::<RangeRecord>()?;
    registry.register::<CoverageHeader>()?;
    registry.register::<AatLookupHeader>()?;
    registry.register::<SubtableHeader>()?;
    registry.register::<TableRecord>()?;

    let overridden = registry.entries().iter().filter(|e| e.overridden).count();
    tracing::info!(
        records = registry.len(),
        overridden,
        "registered font null records"
    );
    Ok(())
}
