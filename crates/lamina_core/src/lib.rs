//! # Lamina Core
//!
//! Null records for fixed-layout font tables that are read in place from
//! borrowed bytes:
//! - Absent structures never crash - they read as a well-defined null record
//! - Zero allocations on every lookup
//! - No error paths on the hot side
//!
//! ## Architecture
//!
//! ```text
//!   NULL POOL (static, zeroed, read-only)      CRAP POOL (static, locked, writable)
//!            │                                           │
//!            ▼                                           ▼
//!   null_of::<T>() ──── seeds on every call ───► scratch_of::<T>()
//!            │
//!            ▼
//!   Guarded<'a, T>  (absent → null_of::<T>())
//! ```
//!
//! Types whose all-zero bytes are a valid empty record use the shared pool.
//! Types that need a non-zero null (a format tag, a "not found" index)
//! declare it once with [`null_bytes!`] or [`null_instance!`].
//!
//! ## Example
//!
//! ```rust
//! use bytemuck::{Pod, Zeroable};
//! use lamina_core::{null_bytes, null_of, Guarded};
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! struct FeatureIndex([u8; 2]);
//!
//! null_bytes!(FeatureIndex = [0xFF, 0xFF]);
//!
//! assert_eq!(null_of::<FeatureIndex>().0, [0xFF, 0xFF]);
//!
//! let absent: Guarded<'_, FeatureIndex> = Guarded::absent();
//! assert_eq!(absent.0, [0xFF, 0xFF]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

#[macro_use]
mod macros;

pub mod error;
pub mod memory;
pub mod ptr;
pub mod registry;

pub use error::{NullError, NullResult};
pub use memory::{
    assert_fits, is_null, mutable_view_of, null_bytes_of, null_of, read_only_view_of,
    scratch_of, scratch_or_null_of, Access, Mutable, NullRecord, ReadOnly, Scratch, POOL_ALIGN,
    POOL_SIZE,
};
pub use ptr::Guarded;
pub use registry::{ManifestRecord, NullManifest, NullRegistry, RegistryEntry};
