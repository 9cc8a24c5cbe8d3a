//! # Capability-Selected Views
//!
//! Generic code that is written once for both read-only and mutable
//! callers picks its fallback record through an [`Access`] marker: the
//! read-only side gets the null record, the mutable side gets a discard
//! scratch record. The choice is made by the caller's type parameter at
//! compile time, never at runtime.

use super::crap::{scratch_of, Scratch};
use super::null::{null_of, NullRecord};

/// Compile-time capability of a record view.
pub trait Access {
    /// View handed out for a record of type `T`.
    type View<T: NullRecord>;

    /// Returns the fallback view of `T` for this capability.
    fn view<T: NullRecord>() -> Self::View<T>;
}

/// Read-only capability: falls back to the Null pool.
#[derive(Debug, Clone, Copy)]
pub enum ReadOnly {}

/// Mutable capability: falls back to the Crap pool.
#[derive(Debug, Clone, Copy)]
pub enum Mutable {}

impl Access for ReadOnly {
    type View<T: NullRecord> = &'static T;

    #[inline]
    fn view<T: NullRecord>() -> &'static T {
        null_of::<T>()
    }
}

impl Access for Mutable {
    type View<T: NullRecord> = Scratch<T>;

    #[inline]
    fn view<T: NullRecord>() -> Scratch<T> {
        scratch_of::<T>()
    }
}

/// Returns the null record under [`ReadOnly`], a scratch record under
/// [`Mutable`].
///
/// ```rust
/// use bytemuck::{Pod, Zeroable};
/// use lamina_core::{null_bytes, scratch_or_null_of, Mutable, ReadOnly};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Index([u8; 2]);
///
/// null_bytes!(Index = [0xFF, 0xFF]);
///
/// let read = scratch_or_null_of::<ReadOnly, Index>();
/// let mut write = scratch_or_null_of::<Mutable, Index>();
/// write.0 = [0, 7];
/// assert_eq!(read.0, [0xFF, 0xFF]);
/// ```
#[inline]
#[must_use]
pub fn scratch_or_null_of<A: Access, T: NullRecord>() -> A::View<T> {
    A::view::<T>()
}

/// Read-only view of the null record of `T`.
#[inline]
#[must_use]
pub fn read_only_view_of<T: NullRecord>() -> &'static T {
    scratch_or_null_of::<ReadOnly, T>()
}

/// Mutable scratch view seeded with the null record of `T`.
#[inline]
#[must_use]
pub fn mutable_view_of<T: NullRecord>() -> Scratch<T> {
    scratch_or_null_of::<Mutable, T>()
}
