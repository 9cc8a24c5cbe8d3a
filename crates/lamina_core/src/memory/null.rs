//! # Null Pool
//!
//! Read-only, zero-filled storage shared by every record whose null is
//! all-zero bytes, and the per-type accessor that records with a non-zero
//! null override.

use std::mem::size_of;

use bytemuck::Pod;

use super::layout::{Fits, PoolBytes};

/// Global zero-content Null pool. Never written.
static NULL_POOL: PoolBytes = PoolBytes::ZEROED;

/// A fixed-layout record with a canonical null ("absent") value.
///
/// The default [`null`](NullRecord::null) views a prefix of the shared
/// zero pool, which is sound for every [`Pod`] type since all-zero bytes
/// are a valid `Pod` value. Records whose empty encoding is not all-zero
/// override it through [`null_bytes!`](crate::null_bytes) or
/// [`null_instance!`](crate::null_instance); a type has at most one
/// implementation, so at most one null.
///
/// Prefer the declaration macros over a manual `impl`: they also check the
/// record layout against the pools when the impl is compiled.
pub trait NullRecord: Pod {
    /// Whether the null comes from an explicit override rather than the
    /// shared zero pool.
    const OVERRIDDEN: bool = false;

    /// Returns the null record, valid for the life of the process.
    #[inline]
    #[must_use]
    fn null() -> &'static Self {
        zeroed::<Self>()
    }
}

/// Views the shared zero pool as `T`.
#[inline]
fn zeroed<T: Pod>() -> &'static T {
    let () = Fits::<T>::OK;
    bytemuck::from_bytes(&NULL_POOL.0[..size_of::<T>()])
}

/// Returns the null record of `T`.
///
/// O(1), never fails, never allocates.
#[inline]
#[must_use]
pub fn null_of<T: NullRecord>() -> &'static T {
    T::null()
}

/// Returns the byte encoding of the null record of `T`.
#[inline]
#[must_use]
pub fn null_bytes_of<T: NullRecord>() -> &'static [u8] {
    bytemuck::bytes_of(T::null())
}

/// Whether `record` is byte-identical to the null record of `T`.
#[inline]
#[must_use]
pub fn is_null<T: NullRecord>(record: &T) -> bool {
    bytemuck::bytes_of(record) == null_bytes_of::<T>()
}
