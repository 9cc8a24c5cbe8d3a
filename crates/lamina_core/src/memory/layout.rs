//! # Pool Layout
//!
//! Capacity and alignment shared by the Null and Crap pools.

use std::marker::PhantomData;
use std::mem::{align_of, size_of};

use bytemuck::Pod;

/// Capacity of each pool in bytes. Enlarge as necessary.
///
/// Every record type viewed over a pool must be at most this large.
pub const POOL_SIZE: usize = 1024;

/// Alignment of each pool in bytes.
pub const POOL_ALIGN: usize = 16;

/// Raw pool storage, aligned like a vector register.
#[repr(C, align(16))]
pub(crate) struct PoolBytes(pub(crate) [u8; POOL_SIZE]);

impl PoolBytes {
    pub(crate) const ZEROED: Self = Self([0; POOL_SIZE]);
}

const _: () = assert!(align_of::<PoolBytes>() == POOL_ALIGN);

/// Rejects `T` at compile time when it cannot be viewed over a pool.
///
/// Called from a `const` item so the check runs during the build:
///
/// ```rust
/// const _: () = lamina_core::assert_fits::<[u8; 64]>();
/// ```
///
/// # Panics
///
/// Fails const evaluation when `T` exceeds [`POOL_SIZE`] or [`POOL_ALIGN`].
pub const fn assert_fits<T>() {
    assert!(size_of::<T>() <= POOL_SIZE, "Increase POOL_SIZE.");
    assert!(align_of::<T>() <= POOL_ALIGN, "Record alignment exceeds POOL_ALIGN.");
}

/// Compile-time layout check forced by every generic pool view.
pub(crate) struct Fits<T>(PhantomData<T>);

impl<T> Fits<T> {
    pub(crate) const OK: () = assert_fits::<T>();
}

/// Backing storage of a byte-encoded null override.
///
/// Only constructed by [`null_bytes!`](crate::null_bytes), which sizes `N`
/// to the record.
#[doc(hidden)]
#[repr(C, align(16))]
pub struct OverrideBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> OverrideBytes<N> {
    /// Views the override as its record type.
    #[inline]
    #[must_use]
    pub fn view<T: Pod>(&'static self) -> &'static T {
        let () = Fits::<T>::OK;
        bytemuck::from_bytes(&self.0)
    }
}
