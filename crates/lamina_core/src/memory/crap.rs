//! # Crap Pool
//!
//! CRAP: Common Region for Access Protection.
//!
//! Writable scratch memory used as the target of writes whose real target
//! is absent. Its content is never read back as real data.
//!
//! ## Thread Safety
//!
//! The pool is one static region, like the Null pool, behind a
//! [`parking_lot::Mutex`]. A [`Scratch`] holds the lock for as long as it
//! lives. Requests never wait: while the pool is lent out, on this thread
//! or any other, the new guard spills into a private copy of the null.
//! Nothing in the pool can reach the Null pool or a record override.
//!
//! The pool is never allocated, so threads that use it leave nothing behind.

use std::fmt;
use std::mem::size_of;
use std::ops::{Deref, DerefMut};

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

use super::layout::{Fits, PoolBytes};
use super::null::{null_bytes_of, NullRecord};

static CRAP_POOL: Mutex<PoolBytes> = parking_lot::const_mutex(PoolBytes::ZEROED);

/// Mutable scratch record, reset to the null of `T` when handed out.
///
/// Dereferences to `&mut T`. Dropping it releases the pool.
/// Not `Send`: the lock is released by the thread that took it.
pub struct Scratch<T: NullRecord> {
    slot: Slot<T>,
}

enum Slot<T: 'static> {
    /// View into the locked pool.
    Pooled(MappedMutexGuard<'static, T>),
    /// Private copy, used while the pool is already lent out.
    Spilled(T),
}

impl<T: NullRecord> Scratch<T> {
    /// Whether this scratch record lives in the shared pool rather than a
    /// spilled copy.
    #[inline]
    #[must_use]
    pub fn is_pooled(&self) -> bool {
        matches!(self.slot, Slot::Pooled(_))
    }
}

impl<T: NullRecord> Deref for Scratch<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match &self.slot {
            Slot::Pooled(record) => record,
            Slot::Spilled(record) => record,
        }
    }
}

impl<T: NullRecord> DerefMut for Scratch<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Slot::Pooled(record) => record,
            Slot::Spilled(record) => record,
        }
    }
}

impl<T: NullRecord + fmt::Debug> fmt::Debug for Scratch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scratch")
            .field("pooled", &self.is_pooled())
            .field("record", &**self)
            .finish()
    }
}

/// Returns a writable scratch `T`, pre-seeded with the null of `T`.
///
/// Every call copies the null content in first, so a caller never observes
/// leftovers from an earlier, unrelated write. Writes through the result
/// are discarded.
///
/// ```rust
/// use bytemuck::{Pod, Zeroable};
/// use lamina_core::{null_record, scratch_of};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Counter([u8; 4]);
///
/// null_record!(Counter);
///
/// scratch_of::<Counter>().0 = [9; 4];
/// assert_eq!(scratch_of::<Counter>().0, [0; 4]);
/// ```
#[must_use]
pub fn scratch_of<T: NullRecord>() -> Scratch<T> {
    let () = Fits::<T>::OK;
    let slot = match CRAP_POOL.try_lock() {
        Some(mut pool) => {
            pool.0[..size_of::<T>()].copy_from_slice(null_bytes_of::<T>());
            Slot::Pooled(MutexGuard::map(pool, |pool| {
                bytemuck::from_bytes_mut(&mut pool.0[..size_of::<T>()])
            }))
        }
        None => {
            tracing::trace!(
                record = std::any::type_name::<T>(),
                "crap pool busy, spilling scratch record"
            );
            Slot::Spilled(*T::null())
        }
    };

    Scratch { slot }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::null::null_of;
    use bytemuck::{Pod, Zeroable};

    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
    struct Header {
        tag: [u8; 2],
        length: [u8; 2],
    }

    null_bytes!(Header = [0x01, 0x00, 0x00, 0x04]);

    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
    struct Slab([u8; 64]);

    null_record!(Slab);

    #[test]
    fn test_scratch_starts_as_null() {
        let scratch = scratch_of::<Header>();
        assert_eq!(*scratch, *null_of::<Header>());
    }

    #[test]
    fn test_scratch_resets_between_calls() {
        {
            let mut scratch = scratch_of::<Header>();
            scratch.tag = [0xAB, 0xCD];
            scratch.length = [0xEE, 0xEE];
        }
        assert_eq!(*scratch_of::<Header>(), *null_of::<Header>());
    }

    #[test]
    fn test_scratch_resets_after_other_type() {
        scratch_of::<Slab>().0 = [0x5A; 64];
        let header = scratch_of::<Header>();
        assert_eq!(header.tag, [0x01, 0x00]);
        assert_eq!(header.length, [0x00, 0x04]);
        drop(header);
        assert_eq!(*scratch_of::<Slab>(), Slab([0; 64]));
    }

    #[test]
    fn test_writes_never_reach_null() {
        let mut scratch = scratch_of::<Header>();
        scratch.tag = [0xFF, 0xFF];
        assert_eq!(null_of::<Header>().tag, [0x01, 0x00]);
        assert!(!std::ptr::eq(&*scratch, null_of::<Header>()));
    }

    #[test]
    fn test_nested_request_spills() {
        let mut outer = scratch_of::<Header>();
        outer.tag = [0x42, 0x42];

        let mut inner = scratch_of::<Header>();
        assert!(!(outer.is_pooled() && inner.is_pooled()));
        assert_eq!(*inner, *null_of::<Header>());
        inner.length = [0x99, 0x99];

        assert_eq!(outer.tag, [0x42, 0x42]);
        assert_eq!(outer.length, [0x00, 0x04]);
        drop(inner);
        drop(outer);
    }

    #[test]
    fn test_pool_is_static() {
        let scratch = scratch_of::<Slab>();
        if scratch.is_pooled() {
            let pool = CRAP_POOL.data_ptr().cast::<u8>().cast_const();
            assert!(std::ptr::eq(scratch.0.as_ptr(), pool));
        }
    }

    #[test]
    fn test_threads_never_share_a_record() {
        let handles: Vec<_> = (0..4u8)
            .map(|seed| {
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        let mut scratch = scratch_of::<Slab>();
                        assert_eq!(scratch.0, [0; 64]);
                        scratch.0 = [seed; 64];
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("scratch thread panicked");
        }
        assert!(null_of::<Slab>().0.iter().all(|&b| b == 0));
    }
}
