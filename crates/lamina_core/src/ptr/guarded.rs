//! # Guarded Pointer
//!
//! A never-null view over a borrowed record.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use crate::memory::{null_of, NullRecord};

/// Non-owning pointer to a `T` that reads as the null of `T` when absent.
///
/// The handle has two states: present (holds a reference) and absent.
/// Every read-style access ([`get`](Self::get), `*`, method calls through
/// [`Deref`], [`AsRef`], [`Borrow`]) routes through the null of `T` when
/// absent. Only [`get_raw`](Self::get_raw) exposes the true state.
///
/// There is deliberately no `DerefMut`: storage reached through an absent
/// handle is the shared null record, which must never be written.
///
/// # Example
///
/// ```rust
/// use bytemuck::{Pod, Zeroable};
/// use lamina_core::{null_bytes, Guarded};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Index([u8; 2]);
///
/// null_bytes!(Index = [0xFF, 0xFF]);
///
/// let table = [Index([0, 3])];
/// let hit = Guarded::from(table.first());
/// let miss = Guarded::from(table.get(5));
///
/// assert_eq!(hit.0, [0, 3]);
/// assert_eq!(miss.0, [0xFF, 0xFF]);
/// assert!(miss.get_raw().is_none());
/// ```
pub struct Guarded<'a, T: NullRecord> {
    raw: Option<&'a T>,
}

impl<'a, T: NullRecord> Guarded<'a, T> {
    /// Creates a handle from a possibly absent reference.
    #[inline]
    #[must_use]
    pub const fn new(raw: Option<&'a T>) -> Self {
        Self { raw }
    }

    /// Creates an absent handle.
    #[inline]
    #[must_use]
    pub const fn absent() -> Self {
        Self { raw: None }
    }

    /// Returns the held record, or the null of `T` when absent.
    #[inline]
    #[must_use]
    pub fn get(&self) -> &'a T {
        match self.raw {
            Some(record) => record,
            None => null_of::<T>(),
        }
    }

    /// Returns the held reference without substitution.
    ///
    /// The only accessor that can observe absence; use it for existence
    /// checks and identity comparisons.
    #[inline]
    #[must_use]
    pub const fn get_raw(&self) -> Option<&'a T> {
        self.raw
    }

    /// Whether the handle holds a real record.
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.raw.is_some()
    }

    /// Replaces the held reference. `None` makes the handle absent.
    #[inline]
    pub fn set(&mut self, raw: Option<&'a T>) {
        self.raw = raw;
    }

    /// Returns the internal storage slot, for APIs that fill in a record
    /// reference through an out-parameter.
    ///
    /// ```rust
    /// use bytemuck::{Pod, Zeroable};
    /// use lamina_core::{null_record, Guarded};
    ///
    /// #[repr(C)]
    /// #[derive(Clone, Copy, Pod, Zeroable)]
    /// struct Offset([u8; 2]);
    ///
    /// null_record!(Offset);
    ///
    /// fn find<'a>(table: &'a [Offset], out: &mut Option<&'a Offset>) {
    ///     *out = table.iter().find(|o| o.0 != [0, 0]);
    /// }
    ///
    /// let table = [Offset([0, 0]), Offset([0, 8])];
    /// let mut offset: Guarded<'_, Offset> = Guarded::absent();
    /// find(&table, offset.slot_mut());
    /// assert_eq!(offset.0, [0, 8]);
    /// ```
    #[inline]
    pub fn slot_mut(&mut self) -> &mut Option<&'a T> {
        &mut self.raw
    }

    /// Converts into a plain read-only reference, substituting the null of
    /// `T` when absent.
    #[inline]
    #[must_use]
    pub fn into_ref(self) -> &'a T {
        self.get()
    }

    /// Byte view of the record read through this handle.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::bytes_of(self.get())
    }

    /// Follows the handle to a sub-record.
    ///
    /// The result is absent when this handle is absent or `follow` finds
    /// nothing.
    #[inline]
    #[must_use]
    pub fn and_then<U, F>(&self, follow: F) -> Guarded<'a, U>
    where
        U: NullRecord,
        F: FnOnce(&'a T) -> Option<&'a U>,
    {
        Guarded::new(self.raw.and_then(follow))
    }

    /// Whether both handles hold the same record, by address.
    ///
    /// Two absent handles compare equal.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self.raw, other.raw) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: NullRecord> Default for Guarded<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<T: NullRecord> Clone for Guarded<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: NullRecord> Copy for Guarded<'_, T> {}

impl<T: NullRecord> Deref for Guarded<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: NullRecord> AsRef<T> for Guarded<'_, T> {
    #[inline]
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T: NullRecord> Borrow<T> for Guarded<'_, T> {
    #[inline]
    fn borrow(&self) -> &T {
        self.get()
    }
}

impl<'a, T: NullRecord> From<&'a T> for Guarded<'a, T> {
    #[inline]
    fn from(record: &'a T) -> Self {
        Self::new(Some(record))
    }
}

impl<'a, T: NullRecord> From<Option<&'a T>> for Guarded<'a, T> {
    #[inline]
    fn from(raw: Option<&'a T>) -> Self {
        Self::new(raw)
    }
}

impl<T: NullRecord + fmt::Debug> fmt::Debug for Guarded<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw {
            Some(record) => f.debug_tuple("Present").field(record).finish(),
            None => f.debug_tuple("Absent").field(null_of::<T>()).finish(),
        }
    }
}
