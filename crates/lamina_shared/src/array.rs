//! # Record Arrays
//!
//! Arrays of fixed-layout records viewed in place over borrowed font
//! bytes. Out-of-range reads see the null record; out-of-range writes land
//! in the discard pool.

use std::mem::size_of;

use lamina_core::{scratch_of, Guarded, NullRecord};

/// Read-only array of `T` over borrowed bytes.
///
/// Trailing bytes that do not fill a whole record are ignored.
#[derive(Debug)]
pub struct RecordArray<'a, T: NullRecord> {
    records: &'a [T],
}

impl<'a, T: NullRecord> RecordArray<'a, T> {
    /// Views `bytes` as records.
    ///
    /// Returns an empty array when `bytes` is misaligned for `T`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        let records: &'a [T] = match size_of::<T>() {
            0 => &[],
            size => {
                let whole = bytes.len() - bytes.len() % size;
                bytemuck::try_cast_slice(&bytes[..whole]).unwrap_or(&[])
            }
        };
        Self { records }
    }

    /// Wraps already-typed records.
    #[inline]
    #[must_use]
    pub const fn from_records(records: &'a [T]) -> Self {
        Self { records }
    }

    /// Number of records.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the array holds no record.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record `index`, reading as the null of `T` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Guarded<'a, T> {
        Guarded::new(self.records.get(index))
    }

    /// Iterates over the records.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        self.records.iter()
    }
}

impl<T: NullRecord> Clone for RecordArray<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: NullRecord> Copy for RecordArray<'_, T> {}

/// Writable array of `T` over borrowed bytes.
#[derive(Debug)]
pub struct RecordArrayMut<'a, T: NullRecord> {
    records: &'a mut [T],
}

impl<'a, T: NullRecord> RecordArrayMut<'a, T> {
    /// Views `bytes` as writable records.
    ///
    /// Returns an empty array when `bytes` is misaligned for `T`.
    #[must_use]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        let records: &'a mut [T] = match size_of::<T>() {
            0 => &mut [],
            size => {
                let whole = bytes.len() - bytes.len() % size;
                bytemuck::try_cast_slice_mut(&mut bytes[..whole]).unwrap_or(&mut [])
            }
        };
        Self { records }
    }

    /// Number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the array holds no record.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record `index`, reading as the null of `T` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Guarded<'_, T> {
        Guarded::new(self.records.get(index))
    }

    /// Runs `write` on record `index`.
    ///
    /// When `index` is out of range, `write` runs on a scratch record
    /// instead and its effect is discarded, so the caller needs no branch.
    pub fn update<R>(&mut self, index: usize, write: impl FnOnce(&mut T) -> R) -> R {
        match self.records.get_mut(index) {
            Some(record) => write(record),
            None => write(&mut scratch_of::<T>()),
        }
    }
}
