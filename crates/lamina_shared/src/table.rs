//! # Table Directory
//!
//! The font's table directory and generic subtable headers.

use bytemuck::{Pod, Zeroable};
use lamina_core::{null_instance, null_record, Guarded};

use crate::array::RecordArray;
use crate::scalar::{BeU16, BeU32, Tag};

/// Entry of the table directory. The null describes an empty table.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TableRecord {
    /// Table tag.
    pub tag: Tag,
    /// Checksum of the table.
    pub checksum: BeU32,
    /// Offset of the table from the start of the font.
    pub offset: BeU32,
    /// Length of the table in bytes.
    pub length: BeU32,
}

impl TableRecord {
    /// Byte range of the table within the font, if it has one.
    #[must_use]
    pub fn range(&self) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(self.offset.get()).ok()?;
        let len = usize::try_from(self.length.get()).ok()?;
        (len > 0).then(|| start..start.saturating_add(len))
    }
}

null_record!(TableRecord);

/// Header shared by versioned subtables.
///
/// A header is only sane when `length` covers at least the header itself.
/// The null carries format `1.0` and the minimum length, so code that
/// checks sanity before reading still accepts it as an empty subtable.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SubtableHeader {
    /// Major format version.
    pub major: u8,
    /// Minor format version.
    pub minor: u8,
    /// Length of the subtable in bytes, header included.
    pub length: BeU16,
}

impl SubtableHeader {
    /// Size of the header on disk.
    pub const MIN_SIZE: u16 = 4;

    /// Whether the header describes a subtable that fits in `available`
    /// bytes.
    #[inline]
    #[must_use]
    pub fn is_sane(&self, available: usize) -> bool {
        let length = self.length.get();
        self.major != 0 && length >= Self::MIN_SIZE && usize::from(length) <= available
    }

    /// Payload length after the header.
    #[inline]
    #[must_use]
    pub const fn payload_len(&self) -> u16 {
        self.length.get().saturating_sub(Self::MIN_SIZE)
    }
}

null_instance!(
    SubtableHeader = SubtableHeader {
        major: 1,
        minor: 0,
        length: BeU16::new(SubtableHeader::MIN_SIZE),
    }
);

/// Table directory viewed in place over font bytes.
#[derive(Debug, Clone, Copy)]
pub struct TableDirectory<'a> {
    records: RecordArray<'a, TableRecord>,
}

impl<'a> TableDirectory<'a> {
    /// Views `bytes` as consecutive table records.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            records: RecordArray::new(bytes),
        }
    }

    /// Number of tables.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory lists no table.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record of the table tagged `tag`. Reads as an empty table when the
    /// font has none.
    #[must_use]
    pub fn find(&self, tag: Tag) -> Guarded<'a, TableRecord> {
        Guarded::new(self.records.iter().find(|record| record.tag == tag))
    }
}
