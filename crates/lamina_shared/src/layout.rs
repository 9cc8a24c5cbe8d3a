//! # OpenType Layout Records
//!
//! Records shared by the GSUB/GPOS/GDEF tables.

use bytemuck::{Pod, Zeroable};
use lamina_core::{null_bytes, null_record};

use crate::scalar::{BeU16, Offset16};

/// Index into a feature or lookup list.
///
/// `0xFFFF` means "no index", which is also the null.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Index(BeU16);

impl Index {
    /// The "no index" value.
    pub const NOT_FOUND: u16 = 0xFFFF;

    /// Encodes `index`.
    #[inline]
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(BeU16::new(index))
    }

    /// Decodes the index.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0.get()
    }

    /// Whether this is the "no index" value.
    #[inline]
    #[must_use]
    pub const fn is_not_found(self) -> bool {
        self.0.get() == Self::NOT_FOUND
    }
}

null_bytes!(Index = [0xFF, 0xFF]);

/// Language system table header.
///
/// The feature index array that follows the header on disk is not part of
/// the fixed record.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct LangSys {
    /// Reserved, always null.
    pub lookup_order: Offset16,
    /// Feature required by this language system, or not-found.
    pub required_feature: Index,
    /// Number of feature indices that follow.
    pub feature_count: BeU16,
}

impl LangSys {
    /// Whether a required feature is set.
    #[inline]
    #[must_use]
    pub const fn has_required_feature(&self) -> bool {
        !self.required_feature.is_not_found()
    }

    /// Number of feature indices.
    #[inline]
    #[must_use]
    pub const fn feature_count(&self) -> u16 {
        self.feature_count.get()
    }
}

null_bytes!(LangSys = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00]);

/// Glyph range mapped to a value (coverage index or class).
///
/// The null has `start > end`, so it contains no glyph.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct RangeRecord {
    /// First glyph of the range.
    pub start: BeU16,
    /// Last glyph of the range, inclusive.
    pub end: BeU16,
    /// Value of the first glyph in the range.
    pub value: BeU16,
}

impl RangeRecord {
    /// Encodes a range.
    #[inline]
    #[must_use]
    pub const fn new(start: u16, end: u16, value: u16) -> Self {
        Self {
            start: BeU16::new(start),
            end: BeU16::new(end),
            value: BeU16::new(value),
        }
    }

    /// Whether `glyph` lies in the range.
    #[inline]
    #[must_use]
    pub const fn contains(&self, glyph: u16) -> bool {
        self.start.get() <= glyph && glyph <= self.end.get()
    }

    /// Coverage index of `glyph`, if it lies in the range.
    #[inline]
    #[must_use]
    pub fn coverage_index(&self, glyph: u16) -> Option<u16> {
        if self.contains(glyph) {
            Some(self.value.get().wrapping_add(glyph - self.start.get()))
        } else {
            None
        }
    }
}

null_bytes!(RangeRecord = [0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);

/// Header of a coverage table. Format zero is unknown and covers nothing.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct CoverageHeader {
    /// Coverage format (1 = glyph array, 2 = range array).
    pub format: BeU16,
    /// Number of glyphs or ranges that follow.
    pub count: BeU16,
}

impl CoverageHeader {
    /// Whether the format is one a shaper can read.
    #[inline]
    #[must_use]
    pub const fn is_known_format(&self) -> bool {
        matches!(self.format.get(), 1 | 2)
    }
}

null_record!(CoverageHeader);
