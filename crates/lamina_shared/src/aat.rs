//! # AAT Records
//!
//! Apple Advanced Typography lookup records.

use bytemuck::{Pod, Zeroable};
use lamina_core::null_bytes;

use crate::scalar::BeU16;

/// Header of an AAT lookup table.
///
/// The null carries format `0xFFFF`, which no lookup format uses, so a
/// lookup over an absent table yields no value.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct AatLookupHeader {
    /// Lookup format.
    pub format: BeU16,
}

impl AatLookupHeader {
    /// Formats defined for AAT lookups.
    pub const KNOWN_FORMATS: [u16; 6] = [0, 2, 4, 6, 8, 10];

    /// Whether the format is one a lookup can be read with.
    #[inline]
    #[must_use]
    pub fn is_known_format(&self) -> bool {
        Self::KNOWN_FORMATS.contains(&self.format.get())
    }
}

null_bytes!(AatLookupHeader = [0xFF, 0xFF]);

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_core::null_of;

    #[test]
    fn test_null_lookup_has_unknown_format() {
        let null = null_of::<AatLookupHeader>();
        assert_eq!(null.format.get(), 0xFFFF);
        assert!(!null.is_known_format());
    }

    #[test]
    fn test_simple_array_format_is_known() {
        let header = AatLookupHeader { format: BeU16::new(0) };
        assert!(header.is_known_format());
    }
}
