//! # Scalar Fields
//!
//! Big-endian scalar fields as stored in font files.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use lamina_core::null_record;

/// Unsigned 16-bit big-endian integer.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct BeU16([u8; 2]);

impl BeU16 {
    /// Encodes `value`.
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value.to_be_bytes())
    }

    /// Decodes the stored value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u16 {
        u16::from_be_bytes(self.0)
    }

    /// Stores `value`.
    #[inline]
    pub fn set(&mut self, value: u16) {
        self.0 = value.to_be_bytes();
    }
}

impl fmt::Debug for BeU16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Unsigned 32-bit big-endian integer.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct BeU32([u8; 4]);

impl BeU32 {
    /// Encodes `value`.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// Decodes the stored value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Stores `value`.
    #[inline]
    pub fn set(&mut self, value: u32) {
        self.0 = value.to_be_bytes();
    }
}

impl fmt::Debug for BeU32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Four-byte table or feature tag.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    /// Tag from its four ASCII bytes.
    #[inline]
    #[must_use]
    pub const fn new(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", String::from_utf8_lossy(&self.0))
    }
}

/// Offset from the start of the enclosing table. Zero means "no table".
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Offset16(BeU16);

impl Offset16 {
    /// Encodes `offset`.
    #[inline]
    #[must_use]
    pub const fn new(offset: u16) -> Self {
        Self(BeU16::new(offset))
    }

    /// Decodes the offset.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether the offset points nowhere.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0.get() == 0
    }
}

impl fmt::Debug for Offset16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Offset16({})", self.get())
    }
}

null_record!(BeU16, BeU32, Tag, Offset16);
