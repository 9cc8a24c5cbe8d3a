//! # Null Record Declarations
//!
//! Each macro implements [`NullRecord`](crate::NullRecord) for a type and
//! checks its layout against the pools at compile time. Declaring a null
//! twice for the same type is a conflicting implementation and fails the
//! build:
//!
//! ```compile_fail
//! use bytemuck::{Pod, Zeroable};
//! use lamina_core::null_bytes;
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! struct GlyphIndex([u8; 2]);
//!
//! null_bytes!(GlyphIndex = [0xFF, 0xFF]);
//! null_bytes!(GlyphIndex = [0x00, 0x01]);
//! ```
//!
//! So does a record larger than [`POOL_SIZE`](crate::POOL_SIZE):
//!
//! ```compile_fail
//! use bytemuck::{Pod, Zeroable};
//! use lamina_core::null_record;
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! struct Oversized([u8; 2048]);
//!
//! null_record!(Oversized);
//! ```
//!
//! And a byte override whose length differs from the record size:
//!
//! ```compile_fail
//! use bytemuck::{Pod, Zeroable};
//! use lamina_core::null_bytes;
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! struct Header([u8; 4]);
//!
//! null_bytes!(Header = [0x01, 0x00]);
//! ```

/// Declares records whose null is all-zero bytes, viewed over the shared
/// Null pool.
///
/// ```rust
/// use bytemuck::{Pod, Zeroable};
/// use lamina_core::{null_of, null_record};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Offset([u8; 2]);
///
/// null_record!(Offset);
/// assert_eq!(null_of::<Offset>().0, [0, 0]);
/// ```
#[macro_export]
macro_rules! null_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            const _: () = $crate::assert_fits::<$ty>();

            impl $crate::NullRecord for $ty {}
        )+
    };
}

/// Declares the null of a record as its exact byte encoding.
///
/// The array must hold exactly `size_of::<T>()` bytes.
#[macro_export]
macro_rules! null_bytes {
    ($ty:ty = [$($byte:expr),* $(,)?]) => {
        const _: () = $crate::assert_fits::<$ty>();

        impl $crate::NullRecord for $ty {
            const OVERRIDDEN: bool = true;

            #[inline]
            fn null() -> &'static Self {
                static NULL: $crate::memory::OverrideBytes<{ ::core::mem::size_of::<$ty>() }> =
                    $crate::memory::OverrideBytes([$($byte),*]);
                NULL.view::<Self>()
            }
        }
    };
}

/// Declares the null of a record as a constant instance.
///
/// ```rust
/// use bytemuck::{Pod, Zeroable};
/// use lamina_core::{null_instance, null_of};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Version {
///     major: u8,
///     minor: u8,
/// }
///
/// null_instance!(Version = Version { major: 1, minor: 0 });
/// assert_eq!(null_of::<Version>().major, 1);
/// ```
#[macro_export]
macro_rules! null_instance {
    ($ty:ty = $value:expr) => {
        const _: () = $crate::assert_fits::<$ty>();

        impl $crate::NullRecord for $ty {
            const OVERRIDDEN: bool = true;

            #[inline]
            fn null() -> &'static Self {
                static NULL: $ty = $value;
                &NULL
            }
        }
    };
}
