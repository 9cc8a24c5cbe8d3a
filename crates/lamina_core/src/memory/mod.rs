//! # Memory Management
//!
//! Two fixed-size pools that live for the whole process.
//!
//! ## Design Philosophy
//!
//! Absence is handled by substitution, not by signaling:
//! - Reads of an absent record see its null from the read-only Null pool
//! - Writes to an absent record land in the discard ("Crap") pool
//! - Neither path allocates, blocks or fails at runtime
//!
//! Records that do not fit the pools are rejected at compile time.

mod access;
mod crap;
mod layout;
mod null;

pub use access::{mutable_view_of, read_only_view_of, scratch_or_null_of, Access, Mutable, ReadOnly};
pub use crap::{scratch_of, Scratch};
pub use layout::{assert_fits, OverrideBytes, POOL_ALIGN, POOL_SIZE};
pub use null::{is_null, null_bytes_of, null_of, NullRecord};
