//! # Guarded Pointers
//!
//! Non-owning handles to records that may be absent. Reading through an
//! absent handle sees the record's null instead of faulting, so lookups
//! into sparse or optional tables need no branch at the call site.

mod guarded;

pub use guarded::Guarded;
