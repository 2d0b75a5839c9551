//! Foundation types for the time-versioned store.
//!
//! This crate defines the two value types every other layer speaks:
//!
//! - [`Timestamp`] -- wall-clock instant with second resolution. Store
//!   operations take the current time as an explicit parameter, so the
//!   whole system stays a deterministic function of its inputs.
//! - [`SizeDescriptor`] -- opaque size tag attached to an entry. The store
//!   never interprets it except when search ranks matches by numeric
//!   magnitude.
//!
//! Timestamp strings on the wire use the fixed format
//! `YYYY-MM-DDTHH:MM:SS` ([`TIMESTAMP_FORMAT`]). Parsing lives here so the
//! core store never touches text.

pub mod size;
pub mod timestamp;

// Re-export primary types at crate root for ergonomic imports.
pub use size::SizeDescriptor;
pub use timestamp::{Timestamp, TimestampParseError, TIMESTAMP_FORMAT};
