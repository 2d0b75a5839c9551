//! In-memory, time-aware object store with TTL expiry and point-in-time
//! rollback.
//!
//! The store owns an append-only sequence of [`Entry`] values in creation
//! order. Each entry carries a name, an opaque size descriptor, an optional
//! creation time, and an optional time-to-live. An entry with a TTL is
//! visible ("live") strictly before `created_at + ttl`; an entry without a
//! TTL never expires.
//!
//! Operations: [`upload`](TimeVersionedStore::upload),
//! [`get`](TimeVersionedStore::get), [`copy`](TimeVersionedStore::copy),
//! [`search`](TimeVersionedStore::search), and
//! [`rollback`](TimeVersionedStore::rollback).
//!
//! # Design Rules
//!
//! 1. Every operation takes the query time as an explicit parameter; the
//!    store never reads the system clock, so operation sequences replay
//!    deterministically.
//! 2. Expiry is evaluated lazily on read. Nothing is swept in the
//!    background, which means expired entries still occupy their names:
//!    they block duplicate uploads and remain valid copy sources.
//! 3. Lookups scan in creation order and stop at the first match.
//! 4. A failed operation never mutates state; checks precede any append.
//! 5. Entries are removed only by rollback, and only those created
//!    strictly after the cutoff.

pub mod confirm;
pub mod entry;
pub mod error;
pub mod store;

// Re-export primary types at crate root for ergonomic imports.
pub use confirm::{Copied, RolledBack, Uploaded};
pub use entry::Entry;
pub use error::{StoreError, StoreResult};
pub use store::{TimeVersionedStore, SEARCH_RESULT_LIMIT};
