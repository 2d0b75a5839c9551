//! Dispatch adapter for the time-versioned store.
//!
//! The store itself only speaks typed values; this crate is the boundary
//! that drives it from an ordered sequence of tagged string records:
//!
//! - [`Command`] -- one parsed operation record. Opcodes come in an
//!   untimed family (`FILE_UPLOAD`, `FILE_GET`, `FILE_COPY`,
//!   `FILE_SEARCH`), a timed family carrying a wall-clock timestamp
//!   (`FILE_UPLOAD_AT`, ...), and `ROLLBACK`.
//! - [`Output`] -- the result of one record: a confirmation string, a
//!   size descriptor, a ranked name list, or an absent-value marker.
//! - [`Dispatcher`] -- owns a store and folds a record sequence into an
//!   output sequence mirroring input order.
//!
//! Absent values and empty searches are ordinary outputs; store failures
//! (duplicate upload, missing copy source) abort the run and surface
//! verbatim through [`DispatchError`].

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod output;

// Re-export primary types at crate root for ergonomic imports.
pub use command::Command;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use output::Output;
