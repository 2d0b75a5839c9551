use thiserror::Error;

use tvs_store::StoreError;
use tvs_types::TimestampParseError;

/// Errors from parsing or executing operation records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("empty operation record")]
    EmptyRecord,

    #[error("unknown opcode {0:?}")]
    UnknownOpcode(String),

    #[error("{opcode} expects {expected}, got {found} argument(s)")]
    InvalidArity {
        opcode: String,
        expected: &'static str,
        found: usize,
    },

    #[error(transparent)]
    InvalidTimestamp(#[from] TimestampParseError),

    #[error("invalid ttl {raw:?}")]
    InvalidTtl {
        raw: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Store failures surface verbatim.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
