use std::fmt;

use tvs_types::Timestamp;

/// Confirmation of a successful upload.
///
/// The `Display` form is the adapter-facing confirmation string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uploaded {
    /// Name of the entry that was appended.
    pub name: String,
}

impl fmt::Display for Uploaded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uploaded {}", self.name)
    }
}

/// Confirmation of a successful copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Copied {
    /// Name the content was copied from.
    pub source: String,
    /// Name of the newly created entry.
    pub destination: String,
}

impl fmt::Display for Copied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "copied {} to {}", self.source, self.destination)
    }
}

/// Confirmation of a rollback. Rollback never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RolledBack {
    /// The cutoff that was applied.
    pub cutoff: Timestamp,
    /// How many entries were discarded.
    pub removed: usize,
}

impl fmt::Display for RolledBack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rollback to {}", self.cutoff)
    }
}
