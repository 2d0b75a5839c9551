use std::fmt;

use tracing::{debug, info};

use tvs_types::{SizeDescriptor, Timestamp};

use crate::confirm::{Copied, RolledBack, Uploaded};
use crate::entry::Entry;
use crate::error::{StoreError, StoreResult};

/// Maximum number of names returned by a single search.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// The time-versioned store: an append-only sequence of entries in
/// creation order.
///
/// Every operation is a plain function of the current collection, its
/// arguments, and the supplied query time. Expired entries are not swept;
/// they are filtered lazily on read, which means they still occupy their
/// names: a name whose entry has expired cannot be re-uploaded, and an
/// expired entry remains a valid copy source.
///
/// The store is single-threaded and synchronous. If it is ever shared
/// across threads, it must sit behind one exclusive lock per operation;
/// the first-match-in-creation-order semantics of `get` and `copy` do not
/// decompose into finer-grained locking.
#[derive(Clone, Default)]
pub struct TimeVersionedStore {
    entries: Vec<Entry>,
}

impl TimeVersionedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of surviving entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in creation order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Append a new entry.
    ///
    /// Fails with [`StoreError::DuplicateName`] if any surviving entry
    /// already carries `name`, live or expired. On failure nothing is
    /// mutated.
    pub fn upload(
        &mut self,
        name: &str,
        size: SizeDescriptor,
        at: Option<Timestamp>,
        ttl_seconds: Option<u64>,
    ) -> StoreResult<Uploaded> {
        if self.entries.iter().any(|e| e.name == name) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        debug!(name, %size, ?at, ?ttl_seconds, "upload");
        self.entries.push(Entry {
            name: name.to_string(),
            size,
            created_at: at,
            ttl_seconds,
        });
        Ok(Uploaded {
            name: name.to_string(),
        })
    }

    /// Size descriptor of the first entry in creation order that carries
    /// `name` and is live at `at`.
    ///
    /// Without a query time only TTL-less entries can match. Absence is a
    /// value, not an error.
    pub fn get(&self, name: &str, at: Option<Timestamp>) -> Option<SizeDescriptor> {
        self.entries
            .iter()
            .find(|e| e.name == name && e.is_live_at(at))
            .map(|e| e.size.clone())
    }

    /// Clone the first entry named `source` into a new entry named
    /// `destination`.
    ///
    /// The source is located regardless of its liveness at `at`: copying
    /// an expired source succeeds. The clone carries the source's size
    /// descriptor, is created at `at`, and never inherits the source's
    /// TTL. No duplicate check is applied to `destination`.
    pub fn copy(
        &mut self,
        source: &str,
        destination: &str,
        at: Option<Timestamp>,
    ) -> StoreResult<Copied> {
        let size = self
            .entries
            .iter()
            .find(|e| e.name == source)
            .map(|e| e.size.clone())
            .ok_or_else(|| StoreError::SourceNotFound(source.to_string()))?;

        debug!(source, destination, ?at, "copy");
        self.entries.push(Entry {
            name: destination.to_string(),
            size,
            created_at: at,
            ttl_seconds: None,
        });
        Ok(Copied {
            source: source.to_string(),
            destination: destination.to_string(),
        })
    }

    /// Names of entries live at `at` whose name starts with `prefix`,
    /// ranked by descending numeric size magnitude, ties broken by
    /// ascending name, capped at [`SEARCH_RESULT_LIMIT`].
    pub fn search(&self, prefix: &str, at: Option<Timestamp>) -> Vec<String> {
        let mut matches: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| e.name.starts_with(prefix) && e.is_live_at(at))
            .collect();

        matches.sort_by(|a, b| {
            b.size
                .magnitude()
                .cmp(&a.size.magnitude())
                .then_with(|| a.name.cmp(&b.name))
        });

        matches
            .into_iter()
            .take(SEARCH_RESULT_LIMIT)
            .map(|e| e.name.clone())
            .collect()
    }

    /// Discard every entry created strictly after `cutoff`, regardless of
    /// its liveness. Entries without a creation time are never removed.
    /// Irreversible, and never fails.
    pub fn rollback(&mut self, cutoff: Timestamp) -> RolledBack {
        let before = self.entries.len();
        self.entries.retain(|e| match e.created_at {
            Some(created) => !created.is_after(&cutoff),
            None => true,
        });

        let removed = before - self.entries.len();
        info!(%cutoff, removed, "rollback");
        RolledBack { cutoff, removed }
    }
}

impl fmt::Debug for TimeVersionedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeVersionedStore")
            .field("entry_count", &self.entries.len())
            .finish()
    }
}


#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn search_is_capped_and_ranked(mags in prop::collection::vec(0u64..1000, 0..30)) {
            let mut store = TimeVersionedStore::new();
            for (i, mag) in mags.iter().enumerate() {
                store
                    .upload(
                        &format!("file{i:02}"),
                        SizeDescriptor::new(format!("{mag}kb")),
                        None,
                        None,
                    )
                    .unwrap();
            }

            let names = store.search("file", None);
            prop_assert_eq!(names.len(), mags.len().min(SEARCH_RESULT_LIMIT));

            let magnitude_of = |name: &str| -> u64 {
                let index: usize = name["file".len()..].parse().unwrap();
                mags[index]
            };
            for pair in names.windows(2) {
                let (left, right) = (magnitude_of(&pair[0]), magnitude_of(&pair[1]));
                prop_assert!(left > right || (left == right && pair[0] < pair[1]));
            }
        }

        #[test]
        fn rollback_discards_exactly_entries_after_cutoff(
            offsets in prop::collection::vec(0u64..20_000, 0..30),
            cutoff_offset in 0u64..20_000,
        ) {
            let base = Timestamp::from_ymd_hms(2021, 7, 1, 0, 0, 0).unwrap();
            let mut store = TimeVersionedStore::new();
            for (i, offset) in offsets.iter().enumerate() {
                store
                    .upload(
                        &format!("f{i}"),
                        SizeDescriptor::new("1kb"),
                        Some(base.saturating_add_seconds(*offset)),
                        None,
                    )
                    .unwrap();
            }

            let cutoff = base.saturating_add_seconds(cutoff_offset);
            let confirm = store.rollback(cutoff);

            let survivors = offsets.iter().filter(|o| **o <= cutoff_offset).count();
            prop_assert_eq!(store.len(), survivors);
            prop_assert_eq!(confirm.removed, offsets.len() - survivors);
            prop_assert!(store
                .entries()
                .all(|e| e.created_at.map_or(true, |c| !c.is_after(&cutoff))));
        }
    }
}
