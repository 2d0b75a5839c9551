use serde::{Deserialize, Serialize};

use tvs_types::{SizeDescriptor, Timestamp};

/// One stored object version.
///
/// Entries are created by `upload` or `copy`, removed only by `rollback`,
/// and never mutated in place. Only the size descriptor is stored, never
/// content bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Identifier. Unique among surviving entries at upload time; copies
    /// may introduce duplicates.
    pub name: String,
    /// Opaque size tag, e.g. `200kb`.
    pub size: SizeDescriptor,
    /// Creation time. Absent for entries created through the untimed call
    /// family; such entries are immune to rollback.
    pub created_at: Option<Timestamp>,
    /// Time-to-live in seconds after creation. Absent means the entry
    /// never expires.
    pub ttl_seconds: Option<u64>,
}

impl Entry {
    /// The instant this entry stops being live: `created_at + ttl_seconds`
    /// when both are present, undefined otherwise.
    pub fn expires_at(&self) -> Option<Timestamp> {
        match (self.created_at, self.ttl_seconds) {
            (Some(created), Some(ttl)) => Some(created.saturating_add_seconds(ttl)),
            _ => None,
        }
    }

    /// Whether this entry is visible at the given query time.
    ///
    /// An entry without a TTL is always live. A TTL'd entry is live
    /// strictly before its expiry; at exactly `expires_at` it is already
    /// gone. A TTL'd entry whose expiry cannot be evaluated (no creation
    /// time, or no query time supplied) is never live.
    pub fn is_live_at(&self, at: Option<Timestamp>) -> bool {
        if self.ttl_seconds.is_none() {
            return true;
        }
        match (self.expires_at(), at) {
            (Some(expires), Some(at)) => at.is_before(&expires),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> Timestamp {
        raw.parse().unwrap()
    }

    fn entry(created_at: Option<Timestamp>, ttl_seconds: Option<u64>) -> Entry {
        Entry {
            name: "File.txt".into(),
            size: SizeDescriptor::new("100kb"),
            created_at,
            ttl_seconds,
        }
    }

    #[test]
    fn no_ttl_is_always_live() {
        let e = entry(Some(ts("2021-07-01T12:00:00")), None);
        assert!(e.is_live_at(None));
        assert!(e.is_live_at(Some(ts("2021-07-01T12:00:00"))));
        assert!(e.is_live_at(Some(ts("2099-01-01T00:00:00"))));
    }

    #[test]
    fn untimed_entry_without_ttl_is_live_unconditionally() {
        let e = entry(None, None);
        assert!(e.is_live_at(None));
        assert!(e.is_live_at(Some(ts("1970-01-01T00:00:00"))));
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let e = entry(Some(ts("2021-07-01T12:00:00")), Some(3600));
        assert_eq!(e.expires_at(), Some(ts("2021-07-01T13:00:00")));
        // One second before expiry: live.
        assert!(e.is_live_at(Some(ts("2021-07-01T12:59:59"))));
        // At exactly expiry: gone.
        assert!(!e.is_live_at(Some(ts("2021-07-01T13:00:00"))));
        assert!(!e.is_live_at(Some(ts("2021-07-01T13:00:01"))));
    }

    #[test]
    fn zero_ttl_expires_at_creation() {
        let e = entry(Some(ts("2021-07-01T12:00:00")), Some(0));
        assert_eq!(e.expires_at(), Some(ts("2021-07-01T12:00:00")));
        assert!(!e.is_live_at(Some(ts("2021-07-01T12:00:00"))));
    }

    #[test]
    fn ttl_without_query_time_is_never_live() {
        let e = entry(Some(ts("2021-07-01T12:00:00")), Some(3600));
        assert!(!e.is_live_at(None));
    }

    #[test]
    fn ttl_without_creation_time_is_never_live() {
        let e = entry(None, Some(3600));
        assert_eq!(e.expires_at(), None);
        assert!(!e.is_live_at(None));
        assert!(!e.is_live_at(Some(ts("2021-07-01T12:00:00"))));
    }

    #[test]
    fn serde_roundtrip() {
        let e = entry(Some(ts("2021-07-01T12:00:00")), Some(60));
        let json = serde_json::to_string(&e).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, parsed);
    }
}
