use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque size tag attached to an entry, e.g. `200kb`.
///
/// The expected shape is a run of decimal digits followed by a unit
/// suffix. The store treats the whole string as opaque except when search
/// ranks matches: [`magnitude`](SizeDescriptor::magnitude) strips the
/// suffix and exposes the numeric part.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeDescriptor(String);

impl SizeDescriptor {
    /// Wrap a raw size string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw descriptor string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric magnitude for search ranking: the leading run of decimal
    /// digits parsed as an integer. A descriptor with no leading digits
    /// ranks as 0; a run too long for `u64` saturates.
    pub fn magnitude(&self) -> u64 {
        let end = self
            .0
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.0.len());
        let digits = &self.0[..end];
        if digits.is_empty() {
            return 0;
        }
        digits.parse().unwrap_or(u64::MAX)
    }
}

impl fmt::Debug for SizeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SizeDescriptor({})", self.0)
    }
}

impl fmt::Display for SizeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_strips_unit_suffix() {
        assert_eq!(SizeDescriptor::new("200kb").magnitude(), 200);
        assert_eq!(SizeDescriptor::new("1024mb").magnitude(), 1024);
        assert_eq!(SizeDescriptor::new("7b").magnitude(), 7);
    }

    #[test]
    fn magnitude_without_suffix() {
        assert_eq!(SizeDescriptor::new("4096").magnitude(), 4096);
    }

    #[test]
    fn magnitude_without_leading_digits_is_zero() {
        assert_eq!(SizeDescriptor::new("kb").magnitude(), 0);
        assert_eq!(SizeDescriptor::new("").magnitude(), 0);
    }

    #[test]
    fn magnitude_saturates_on_overflow() {
        let huge = SizeDescriptor::new("99999999999999999999999999kb");
        assert_eq!(huge.magnitude(), u64::MAX);
    }

    #[test]
    fn display_is_verbatim() {
        assert_eq!(SizeDescriptor::new("150kb").to_string(), "150kb");
    }

    #[test]
    fn serde_roundtrip() {
        let size = SizeDescriptor::new("300kb");
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, "\"300kb\"");
        let parsed: SizeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(size, parsed);
    }
}
