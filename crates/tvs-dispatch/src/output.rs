use std::fmt;

use tvs_types::SizeDescriptor;

/// Result of one dispatched record.
///
/// The output sequence of a run mirrors the input record order, one
/// output per record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Confirmation string from an upload, copy, or rollback.
    Confirmation(String),
    /// Size descriptor from a get with a live match.
    Size(SizeDescriptor),
    /// Ranked name list from a search; possibly empty.
    Names(Vec<String>),
    /// Absent-value marker from a get with no live match.
    Absent,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmation(text) => f.write_str(text),
            Self::Size(size) => write!(f, "{size}"),
            Self::Names(names) => write!(f, "[{}]", names.join(", ")),
            Self::Absent => f.write_str("<absent>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(
            Output::Confirmation("uploaded Cars.txt".into()).to_string(),
            "uploaded Cars.txt"
        );
        assert_eq!(
            Output::Size(SizeDescriptor::new("200kb")).to_string(),
            "200kb"
        );
        assert_eq!(
            Output::Names(vec!["Baa.pdf".into(), "Baz.pdf".into()]).to_string(),
            "[Baa.pdf, Baz.pdf]"
        );
        assert_eq!(Output::Names(vec![]).to_string(), "[]");
        assert_eq!(Output::Absent.to_string(), "<absent>");
    }
}
