use tvs_types::{SizeDescriptor, Timestamp};

use crate::error::{DispatchError, DispatchResult};

/// One parsed operation record.
///
/// Records arrive as tagged lists of strings; the opcode selects the
/// operation and the remaining arguments are positional. The `*_AT`
/// family carries the wall-clock timestamp as its first argument in the
/// wire format `YYYY-MM-DDTHH:MM:SS`; the untimed family carries none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Upload {
        name: String,
        size: SizeDescriptor,
        ttl_seconds: Option<u64>,
    },
    Get {
        name: String,
    },
    Copy {
        source: String,
        destination: String,
    },
    Search {
        prefix: String,
    },
    UploadAt {
        at: Timestamp,
        name: String,
        size: SizeDescriptor,
        ttl_seconds: Option<u64>,
    },
    GetAt {
        at: Timestamp,
        name: String,
    },
    CopyAt {
        at: Timestamp,
        source: String,
        destination: String,
    },
    SearchAt {
        at: Timestamp,
        prefix: String,
    },
    Rollback {
        at: Timestamp,
    },
}

impl Command {
    /// Decode a tagged string record into a command.
    pub fn parse(record: &[String]) -> DispatchResult<Self> {
        let (opcode, args) = record.split_first().ok_or(DispatchError::EmptyRecord)?;

        match opcode.as_str() {
            "FILE_UPLOAD" => match args {
                [name, size] => Ok(Self::Upload {
                    name: name.clone(),
                    size: SizeDescriptor::new(size.clone()),
                    ttl_seconds: None,
                }),
                [name, size, ttl] => Ok(Self::Upload {
                    name: name.clone(),
                    size: SizeDescriptor::new(size.clone()),
                    ttl_seconds: Some(parse_ttl(ttl)?),
                }),
                _ => Err(arity(opcode, "name, size, [ttl]", args.len())),
            },
            "FILE_GET" => match args {
                [name] => Ok(Self::Get { name: name.clone() }),
                _ => Err(arity(opcode, "name", args.len())),
            },
            "FILE_COPY" => match args {
                [source, destination] => Ok(Self::Copy {
                    source: source.clone(),
                    destination: destination.clone(),
                }),
                _ => Err(arity(opcode, "source, destination", args.len())),
            },
            "FILE_SEARCH" => match args {
                [prefix] => Ok(Self::Search {
                    prefix: prefix.clone(),
                }),
                _ => Err(arity(opcode, "prefix", args.len())),
            },
            "FILE_UPLOAD_AT" => match args {
                [at, name, size] => Ok(Self::UploadAt {
                    at: parse_at(at)?,
                    name: name.clone(),
                    size: SizeDescriptor::new(size.clone()),
                    ttl_seconds: None,
                }),
                [at, name, size, ttl] => Ok(Self::UploadAt {
                    at: parse_at(at)?,
                    name: name.clone(),
                    size: SizeDescriptor::new(size.clone()),
                    ttl_seconds: Some(parse_ttl(ttl)?),
                }),
                _ => Err(arity(opcode, "timestamp, name, size, [ttl]", args.len())),
            },
            "FILE_GET_AT" => match args {
                [at, name] => Ok(Self::GetAt {
                    at: parse_at(at)?,
                    name: name.clone(),
                }),
                _ => Err(arity(opcode, "timestamp, name", args.len())),
            },
            "FILE_COPY_AT" => match args {
                [at, source, destination] => Ok(Self::CopyAt {
                    at: parse_at(at)?,
                    source: source.clone(),
                    destination: destination.clone(),
                }),
                _ => Err(arity(opcode, "timestamp, source, destination", args.len())),
            },
            "FILE_SEARCH_AT" => match args {
                [at, prefix] => Ok(Self::SearchAt {
                    at: parse_at(at)?,
                    prefix: prefix.clone(),
                }),
                _ => Err(arity(opcode, "timestamp, prefix", args.len())),
            },
            "ROLLBACK" => match args {
                [at] => Ok(Self::Rollback { at: parse_at(at)? }),
                _ => Err(arity(opcode, "timestamp", args.len())),
            },
            _ => Err(DispatchError::UnknownOpcode(opcode.clone())),
        }
    }

    /// The opcode this command was parsed from.
    pub fn opcode(&self) -> &'static str {
        match self {
            Self::Upload { .. } => "FILE_UPLOAD",
            Self::Get { .. } => "FILE_GET",
            Self::Copy { .. } => "FILE_COPY",
            Self::Search { .. } => "FILE_SEARCH",
            Self::UploadAt { .. } => "FILE_UPLOAD_AT",
            Self::GetAt { .. } => "FILE_GET_AT",
            Self::CopyAt { .. } => "FILE_COPY_AT",
            Self::SearchAt { .. } => "FILE_SEARCH_AT",
            Self::Rollback { .. } => "ROLLBACK",
        }
    }
}

fn parse_at(raw: &str) -> DispatchResult<Timestamp> {
    Ok(raw.parse::<Timestamp>()?)
}

fn parse_ttl(raw: &str) -> DispatchResult<u64> {
    raw.parse().map_err(|source| DispatchError::InvalidTtl {
        raw: raw.to_string(),
        source,
    })
}

fn arity(opcode: &str, expected: &'static str, found: usize) -> DispatchError {
    DispatchError::InvalidArity {
        opcode: opcode.to_string(),
        expected,
        found,
    }
}
