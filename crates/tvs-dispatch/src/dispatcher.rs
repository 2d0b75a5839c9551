use tracing::debug;

use tvs_store::TimeVersionedStore;

use crate::command::Command;
use crate::error::DispatchResult;
use crate::output::Output;

/// Drives a [`TimeVersionedStore`] from parsed operation records.
///
/// Records execute in input order against a single owned store, and each
/// result lands in an output sequence mirroring that order. A store-level
/// failure aborts the run; absent values and empty searches are ordinary
/// outputs, not failures.
#[derive(Debug, Default)]
pub struct Dispatcher {
    store: TimeVersionedStore,
}

impl Dispatcher {
    /// Create a dispatcher over an empty store.
    pub fn new() -> Self {
        Self {
            store: TimeVersionedStore::new(),
        }
    }

    /// The store driven by this dispatcher.
    pub fn store(&self) -> &TimeVersionedStore {
        &self.store
    }

    /// Execute one parsed command.
    pub fn execute(&mut self, command: Command) -> DispatchResult<Output> {
        debug!(opcode = command.opcode(), "dispatch");
        match command {
            Command::Upload {
                name,
                size,
                ttl_seconds,
            } => {
                let confirm = self.store.upload(&name, size, None, ttl_seconds)?;
                Ok(Output::Confirmation(confirm.to_string()))
            }
            Command::UploadAt {
                at,
                name,
                size,
                ttl_seconds,
            } => {
                let confirm = self.store.upload(&name, size, Some(at), ttl_seconds)?;
                Ok(Output::Confirmation(confirm.to_string()))
            }
            Command::Get { name } => Ok(lookup(&self.store, &name, None)),
            Command::GetAt { at, name } => Ok(lookup(&self.store, &name, Some(at))),
            Command::Copy {
                source,
                destination,
            } => {
                let confirm = self.store.copy(&source, &destination, None)?;
                Ok(Output::Confirmation(confirm.to_string()))
            }
            Command::CopyAt {
                at,
                source,
                destination,
            } => {
                let confirm = self.store.copy(&source, &destination, Some(at))?;
                Ok(Output::Confirmation(confirm.to_string()))
            }
            Command::Search { prefix } => Ok(Output::Names(self.store.search(&prefix, None))),
            Command::SearchAt { at, prefix } => {
                Ok(Output::Names(self.store.search(&prefix, Some(at))))
            }
            Command::Rollback { at } => {
                Ok(Output::Confirmation(self.store.rollback(at).to_string()))
            }
        }
    }

    /// Parse and execute an ordered sequence of tagged records.
    ///
    /// Returns one output per record, in input order. The first parse or
    /// store failure aborts the run.
    pub fn run<R: AsRef<[String]>>(&mut self, records: &[R]) -> DispatchResult<Vec<Output>> {
        records
            .iter()
            .map(|record| self.execute(Command::parse(record.as_ref())?))
            .collect()
    }
}

fn lookup(store: &TimeVersionedStore, name: &str, at: Option<tvs_types::Timestamp>) -> Output {
    match store.get(name, at) {
        Some(size) => Output::Size(size),
        None => Output::Absent,
    }
}
