pub mod error;
pub mod record_store;
pub mod snapshot;

pub use error::{Result, StoreError};
pub use record_store::{RecordStore, UpdateOutcome};
pub use snapshot::Snapshot;

#[cfg(test)]
mod tests;
