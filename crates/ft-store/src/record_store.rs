//! Authoritative flag state for all identities, kept durable through a
//! whole-store JSON snapshot.

use crate::{Snapshot, StoreError, snapshot};

use ft_core::{FlagPatch, UserRecord};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use log::{error, info, warn};
use tokio::sync::{Mutex, RwLock};

/// Shared handle to the record store.
///
/// Cloning is cheap; all clones see the same in-memory state and the same
/// snapshot file.
pub struct RecordStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    /// Current flag state for every known identity.
    users: RwLock<HashMap<String, UserRecord>>,
    /// Serializes merge+persist sequences. Held across the snapshot write so
    /// two updates can never interleave their read-modify-write steps or
    /// land their snapshots out of merge order. Readers only contend on
    /// `users`, never on this gate.
    write_gate: Mutex<()>,
    path: PathBuf,
}

/// Result of a merge-update.
///
/// The merge itself cannot fail. `persist_error` is set when the snapshot
/// write failed afterwards: the in-memory state is then ahead of disk until
/// the next successful write.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub record: UserRecord,
    pub persist_error: Option<StoreError>,
}

impl UpdateOutcome {
    pub fn is_durable(&self) -> bool {
        self.persist_error.is_none()
    }
}

impl RecordStore {
    /// Open the store backed by the snapshot file at `path`.
    ///
    /// A missing file starts an empty store and writes an initial empty
    /// snapshot. A corrupt or unreadable file also starts an empty store:
    /// refusing to start would turn one bad write into an outage.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let users = if path.exists() {
            match snapshot::read(&path) {
                Ok(snap) => {
                    info!(
                        "Loaded {} user record(s) from {}",
                        snap.users.len(),
                        path.display()
                    );
                    snap.users
                }
                Err(e) => {
                    warn!("Snapshot unusable, starting with an empty store: {e}");
                    HashMap::new()
                }
            }
        } else {
            info!("No snapshot at {} (first start)", path.display());
            if let Err(e) = snapshot::write(&path, &Snapshot::default()) {
                error!("Failed to write initial snapshot: {e}");
            }
            HashMap::new()
        };

        Self {
            inner: Arc::new(StoreInner {
                users: RwLock::new(users),
                write_gate: Mutex::new(()),
                path,
            }),
        }
    }

    /// Current record for `identity`, if any. Never touches disk.
    pub async fn get(&self, identity: &str) -> Option<UserRecord> {
        let users = self.inner.users.read().await;
        users.get(identity).cloned()
    }

    /// One consistent copy of the full identity → record mapping.
    pub async fn list(&self) -> HashMap<String, UserRecord> {
        let users = self.inner.users.read().await;
        users.clone()
    }

    /// Number of known identities.
    pub async fn count(&self) -> usize {
        let users = self.inner.users.read().await;
        users.len()
    }

    /// Merge `patch` into the record for `identity`, creating the record if
    /// absent, then rewrite the snapshot.
    ///
    /// Fields absent from the patch keep their stored value. The in-memory
    /// merge is kept even when the snapshot write fails; the failure is
    /// logged at error severity and reported in the outcome.
    pub async fn update(&self, identity: &str, patch: &FlagPatch) -> UpdateOutcome {
        let _gate = self.inner.write_gate.lock().await;

        let (record, snap) = {
            let mut users = self.inner.users.write().await;
            let entry = users.entry(identity.to_string()).or_default();
            entry.apply(patch, Utc::now());
            let record = entry.clone();
            let snap = Snapshot {
                users: users.clone(),
            };
            (record, snap)
        };

        // Map lock released: readers proceed while the file is rewritten.
        // The gate still excludes other writers, so every snapshot on disk
        // is a complete post-merge state in merge order.
        let persist_error = match snapshot::write(&self.inner.path, &snap) {
            Ok(()) => None,
            Err(e) => {
                error!(
                    "Snapshot write failed after update of {identity:?}; \
                     in-memory state is ahead of disk: {e}"
                );
                Some(e)
            }
        };

        UpdateOutcome {
            record,
            persist_error,
        }
    }
}

impl Clone for RecordStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
