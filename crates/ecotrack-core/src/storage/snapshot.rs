//! Durable full-state snapshots.
//!
//! The engine treats each mutating call as an implicit transaction
//! terminated by one snapshot write: the whole session state is
//! serialized to JSON and stored under a single key. Any key-value store
//! satisfies the contract; production uses the SQLite kv table.

use serde::{Deserialize, Serialize};

use crate::challenge::Challenge;
use crate::error::StorageError;

use super::database::Database;

/// Key the session snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "challenge_session";

/// Opaque key-value snapshot store consumed by the engine.
pub trait SnapshotStore {
    /// Returns the stored value, or `None` on first run.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl SnapshotStore for Database {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.kv_get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.kv_set(key, value)
    }
}

/// Full serialized state of challenges, log, points, and streak.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub completed_challenge_log: Vec<u32>,
    pub points: u32,
    #[serde(default)]
    pub streak: u32,
}

impl SessionSnapshot {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored snapshot. Malformed data is treated as absent:
    /// the caller falls back to the template.
    pub fn decode(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!("discarding malformed session snapshot: {e}");
                None
            }
        }
    }
}
