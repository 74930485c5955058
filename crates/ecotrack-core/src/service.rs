//! Session-scoped service: mutate, then persist.
//!
//! [`ChallengeService`] wraps a [`Session`] with an injected
//! [`SnapshotStore`]. Every mutating call runs the session command to
//! completion and then writes one full-state snapshot, so the stored state
//! always reflects a whole transaction -- never a partial one.

use crate::error::{CoreError, StorageError};
use crate::events::Event;
use crate::rewards::Redemption;
use crate::session::Session;
use crate::storage::{SessionSnapshot, SnapshotStore, SNAPSHOT_KEY};

pub struct ChallengeService<S: SnapshotStore> {
    session: Session,
    store: S,
}

impl<S: SnapshotStore> ChallengeService<S> {
    /// Restore the session from the store, falling back to the template
    /// with default seeds when no snapshot exists.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read. Malformed snapshot
    /// data is not an error: it is discarded and the template substituted.
    pub fn open(store: S) -> Result<Self, StorageError> {
        Self::open_with_seeds(store, crate::session::DEFAULT_SEED_POINTS, crate::session::DEFAULT_SEED_STREAK)
    }

    /// Like [`Self::open`] with explicit first-run seed values.
    pub fn open_with_seeds(store: S, seed_points: u32, seed_streak: u32) -> Result<Self, StorageError> {
        let session = match store.load(SNAPSHOT_KEY)? {
            Some(raw) => match SessionSnapshot::decode(&raw) {
                Some(snapshot) => Session::from_snapshot(snapshot),
                None => Session::with_seeds(seed_points, seed_streak),
            },
            None => {
                tracing::debug!("no session snapshot found, starting from template");
                Session::with_seeds(seed_points, seed_streak)
            }
        };
        Ok(Self { session, store })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one unit of progress and persist.
    ///
    /// No-op calls (unknown id, completed challenge) return an empty event
    /// list and skip the snapshot write.
    pub fn record_progress(&mut self, id: u32) -> Result<Vec<Event>, StorageError> {
        let events = self.session.record_progress(id);
        if !events.is_empty() {
            self.persist()?;
        }
        Ok(events)
    }

    /// Redeem a reward and persist.
    ///
    /// Domain rejections ([`crate::error::RedeemError`]) leave both the
    /// session and the stored snapshot untouched.
    pub fn redeem(&mut self, reward_id: u32) -> Result<(Redemption, Event), CoreError> {
        let outcome = self.session.redeem(reward_id).map_err(CoreError::Redeem)?;
        self.persist()?;
        Ok(outcome)
    }

    /// Reset challenges, log, and streak, then persist.
    pub fn reset_challenges(&mut self) -> Result<Event, StorageError> {
        let event = self.session.reset_challenges();
        self.persist()?;
        Ok(event)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = self
            .session
            .snapshot()
            .encode()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        self.store.save(SNAPSHOT_KEY, &raw)?;
        tracing::debug!(points = self.session.points(), streak = self.session.streak(), "session snapshot written");
        Ok(())
    }
}
