//! Session state machine.
//!
//! One [`Session`] owns the whole mutable state of the engine: the
//! challenge store, the points ledger, the streak counter, and the reward
//! catalog. Commands run to completion before the next begins; there is no
//! parallelism and nothing blocks.
//!
//! Within `record_progress` the sequence is fixed: increment -> recompute
//! completion -> credit points -> increment streak -> append to the
//! completion log. All of it happens before any persistence, so a caller
//! never observes partial state.
//!
//! The session itself never touches storage -- mutation and persistence
//! are separate steps, orchestrated by [`crate::service::ChallengeService`].

use chrono::Utc;

use crate::challenge::{Challenge, ChallengeStore};
use crate::error::RedeemError;
use crate::events::Event;
use crate::points::PointsLedger;
use crate::rewards::{Redemption, RewardCatalog};
use crate::storage::SessionSnapshot;
use crate::streak::StreakTracker;

/// Default first-run balance and streak, matching a returning user's
/// starter profile.
pub const DEFAULT_SEED_POINTS: u32 = 80;
pub const DEFAULT_SEED_STREAK: u32 = 3;

#[derive(Debug, Clone)]
pub struct Session {
    store: ChallengeStore,
    ledger: PointsLedger,
    streak: StreakTracker,
    catalog: RewardCatalog,
}

impl Session {
    /// Fresh session from the template with the default seeds.
    pub fn new() -> Self {
        Self::with_seeds(DEFAULT_SEED_POINTS, DEFAULT_SEED_STREAK)
    }

    /// Fresh session from the template with explicit seed values.
    pub fn with_seeds(points: u32, streak: u32) -> Self {
        Self {
            store: ChallengeStore::from_template(),
            ledger: PointsLedger::new(points),
            streak: StreakTracker::new(streak),
            catalog: RewardCatalog::default(),
        }
    }

    /// Rebuild from a persisted snapshot. Out-of-range values are
    /// normalized by the store.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            store: ChallengeStore::from_parts(snapshot.challenges, snapshot.completed_challenge_log),
            ledger: PointsLedger::new(snapshot.points),
            streak: StreakTracker::new(snapshot.streak),
            catalog: RewardCatalog::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn challenges(&self) -> &[Challenge] {
        self.store.challenges()
    }

    pub fn challenge(&self, id: u32) -> Option<&Challenge> {
        self.store.get(id)
    }

    pub fn completed_log(&self) -> &[u32] {
        self.store.completed_log()
    }

    pub fn points(&self) -> u32 {
        self.ledger.balance()
    }

    pub fn streak(&self) -> u32 {
        self.streak.current()
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    /// Full serializable state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            challenges: self.store.challenges().to_vec(),
            completed_challenge_log: self.store.completed_log().to_vec(),
            points: self.ledger.balance(),
            streak: self.streak.current(),
        }
    }

    /// Build a summary snapshot event.
    pub fn snapshot_event(&self) -> Event {
        Event::StateSnapshot {
            points: self.ledger.balance(),
            streak: self.streak.current(),
            completed_challenges: self.store.completed_count(),
            total_challenges: self.store.challenges().len(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply one unit of progress to a challenge.
    ///
    /// Returns the emitted events, empty when the call was a no-op
    /// (unknown id or already-completed challenge). On the completing
    /// call the challenge's points are credited and the streak bumped.
    pub fn record_progress(&mut self, id: u32) -> Vec<Event> {
        let Some(update) = self.store.record_progress(id) else {
            return Vec::new();
        };

        let at = Utc::now();
        let mut events = vec![Event::ProgressRecorded {
            challenge_id: update.challenge.id,
            current: update.challenge.current,
            target: update.challenge.target,
            at,
        }];

        if update.just_completed {
            let balance = self.ledger.credit(update.challenge.points);
            let streak = self.streak.increment();
            events.push(Event::ChallengeCompleted {
                challenge_id: update.challenge.id,
                title: update.challenge.title.clone(),
                points_awarded: update.challenge.points,
                at,
            });
            events.push(Event::PointsCredited {
                amount: update.challenge.points,
                balance,
                at,
            });
            events.push(Event::StreakIncremented { streak, at });
        }

        events
    }

    /// Exchange points for a catalog reward.
    ///
    /// The returned event doubles as the confirmation; on failure the
    /// ledger is untouched.
    pub fn redeem(&mut self, reward_id: u32) -> Result<(Redemption, Event), RedeemError> {
        let redemption = self.catalog.redeem(reward_id, &mut self.ledger)?;
        let event = Event::RewardRedeemed {
            reward_id: redemption.reward_id,
            name: redemption.name.clone(),
            cost: redemption.cost,
            remaining: redemption.remaining,
            at: Utc::now(),
        };
        Ok((redemption, event))
    }

    /// Restore challenges to the template, clear the completion log, and
    /// zero the streak. Points are left alone.
    ///
    /// Irreversible; callers gate this behind explicit confirmation.
    pub fn reset_challenges(&mut self) -> Event {
        self.store.reset();
        self.streak.reset();
        Event::ChallengesReset { at: Utc::now() }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod session_tests;
