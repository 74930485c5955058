//! Challenge set and progress tracking.
//!
//! The store is a plain state machine: callers apply `record_progress`
//! one unit at a time and observe completion through the returned
//! [`ProgressUpdate`]. There is no internal clock and no threads.
//!
//! ## Invariants
//!
//! ```text
//! 0 <= current <= target
//! completed == (current >= target)
//! completed challenges accept no further progress
//! the completion log holds each id at most once, in completion order
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    Commute,
    Water,
    Recycling,
    Energy,
    Planting,
}

/// A target-bound task with progress and a point reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Units of progress required to complete.
    pub target: u32,
    /// Points credited on completion.
    pub points: u32,
    pub category: ChallengeCategory,
    /// Shown as a hint next to the challenge in clients.
    pub tip: String,
    /// Featured challenges carry bonus points and render separately.
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub completed: bool,
}

impl Challenge {
    /// 0.0 .. 1.0 progress toward the target.
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (self.current as f64 / self.target as f64).min(1.0)
    }
}

/// Result of applying one unit of progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub challenge: Challenge,
    /// True only on the call that crossed from incomplete to complete.
    pub just_completed: bool,
}

/// The weekly challenge template: four weekly entries plus the featured one.
///
/// All progress starts at zero; the set is restored to this template on
/// first run and on explicit reset.
pub fn weekly_template() -> Vec<Challenge> {
    let entry = |id, title: &str, description: &str, target, points, category, tip: &str| {
        Challenge {
            id,
            title: title.to_string(),
            description: description.to_string(),
            target,
            points,
            category,
            tip: tip.to_string(),
            featured: false,
            current: 0,
            completed: false,
        }
    };

    let mut challenges = vec![
        entry(
            1,
            "Use Public Transport 5 Times",
            "Take public transport 5 times this week to reduce emissions.",
            5,
            20,
            ChallengeCategory::Commute,
            "Plan your trips in advance to make public transport more convenient!",
        ),
        entry(
            2,
            "Reduce Water Usage by 10L",
            "Save 10 liters of water by taking shorter showers.",
            10,
            15,
            ChallengeCategory::Water,
            "Use a timer to keep your showers under 5 minutes.",
        ),
        entry(
            3,
            "Recycle 5 Items",
            "Recycle 5 items to reduce waste.",
            5,
            10,
            ChallengeCategory::Recycling,
            "Check local recycling guidelines to ensure proper sorting.",
        ),
        entry(
            4,
            "Turn Off Lights for 10 Hours",
            "Save energy by turning off lights when not in use.",
            10,
            15,
            ChallengeCategory::Energy,
            "Use natural light during the day to reduce energy consumption.",
        ),
    ];

    let mut featured = entry(
        5,
        "Plant a Tree This Week",
        "Plant a tree in your community to earn bonus points!",
        1,
        50,
        ChallengeCategory::Planting,
        "Visit a local nursery or join a community planting event.",
    );
    featured.featured = true;
    challenges.push(featured);

    challenges
}

/// Holds the active challenge set and the append-only completion log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeStore {
    challenges: Vec<Challenge>,
    completed_log: Vec<u32>,
}

impl ChallengeStore {
    /// Fresh store from the weekly template.
    pub fn from_template() -> Self {
        Self {
            challenges: weekly_template(),
            completed_log: Vec::new(),
        }
    }

    /// Rebuild from persisted parts, normalizing values that drifted
    /// outside the invariants (clamped progress, recomputed completion,
    /// deduplicated log).
    pub fn from_parts(challenges: Vec<Challenge>, completed_log: Vec<u32>) -> Self {
        let mut store = Self {
            challenges,
            completed_log,
        };
        store.normalize();
        store
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn get(&self, id: u32) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Challenge ids in the order they first completed.
    pub fn completed_log(&self) -> &[u32] {
        &self.completed_log
    }

    pub fn completed_count(&self) -> usize {
        self.challenges.iter().filter(|c| c.completed).count()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply one unit of progress to a challenge.
    ///
    /// Returns `None` (a silent no-op) when the id is unknown or the
    /// challenge is already completed. Otherwise increments `current` by
    /// exactly 1, clamped to `target`, and recomputes `completed`; a
    /// challenge with `target == 1` completes on the first call.
    pub fn record_progress(&mut self, id: u32) -> Option<ProgressUpdate> {
        let challenge = self.challenges.iter_mut().find(|c| c.id == id)?;
        if challenge.completed {
            return None;
        }

        challenge.current = (challenge.current + 1).min(challenge.target);
        let just_completed = challenge.current >= challenge.target;
        challenge.completed = just_completed;
        let update = ProgressUpdate {
            challenge: challenge.clone(),
            just_completed,
        };

        if just_completed && !self.completed_log.contains(&id) {
            self.completed_log.push(id);
        }
        Some(update)
    }

    /// Restore every challenge to the template and clear the log.
    ///
    /// Irreversible; callers are expected to gate this behind explicit
    /// confirmation.
    pub fn reset(&mut self) -> &[Challenge] {
        self.challenges = weekly_template();
        self.completed_log.clear();
        &self.challenges
    }

    fn normalize(&mut self) {
        for c in &mut self.challenges {
            c.current = c.current.min(c.target);
            c.completed = c.current >= c.target;
        }
        let mut seen = Vec::with_capacity(self.completed_log.len());
        for id in self.completed_log.drain(..).collect::<Vec<_>>() {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        self.completed_log = seen;
    }
}

impl Default for ChallengeStore {
    fn default() -> Self {
        Self::from_template()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn template_starts_clean() {
        let store = ChallengeStore::from_template();
        assert_eq!(store.challenges().len(), 5);
        assert!(store.challenges().iter().all(|c| c.current == 0 && !c.completed));
        assert!(store.completed_log().is_empty());
    }

    #[test]
    fn progress_increments_by_one() {
        let mut store = ChallengeStore::from_template();
        let update = store.record_progress(1).unwrap();
        assert_eq!(update.challenge.current, 1);
        assert!(!update.just_completed);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut store = ChallengeStore::from_template();
        assert!(store.record_progress(999).is_none());
        assert!(store.challenges().iter().all(|c| c.current == 0));
    }

    #[test]
    fn completes_exactly_once() {
        let mut store = ChallengeStore::from_template();
        // Challenge 1 has target 5.
        for i in 1..=5 {
            let update = store.record_progress(1).unwrap();
            assert_eq!(update.just_completed, i == 5);
        }
        let c = store.get(1).unwrap();
        assert_eq!(c.current, 5);
        assert!(c.completed);
        assert_eq!(store.completed_log(), &[1]);
    }

    #[test]
    fn completed_challenge_rejects_progress() {
        let mut store = ChallengeStore::from_template();
        for _ in 0..5 {
            store.record_progress(1);
        }
        assert!(store.record_progress(1).is_none());
        assert_eq!(store.get(1).unwrap().current, 5);
        assert_eq!(store.completed_log(), &[1]);
    }

    #[test]
    fn target_one_completes_on_first_call() {
        let mut store = ChallengeStore::from_template();
        // The featured challenge has target 1.
        let update = store.record_progress(5).unwrap();
        assert!(update.just_completed);
        assert_eq!(update.challenge.current, 1);
    }

    #[test]
    fn reset_restores_template_and_clears_log() {
        let mut store = ChallengeStore::from_template();
        for _ in 0..5 {
            store.record_progress(1);
        }
        store.record_progress(5);
        assert_eq!(store.completed_log().len(), 2);

        store.reset();
        assert!(store.challenges().iter().all(|c| c.current == 0 && !c.completed));
        assert!(store.completed_log().is_empty());
    }

    #[test]
    fn from_parts_clamps_out_of_range_progress() {
        let mut challenges = weekly_template();
        challenges[0].current = 99;
        challenges[1].current = 3;
        challenges[1].completed = true; // stale flag, target is 10
        let store = ChallengeStore::from_parts(challenges, vec![1, 1, 3]);

        let c = store.get(1).unwrap();
        assert_eq!(c.current, c.target);
        assert!(c.completed);
        let c = store.get(2).unwrap();
        assert_eq!(c.current, 3);
        assert!(!c.completed);
        assert_eq!(store.completed_log(), &[1, 3]);
    }

    proptest! {
        #[test]
        fn invariants_hold_under_arbitrary_progress(ids in proptest::collection::vec(0u32..8, 0..200)) {
            let mut store = ChallengeStore::from_template();
            for id in ids {
                store.record_progress(id);
                for c in store.challenges() {
                    prop_assert!(c.current <= c.target);
                    prop_assert_eq!(c.completed, c.current >= c.target);
                }
            }
            let log = store.completed_log();
            let unique: std::collections::HashSet<_> = log.iter().collect();
            prop_assert_eq!(log.len(), unique.len());
        }
    }
}
