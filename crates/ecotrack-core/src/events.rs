use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every state change in the engine produces an Event.
/// The CLI prints them as JSON; a GUI would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Progress was applied to a challenge.
    ProgressRecorded {
        challenge_id: u32,
        current: u32,
        target: u32,
        at: DateTime<Utc>,
    },
    /// A challenge crossed from incomplete to complete.
    ChallengeCompleted {
        challenge_id: u32,
        title: String,
        points_awarded: u32,
        at: DateTime<Utc>,
    },
    PointsCredited {
        amount: u32,
        balance: u32,
        at: DateTime<Utc>,
    },
    /// A reward was exchanged for points. Doubles as the redemption
    /// confirmation; nothing else is recorded about it.
    RewardRedeemed {
        reward_id: u32,
        name: String,
        cost: u32,
        remaining: u32,
        at: DateTime<Utc>,
    },
    StreakIncremented {
        streak: u32,
        at: DateTime<Utc>,
    },
    /// All challenges back to the template, log and streak cleared.
    ChallengesReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        points: u32,
        streak: u32,
        completed_challenges: usize,
        total_challenges: usize,
        at: DateTime<Utc>,
    },
}
