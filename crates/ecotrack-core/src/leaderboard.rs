//! Community leaderboard.
//!
//! Standings are the fixed community entries merged with the live user at
//! their current point balance. Only the user's points are real state;
//! the other rows are static until a backend supplies them.

use serde::{Deserialize, Serialize};

/// Display name for the live user's row.
pub const USER_NAME: &str = "You";

/// Fixed community standings: (name, points).
const COMMUNITY: [(&str, u32); 4] = [("Alex", 150), ("Maya", 120), ("Sam", 100), ("Liam", 70)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub points: u32,
    /// True for the live user's row.
    pub is_you: bool,
}

/// Ranked standings including the live user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Build standings with the user at `user_points`.
    ///
    /// Ranks are assigned by descending points; on a tie the community
    /// entry outranks the user.
    pub fn with_user(user_points: u32) -> Self {
        let mut entries: Vec<LeaderboardEntry> = COMMUNITY
            .iter()
            .map(|(name, points)| LeaderboardEntry {
                rank: 0,
                name: (*name).to_string(),
                points: *points,
                is_you: false,
            })
            .collect();
        entries.push(LeaderboardEntry {
            rank: 0,
            name: USER_NAME.to_string(),
            points: user_points,
            is_you: true,
        });

        // Stable sort: the user was pushed last, so equal points keep the
        // community entry first.
        entries.sort_by(|a, b| b.points.cmp(&a.points));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = (i + 1) as u32;
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// The live user's row.
    pub fn user(&self) -> &LeaderboardEntry {
        // with_user always inserts the user row.
        self.entries
            .iter()
            .find(|e| e.is_you)
            .unwrap_or(&self.entries[0])
    }

    pub fn user_rank(&self) -> u32 {
        self.user().rank
    }

    /// 0.0 ..= 1.0 progress toward overtaking the next-ranked entry;
    /// 1.0 at rank 1.
    pub fn progress_to_next_rank(&self) -> f64 {
        let user = self.user();
        if user.rank == 1 {
            return 1.0;
        }
        let next = &self.entries[(user.rank - 2) as usize];
        if next.points == 0 {
            return 1.0;
        }
        (user.points as f64 / next.points as f64).min(1.0)
    }
}
