//! Reward catalog and redemption.
//!
//! The catalog is immutable; redemption debits the points ledger and
//! returns a confirmation. Rewards are repeatable -- redeeming does not
//! consume the catalog entry, and no redemption history is kept.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, RedeemError};
use crate::points::PointsLedger;

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: u32,
    pub name: String,
    /// Points debited on redemption.
    pub cost: u32,
}

/// Confirmation returned by a successful redemption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redemption {
    pub reward_id: u32,
    pub name: String,
    pub cost: u32,
    /// Ledger balance after the debit.
    pub remaining: u32,
}

/// Static list of redeemable rewards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardCatalog {
    rewards: Vec<Reward>,
}

impl RewardCatalog {
    pub fn new(rewards: Vec<Reward>) -> Self {
        Self { rewards }
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn get(&self, id: u32) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }

    /// Exchange points for a reward.
    ///
    /// Fails with [`RedeemError::UnknownReward`] when the id is absent and
    /// with [`RedeemError::CannotAfford`] when the ledger cannot cover the
    /// cost; in both cases the ledger is untouched. On success the ledger
    /// is debited by exactly `cost`.
    pub fn redeem(&self, id: u32, ledger: &mut PointsLedger) -> Result<Redemption, RedeemError> {
        let reward = self.get(id).ok_or(RedeemError::UnknownReward(id))?;
        let remaining = ledger.debit(reward.cost).map_err(|e| match e {
            LedgerError::InsufficientBalance { amount, balance } => RedeemError::CannotAfford {
                cost: amount,
                balance,
            },
        })?;
        Ok(Redemption {
            reward_id: reward.id,
            name: reward.name.clone(),
            cost: reward.cost,
            remaining,
        })
    }
}

impl Default for RewardCatalog {
    /// The stock EcoTrack rewards.
    fn default() -> Self {
        let reward = |id, name: &str, cost| Reward {
            id,
            name: name.to_string(),
            cost,
        };
        Self::new(vec![
            reward(1, "Plant a Tree", 50),
            reward(2, "EcoTrack Badge", 100),
            reward(3, "Eco-Friendly Sticker", 30),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_reward_is_rejected() {
        let catalog = RewardCatalog::default();
        let mut ledger = PointsLedger::new(1000);
        assert_eq!(
            catalog.redeem(99, &mut ledger).unwrap_err(),
            RedeemError::UnknownReward(99)
        );
        assert_eq!(ledger.balance(), 1000);
    }

    #[test]
    fn cannot_afford_leaves_balance_unchanged() {
        let catalog = RewardCatalog::default();
        let mut ledger = PointsLedger::new(30);
        // "Plant a Tree" costs 50.
        let err = catalog.redeem(1, &mut ledger).unwrap_err();
        assert_eq!(
            err,
            RedeemError::CannotAfford {
                cost: 50,
                balance: 30
            }
        );
        assert_eq!(ledger.balance(), 30);
    }

    #[test]
    fn success_debits_exactly_the_cost() {
        let catalog = RewardCatalog::default();
        let mut ledger = PointsLedger::new(80);
        let redemption = catalog.redeem(3, &mut ledger).unwrap();
        assert_eq!(redemption.name, "Eco-Friendly Sticker");
        assert_eq!(redemption.cost, 30);
        assert_eq!(redemption.remaining, 50);
        assert_eq!(ledger.balance(), 50);
    }

    #[test]
    fn rewards_are_repeatable() {
        let catalog = RewardCatalog::default();
        let mut ledger = PointsLedger::new(100);
        catalog.redeem(3, &mut ledger).unwrap();
        let second = catalog.redeem(3, &mut ledger).unwrap();
        assert_eq!(second.remaining, 40);
        assert_eq!(catalog.rewards().len(), 3);
    }
}
