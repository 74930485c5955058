//! Points ledger.
//!
//! A single unsigned balance mutated only through `credit` and `debit`.
//! The balance can never be observed negative: `debit` rejects any amount
//! above the current balance and leaves it unchanged.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsLedger {
    balance: u32,
}

impl PointsLedger {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Add to the balance. Always succeeds; saturates at `u32::MAX`.
    pub fn credit(&mut self, amount: u32) -> u32 {
        self.balance = self.balance.saturating_add(amount);
        self.balance
    }

    /// Subtract from the balance.
    ///
    /// Fails with [`LedgerError::InsufficientBalance`] when `amount`
    /// exceeds the balance; the balance is left unchanged.
    pub fn debit(&mut self, amount: u32) -> Result<u32, LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientBalance {
                amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}
