use serde::{Deserialize, Serialize};

use bankledger_core::CustomerName;

/// Interest credited to one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestCredit {
    pub name: CustomerName,
    pub interest: f64,
    /// Balance after the credit.
    pub balance: f64,
}

/// Outcome of one `calculate_interest` batch, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestReport {
    pub rate_percent: f64,
    pub credited: Vec<InterestCredit>,
    /// Accounts whose computed interest was not positive (skip policy only).
    pub skipped: Vec<CustomerName>,
}

impl InterestReport {
    pub fn new(rate_percent: f64) -> Self {
        Self {
            rate_percent,
            ..Self::default()
        }
    }

    pub fn total_interest(&self) -> f64 {
        self.credited.iter().map(|c| c.interest).sum()
    }
}

/// `balance * rate_percent / 100`.
pub fn interest_on(balance: f64, rate_percent: f64) -> f64 {
    balance * (rate_percent / 100.0)
}
