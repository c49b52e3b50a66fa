use serde::{Deserialize, Serialize};

use bankledger_core::{CustomerName, LedgerResult, ensure_depositable, ensure_withdrawable};
use bankledger_events::EventSink;

use crate::event::LedgerEvent;

/// One customer's named balance.
///
/// Balance changes only through [`deposit`](Account::deposit) and
/// [`withdraw`](Account::withdraw), which never let it go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    name: CustomerName,
    balance: f64,
}

impl Account {
    /// Open an account holding `initial_deposit`.
    ///
    /// The amount is not validated here; `Ledger::add_customer` does that.
    pub fn new(name: CustomerName, initial_deposit: f64) -> Self {
        Self {
            name,
            balance: initial_deposit,
        }
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add a strictly positive `amount` and emit `Deposited`.
    ///
    /// Refused when the new balance would not be finite.
    pub fn deposit(
        &mut self,
        amount: f64,
        sink: &impl EventSink<LedgerEvent>,
    ) -> LedgerResult<()> {
        let amount = ensure_depositable(amount, self.balance)?;

        self.balance += amount;
        sink.emit(LedgerEvent::Deposited {
            name: self.name.clone(),
            amount,
            balance: self.balance,
        });
        Ok(())
    }

    /// Remove `amount` (`0 < amount <= balance`) and emit `Withdrawn`.
    pub fn withdraw(
        &mut self,
        amount: f64,
        sink: &impl EventSink<LedgerEvent>,
    ) -> LedgerResult<()> {
        let amount = ensure_withdrawable(amount, self.balance)?;

        self.balance -= amount;
        sink.emit(LedgerEvent::Withdrawn {
            name: self.name.clone(),
            amount,
            balance: self.balance,
        });
        Ok(())
    }
}
