use tracing::{debug, warn};

use bankledger_core::{
    CustomerName, LedgerError, LedgerResult, ensure_depositable, ensure_finite, ensure_positive,
    ensure_withdrawable,
};
use bankledger_events::EventSink;

use crate::account::Account;
use crate::config::{DuplicateNamePolicy, InterestFailurePolicy, LedgerConfig};
use crate::event::LedgerEvent;
use crate::interest::{InterestCredit, InterestReport, interest_on};

/// The bank: owns every account and composes multi-account operations.
///
/// Accounts are kept in registration order. Lookups scan that order and the
/// first match wins.
#[derive(Debug)]
pub struct Ledger<S> {
    accounts: Vec<Account>,
    config: LedgerConfig,
    sink: S,
}

impl<S> Default for Ledger<S>
where
    S: EventSink<LedgerEvent> + Default,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Ledger<S>
where
    S: EventSink<LedgerEvent>,
{
    pub fn new(sink: S) -> Self {
        Self::with_config(LedgerConfig::default(), sink)
    }

    pub fn with_config(config: LedgerConfig, sink: S) -> Self {
        Self {
            accounts: Vec::new(),
            config,
            sink,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts in registration order.
    pub fn customers(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(Account::balance).sum()
    }

    /// Register a customer with a strictly positive opening balance.
    ///
    /// Nothing is stored when this fails.
    pub fn add_customer(
        &mut self,
        name: impl Into<String>,
        initial_deposit: f64,
    ) -> LedgerResult<()> {
        let initial_deposit = ensure_positive(initial_deposit)?;
        let name = CustomerName::new(name)?;

        if self.config.duplicate_names == DuplicateNamePolicy::Reject
            && self.position(name.as_str()).is_ok()
        {
            warn!(customer = %name, "rejected duplicate customer");
            return Err(LedgerError::duplicate(name));
        }

        self.accounts.push(Account::new(name.clone(), initial_deposit));
        self.sink.emit(LedgerEvent::CustomerRegistered {
            name,
            initial_deposit,
        });
        Ok(())
    }

    pub fn get_customer_by_name(&self, name: &str) -> LedgerResult<&Account> {
        let idx = self.position(name)?;
        Ok(&self.accounts[idx])
    }

    /// Mutable lookup, for calling `Account::deposit`/`withdraw` directly.
    ///
    /// The caller supplies the sink to those calls; keep a handle to it (e.g.
    /// build the ledger over `&sink` or an `Arc`).
    pub fn get_customer_by_name_mut(&mut self, name: &str) -> LedgerResult<&mut Account> {
        let idx = self.position(name)?;
        Ok(&mut self.accounts[idx])
    }

    pub fn deposit(&mut self, name: &str, amount: f64) -> LedgerResult<()> {
        let idx = self.position(name)?;
        self.accounts[idx].deposit(amount, &self.sink)
    }

    pub fn withdraw(&mut self, name: &str, amount: f64) -> LedgerResult<()> {
        let idx = self.position(name)?;
        self.accounts[idx].withdraw(amount, &self.sink)
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// The withdrawal runs first. If either leg would be refused, neither
    /// account changes and no `TransferCompleted` is emitted.
    pub fn transfer_funds(&mut self, from: &str, to: &str, amount: f64) -> LedgerResult<()> {
        let from_idx = self.position(from)?;
        let to_idx = self.position(to)?;

        if let Err(err) = self.check_transfer(from_idx, to_idx, amount) {
            warn!(from, to, amount, error = %err, "transfer rejected");
            return Err(err);
        }

        self.accounts[from_idx].withdraw(amount, &self.sink)?;
        self.accounts[to_idx].deposit(amount, &self.sink)?;

        self.sink.emit(LedgerEvent::TransferCompleted {
            from: self.accounts[from_idx].name().clone(),
            to: self.accounts[to_idx].name().clone(),
            amount,
        });
        Ok(())
    }

    /// Credit every account with `balance * rate_percent / 100`, in
    /// registration order.
    ///
    /// A non-finite rate is rejected outright. Accounts whose interest comes
    /// out non-positive, or would overflow the balance, are handled per
    /// [`InterestFailurePolicy`]: `Abort` fails the whole batch before
    /// crediting anyone, `Skip` passes over them.
    pub fn calculate_interest(&mut self, rate_percent: f64) -> LedgerResult<InterestReport> {
        let rate_percent = ensure_finite(rate_percent)?;
        let policy = self.config.interest_failure;

        // Each account's interest depends only on its own balance, so checking
        // up front sees the same values the loop below will.
        if policy == InterestFailurePolicy::Abort {
            for account in &self.accounts {
                let interest = interest_on(account.balance(), rate_percent);
                if let Err(err) = ensure_depositable(interest, account.balance()) {
                    warn!(customer = %account.name(), rate_percent, "interest batch aborted");
                    return Err(err);
                }
            }
        }

        let mut report = InterestReport::new(rate_percent);
        for account in self.accounts.iter_mut() {
            let interest = interest_on(account.balance(), rate_percent);

            if policy == InterestFailurePolicy::Skip
                && ensure_depositable(interest, account.balance()).is_err()
            {
                self.sink.emit(LedgerEvent::InterestSkipped {
                    name: account.name().clone(),
                    rate_percent,
                    interest,
                });
                report.skipped.push(account.name().clone());
                continue;
            }

            account.deposit(interest, &self.sink)?;
            self.sink.emit(LedgerEvent::InterestAccrued {
                name: account.name().clone(),
                rate_percent,
                interest,
            });
            report.credited.push(InterestCredit {
                name: account.name().clone(),
                interest,
                balance: account.balance(),
            });
        }

        debug!(
            rate_percent,
            credited = report.credited.len(),
            skipped = report.skipped.len(),
            "interest batch applied"
        );
        Ok(report)
    }

    /// Both legs of a transfer, validated against current balances.
    fn check_transfer(&self, from_idx: usize, to_idx: usize, amount: f64) -> LedgerResult<()> {
        let from_balance = self.accounts[from_idx].balance();
        ensure_withdrawable(amount, from_balance)?;
        // A self-transfer deposits back what it just withdrew.
        if from_idx != to_idx {
            ensure_depositable(amount, self.accounts[to_idx].balance())?;
        }
        Ok(())
    }

    fn position(&self, name: &str) -> LedgerResult<usize> {
        self.accounts
            .iter()
            .position(|account| account.name().as_str() == name)
            .ok_or_else(|| LedgerError::not_found(name))
    }
}
