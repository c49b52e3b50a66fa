//! In-memory customer ledger: accounts, transfers, interest accrual.
//!
//! Pure domain logic only: no IO, no persistence. Notifications go to an
//! injected [`EventSink`](bankledger_events::EventSink).

pub mod account;
pub mod config;
pub mod event;
pub mod interest;
pub mod ledger;

pub use account::Account;
pub use config::{DuplicateNamePolicy, InterestFailurePolicy, LedgerConfig};
pub use event::LedgerEvent;
pub use interest::{InterestCredit, InterestReport};
pub use ledger::Ledger;

pub use bankledger_core::{AmountViolation, CustomerName, LedgerError, LedgerResult};
