use serde::{Deserialize, Serialize};

use bankledger_core::CustomerName;
use bankledger_events::Event;

/// Notifications emitted by accounts and the ledger.
///
/// Every event names the account it concerns and the amount involved.
/// `Display` renders the human-readable notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    CustomerRegistered {
        name: CustomerName,
        initial_deposit: f64,
    },
    Deposited {
        name: CustomerName,
        amount: f64,
        /// Balance after the deposit.
        balance: f64,
    },
    Withdrawn {
        name: CustomerName,
        amount: f64,
        /// Balance after the withdrawal.
        balance: f64,
    },
    TransferCompleted {
        from: CustomerName,
        to: CustomerName,
        amount: f64,
    },
    InterestAccrued {
        name: CustomerName,
        rate_percent: f64,
        interest: f64,
    },
    /// Only emitted under `InterestFailurePolicy::Skip`.
    InterestSkipped {
        name: CustomerName,
        rate_percent: f64,
        interest: f64,
    },
}

impl LedgerEvent {
    /// The account the event concerns. For transfers, the source account.
    pub fn account(&self) -> &CustomerName {
        match self {
            LedgerEvent::CustomerRegistered { name, .. }
            | LedgerEvent::Deposited { name, .. }
            | LedgerEvent::Withdrawn { name, .. }
            | LedgerEvent::InterestAccrued { name, .. }
            | LedgerEvent::InterestSkipped { name, .. } => name,
            LedgerEvent::TransferCompleted { from, .. } => from,
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            LedgerEvent::CustomerRegistered {
                initial_deposit, ..
            } => *initial_deposit,
            LedgerEvent::Deposited { amount, .. }
            | LedgerEvent::Withdrawn { amount, .. }
            | LedgerEvent::TransferCompleted { amount, .. } => *amount,
            LedgerEvent::InterestAccrued { interest, .. }
            | LedgerEvent::InterestSkipped { interest, .. } => *interest,
        }
    }
}

impl Event for LedgerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::CustomerRegistered { .. } => "ledger.customer.registered",
            LedgerEvent::Deposited { .. } => "ledger.account.deposited",
            LedgerEvent::Withdrawn { .. } => "ledger.account.withdrawn",
            LedgerEvent::TransferCompleted { .. } => "ledger.transfer.completed",
            LedgerEvent::InterestAccrued { .. } => "ledger.interest.accrued",
            LedgerEvent::InterestSkipped { .. } => "ledger.interest.skipped",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl core::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedgerEvent::CustomerRegistered { name, .. } => {
                write!(f, "New customer added: {name}")
            }
            LedgerEvent::Deposited { name, amount, .. } => {
                write!(f, "{name} deposited ${amount}")
            }
            LedgerEvent::Withdrawn { name, amount, .. } => write!(f, "{name} withdrew ${amount}"),
            LedgerEvent::TransferCompleted { from, to, amount } => {
                write!(f, "Transferred ${amount} from {from} to {to}")
            }
            LedgerEvent::InterestAccrued { name, interest, .. } => {
                write!(f, "{name} earned interest of ${interest}")
            }
            LedgerEvent::InterestSkipped {
                name,
                rate_percent,
                ..
            } => write!(f, "{name} earned no interest at {rate_percent}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> CustomerName {
        CustomerName::new(s).unwrap()
    }

    #[test]
    fn renders_human_readable_notifications() {
        let deposited = LedgerEvent::Deposited {
            name: name("John Doe"),
            amount: 200.0,
            balance: 1200.0,
        };
        assert_eq!(deposited.to_string(), "John Doe deposited $200");

        let transfer = LedgerEvent::TransferCompleted {
            from: name("John Doe"),
            to: name("Jane Smith"),
            amount: 200.0,
        };
        assert_eq!(
            transfer.to_string(),
            "Transferred $200 from John Doe to Jane Smith"
        );
        assert_eq!(transfer.account(), &name("John Doe"));
        assert_eq!(transfer.amount(), 200.0);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let event = LedgerEvent::InterestAccrued {
            name: name("Jane Smith"),
            rate_percent: 3.0,
            interest: 21.0,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "interest_accrued");
        assert_eq!(json["name"], "Jane Smith");
        assert_eq!(json["interest"], 21.0);
        assert_eq!(event.event_type(), "ledger.interest.accrued");
    }
}
