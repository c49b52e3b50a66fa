//! Domain error model.

use thiserror::Error;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Why a monetary amount was refused.
///
/// Insufficient funds is a flavour of invalid amount rather than its own error
/// kind, so callers can match on [`LedgerError::InvalidAmount`] alone and still
/// tell the cases apart when they care.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AmountViolation {
    /// Zero or negative.
    #[error("amount must be positive")]
    NotPositive,

    /// NaN or infinite.
    #[error("amount must be a finite number")]
    NotFinite,

    /// Withdrawal larger than the current balance.
    #[error("insufficient funds (available: {available})")]
    InsufficientFunds { available: f64 },

    /// Deposit that would push the balance past the largest finite value.
    #[error("balance would overflow (current: {balance})")]
    BalanceOverflow { balance: f64 },
}

/// Ledger-level error.
///
/// Every failure is deterministic and raised at the point of violation. Nothing
/// in the ledger recovers from these locally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// A monetary amount failed its constraint.
    #[error("invalid amount {amount}: {reason}")]
    InvalidAmount {
        amount: f64,
        reason: AmountViolation,
    },

    /// A lookup by name matched no account.
    #[error("customer not found: {0}")]
    NotFound(String),

    /// A customer with this name is already registered.
    #[error("customer already exists: {0}")]
    DuplicateCustomer(String),

    /// A customer name was empty or blank.
    #[error("invalid customer name: {0:?}")]
    InvalidName(String),
}

impl LedgerError {
    pub fn not_positive(amount: f64) -> Self {
        Self::InvalidAmount {
            amount,
            reason: AmountViolation::NotPositive,
        }
    }

    pub fn not_finite(amount: f64) -> Self {
        Self::InvalidAmount {
            amount,
            reason: AmountViolation::NotFinite,
        }
    }

    pub fn insufficient_funds(amount: f64, available: f64) -> Self {
        Self::InvalidAmount {
            amount,
            reason: AmountViolation::InsufficientFunds { available },
        }
    }

    pub fn balance_overflow(amount: f64, balance: f64) -> Self {
        Self::InvalidAmount {
            amount,
            reason: AmountViolation::BalanceOverflow { balance },
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateCustomer(name.into())
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Whether this is an `InvalidAmount` error, whatever the reason.
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_is_an_invalid_amount() {
        let err = LedgerError::insufficient_funds(1200.0, 1000.0);
        assert!(err.is_invalid_amount());
        assert_eq!(
            err.to_string(),
            "invalid amount 1200: insufficient funds (available: 1000)"
        );
    }

    #[test]
    fn not_found_names_the_customer() {
        let err = LedgerError::not_found("Jane Smith");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "customer not found: Jane Smith");
    }

    #[test]
    fn not_positive_message() {
        assert_eq!(
            LedgerError::not_positive(-5.0).to_string(),
            "invalid amount -5: amount must be positive"
        );
    }
}
