//! Amount validation.
//!
//! Amounts are plain `f64`. These helpers are the single place where the
//! positivity and sufficiency rules live.

use crate::error::{LedgerError, LedgerResult};

/// Reject NaN and infinities.
pub fn ensure_finite(amount: f64) -> LedgerResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(LedgerError::not_finite(amount))
    }
}

/// Require a finite amount strictly greater than zero.
pub fn ensure_positive(amount: f64) -> LedgerResult<f64> {
    let amount = ensure_finite(amount)?;
    if amount <= 0.0 {
        return Err(LedgerError::not_positive(amount));
    }
    Ok(amount)
}

/// Require a positive amount whose addition keeps `balance` finite.
pub fn ensure_depositable(amount: f64, balance: f64) -> LedgerResult<f64> {
    let amount = ensure_positive(amount)?;
    if !(balance + amount).is_finite() {
        return Err(LedgerError::balance_overflow(amount, balance));
    }
    Ok(amount)
}

/// Require `0 < amount <= available`.
pub fn ensure_withdrawable(amount: f64, available: f64) -> LedgerResult<f64> {
    let amount = ensure_positive(amount)?;
    if amount > available {
        return Err(LedgerError::insufficient_funds(amount, available));
    }
    Ok(amount)
}
