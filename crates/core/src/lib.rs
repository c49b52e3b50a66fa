//! `bankledger-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod amount;
pub mod error;
pub mod name;

pub use amount::{ensure_depositable, ensure_finite, ensure_positive, ensure_withdrawable};
pub use error::{AmountViolation, LedgerError, LedgerResult};
pub use name::CustomerName;
