//! Ledger behaviour switches.

use serde::{Deserialize, Serialize};

/// What `add_customer` does with a name that is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNamePolicy {
    /// Fail with `DuplicateCustomer`.
    #[default]
    Reject,
    /// Store the duplicate. Lookups keep returning the first registration.
    Allow,
}

/// What `calculate_interest` does when an account's computed interest is not
/// positive (zero balance, or a rate of zero or below).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestFailurePolicy {
    /// Reject the whole batch before any account is credited.
    #[default]
    Abort,
    /// Credit the accounts that can be credited and report the rest.
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub duplicate_names: DuplicateNamePolicy,
    pub interest_failure: InterestFailurePolicy,
}

impl LedgerConfig {
    pub fn with_duplicate_names(mut self, policy: DuplicateNamePolicy) -> Self {
        self.duplicate_names = policy;
        self
    }

    pub fn with_interest_failure(mut self, policy: InterestFailurePolicy) -> Self {
        self.interest_failure = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: LedgerConfig = serde_json::from_str(r#"{"interest_failure":"skip"}"#).unwrap();
        assert_eq!(config.duplicate_names, DuplicateNamePolicy::Reject);
        assert_eq!(config.interest_failure, InterestFailurePolicy::Skip);

        let empty: LedgerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LedgerConfig::default());
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(serde_json::from_str::<LedgerConfig>(r#"{"duplicate_names":"merge"}"#).is_err());
    }
}
