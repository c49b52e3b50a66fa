//! Customer identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Name identifying a customer within a ledger.
///
/// Must contain at least one non-whitespace character. The value is stored
/// verbatim and compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Result<Self, LedgerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::invalid_name(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomerName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CustomerName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CustomerName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for CustomerName {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CustomerName {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerName> for String {
    fn from(value: CustomerName) -> Self {
        value.0
    }
}

impl FromStr for CustomerName {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            CustomerName::new("   ").unwrap_err(),
            LedgerError::InvalidName("   ".to_string())
        );
        assert!("".parse::<CustomerName>().is_err());
    }

    #[test]
    fn names_are_kept_verbatim() {
        let name = CustomerName::new(" John Doe").unwrap();
        assert_eq!(name.as_str(), " John Doe");
        assert_ne!(name, "John Doe");
    }

    #[test]
    fn serde_is_transparent_and_validated() {
        let name: CustomerName = serde_json::from_str("\"Jane Smith\"").unwrap();
        assert_eq!(name, "Jane Smith");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Jane Smith\"");
        assert!(serde_json::from_str::<CustomerName>("\"\"").is_err());
    }
}
