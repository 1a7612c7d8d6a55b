//! Core type definitions for Satlend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contract ID as assigned by the backend (opaque, stable)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(pub String);

impl ContractId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Satoshi amount (1 BTC = 100_000_000 sats)
pub type Sats = u64;

/// Constants
pub mod constants {
    use super::Sats;

    /// 1 BTC in satoshis
    pub const SATS_PER_BTC: Sats = 100_000_000;

    /// Platform year length used for all annualized-rate conversions
    pub const YEAR_DAYS: f64 = 365.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_id_display() {
        let id = ContractId::new("c-7f3a");
        assert_eq!(id.as_str(), "c-7f3a");
        assert_eq!(id.to_string(), "c-7f3a");
    }

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Mainnet.as_str(), "mainnet");
        assert_eq!(Network::Testnet.as_str(), "testnet");
    }
}
