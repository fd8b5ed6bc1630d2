//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Address the `CatRace` contract is deployed at on the local development chain.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Root configuration for the contract client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Target contract (address and interface asset).
    pub contract: ContractConfig,

    /// Wallet endpoint and timeouts.
    pub wallet: WalletConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Contract descriptor source.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Deployed contract address (0x-prefixed hex).
    pub address: String,

    /// Optional path to an ABI asset. When unset the embedded `CatRace` ABI is used.
    pub abi_path: Option<String>,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            abi_path: None,
        }
    }
}

/// Wallet configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of the user's wallet (e.g. "http://127.0.0.1:1248").
    pub endpoint: Option<String>,

    /// Upper bound on the authorization prompt, in seconds.
    /// Unset means wait for the user indefinitely.
    pub authorization_timeout_secs: Option<u64>,

    /// Upper bound on the signer lookup, in seconds. Unset means no bound.
    pub signer_timeout_secs: Option<u64>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
