//! The fixed (address, interface) pair identifying the target contract.

use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use crate::config::schema::{ContractConfig, DEFAULT_CONTRACT_ADDRESS};
use crate::contract::types::{ContractError, ContractResult};

/// `CatRace` build artifact, embedded at compile time.
pub const CATRACE_ABI: &str = include_str!("../../abi/CatRace.json");

/// Interface assets come either as a build artifact (`{"abi": [...]}`) or as a bare ABI array.
#[derive(Deserialize)]
#[serde(untagged)]
enum AbiAsset {
    Artifact { abi: JsonAbi },
    Bare(JsonAbi),
}

/// Address and interface of the contract the client is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDescriptor {
    address: Address,
    abi: Arc<JsonAbi>,
}

impl ContractDescriptor {
    pub fn new(address: Address, abi: JsonAbi) -> Self {
        Self {
            address,
            abi: Arc::new(abi),
        }
    }

    /// Parse an address string and an interface asset.
    pub fn parse(address: &str, abi_json: &str) -> ContractResult<Self> {
        let address: Address = address
            .parse()
            .map_err(|_| ContractError::InvalidAddress(address.to_string()))?;

        let abi = match serde_json::from_str::<AbiAsset>(abi_json)
            .map_err(|e| ContractError::InvalidAbi(e.to_string()))?
        {
            AbiAsset::Artifact { abi } | AbiAsset::Bare(abi) => abi,
        };

        if abi.functions.is_empty() {
            return Err(ContractError::InvalidAbi(
                "interface declares no functions".to_string(),
            ));
        }

        Ok(Self::new(address, abi))
    }

    /// The built-in `CatRace` deployment.
    pub fn catrace() -> ContractResult<Self> {
        Self::parse(DEFAULT_CONTRACT_ADDRESS, CATRACE_ABI)
    }

    /// Descriptor from the `[contract]` section, reading `abi_path` when set.
    pub fn from_config(config: &ContractConfig) -> ContractResult<Self> {
        match &config.abi_path {
            Some(path) => {
                let abi_json = std::fs::read_to_string(Path::new(path)).map_err(|e| {
                    ContractError::InvalidAbi(format!("cannot read '{}': {}", path, e))
                })?;
                Self::parse(&config.address, &abi_json)
            }
            None => Self::parse(&config.address, CATRACE_ABI),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Whether the interface declares a function called `name`.
    pub fn has_function(&self, name: &str) -> bool {
        self.abi.function(name).is_some()
    }
}
