//! Contract-side error definitions.

use thiserror::Error;

/// Errors from building a descriptor or calling through a bound client.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The configured address is not a 20-byte hex address.
    #[error("Invalid contract address '{0}'")]
    InvalidAddress(String),

    /// The interface asset could not be read or parsed.
    #[error("Invalid contract interface: {0}")]
    InvalidAbi(String),

    /// Unknown function, argument mismatch, or undecodable return data.
    #[error("ABI error: {0}")]
    Abi(String),

    /// The wallet or node failed the request.
    #[error("RPC error: {0}")]
    Rpc(String),
}

/// Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

impl From<alloy::contract::Error> for ContractError {
    fn from(err: alloy::contract::Error) -> Self {
        match err {
            alloy::contract::Error::TransportError(e) => ContractError::Rpc(e.to_string()),
            other => ContractError::Abi(other.to_string()),
        }
    }
}
