//! Wallet-facing types and error definitions.

use alloy::primitives::Address;
use alloy::transports::TransportError;
use thiserror::Error;

/// EIP-1193 code for "the user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// EIP-1193 code for "the requested account has not been authorized".
pub const UNAUTHORIZED_CODE: i64 = 4100;

/// Errors reported by the wallet or by the provider built on its transport.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The user (or the wallet on their behalf) refused the request.
    #[error("request rejected by wallet: {0}")]
    Denied(String),

    /// The wallet could not be reached or answered with an error.
    #[error("wallet transport error: {0}")]
    Transport(String),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

impl From<TransportError> for WalletError {
    fn from(err: TransportError) -> Self {
        match err.as_error_resp() {
            Some(payload)
                if payload.code == USER_REJECTED_CODE || payload.code == UNAUTHORIZED_CODE =>
            {
                WalletError::Denied(payload.message.to_string())
            }
            _ => WalletError::Transport(err.to_string()),
        }
    }
}

/// Accounts the user approved for this session, in wallet order.
///
/// Never empty: an approval without accounts is treated as a denial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedAccounts(Vec<Address>);

impl AuthorizedAccounts {
    /// Wrap the wallet's answer to an authorization request.
    pub fn new(accounts: Vec<Address>) -> WalletResult<Self> {
        if accounts.is_empty() {
            return Err(WalletError::Denied(
                "wallet approved the request without exposing any account".to_string(),
            ));
        }
        Ok(Self(accounts))
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.0.contains(address)
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.0
    }
}
