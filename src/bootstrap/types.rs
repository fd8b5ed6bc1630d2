//! Bootstrap step and error definitions.

use alloy::primitives::Address;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::contract::types::ContractError;
use crate::wallet::types::WalletError;

/// The four ordered steps of a bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Detection,
    Authorization,
    SignerDerivation,
    Binding,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Detection => "detection",
            Step::Authorization => "authorization",
            Step::SignerDerivation => "signer_derivation",
            Step::Binding => "binding",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a bootstrap produced no client.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No wallet in the host environment.
    #[error("Wallet not found")]
    WalletNotFound,

    /// The user or wallet refused a request made during `step`.
    #[error("Authorization denied during {step}: {message}")]
    AuthorizationDenied { step: Step, message: String },

    /// The wallet or provider failed a request.
    #[error("Wallet transport failure during {step}: {message}")]
    Transport { step: Step, message: String },

    /// The provider's signer is not among the accounts the user approved.
    #[error("Signer {0} was not authorized by the user")]
    UnauthorizedSigner(Address),

    /// The contract descriptor is malformed.
    #[error("Contract binding failed: {0}")]
    Binding(String),

    /// A configured wait bound elapsed.
    #[error("{step} timed out after {after:?}")]
    Timeout { step: Step, after: Duration },
}

/// Result type for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

impl BootstrapError {
    /// Wallet failure observed while running `step`.
    pub fn from_wallet(step: Step, err: WalletError) -> Self {
        match err {
            WalletError::Denied(message) => BootstrapError::AuthorizationDenied { step, message },
            WalletError::Transport(message) => BootstrapError::Transport { step, message },
        }
    }

    /// The step that failed.
    pub fn step(&self) -> Step {
        match self {
            BootstrapError::WalletNotFound => Step::Detection,
            BootstrapError::AuthorizationDenied { step, .. }
            | BootstrapError::Transport { step, .. }
            | BootstrapError::Timeout { step, .. } => *step,
            BootstrapError::UnauthorizedSigner(_) => Step::SignerDerivation,
            BootstrapError::Binding(_) => Step::Binding,
        }
    }
}

impl From<ContractError> for BootstrapError {
    fn from(err: ContractError) -> Self {
        BootstrapError::Binding(err.to_string())
    }
}
