//! Wallet-to-contract handshake.
//!
//! # Data Flow
//! ```text
//! Option<&WalletCapability>
//!     → 1. detection        (synchronous, no wallet traffic)
//!     → 2. authorization    (eth_requestAccounts, waits on the user)
//!     → 3. signer derivation (provider on wallet transport, eth_accounts)
//!     → 4. contract binding (descriptor + signer → ContractClient)
//! ```
//!
//! Each step runs only if the previous one succeeded. Nothing is cached
//! between calls; every bootstrap starts again from detection.

pub mod bootstrapper;
pub mod types;

pub use bootstrapper::ContractClientBootstrapper;
pub use types::{BootstrapError, BootstrapResult, Step};
