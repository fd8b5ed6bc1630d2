//! Wallet access subsystem.
//!
//! # Data Flow
//! ```text
//! Host environment (CATRACE_WALLET_URL, [wallet].endpoint)
//!     → env.rs (detection)
//!     → capability.rs (narrow wallet interface)
//!     → rpc.rs (EIP-1193 wallet over JSON-RPC)
//!     → signer.rs (provider on the wallet transport, signing identity)
//! ```
//!
//! # Security Constraints
//! - Keys never leave the wallet; this crate only holds account addresses
//! - Every authorization goes through the wallet's own prompt
//! - Wallet error messages are passed through without reinterpretation

pub mod capability;
pub mod env;
pub mod rpc;
pub mod signer;
pub mod types;

pub use capability::WalletCapability;
pub use env::HostEnvironment;
pub use rpc::RpcWallet;
pub use signer::WalletSigner;
pub use types::{AuthorizedAccounts, WalletError, WalletResult};
