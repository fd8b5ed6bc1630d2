//! The narrow interface the bootstrapper needs from a wallet.

use alloy::transports::BoxTransport;
use async_trait::async_trait;

use crate::wallet::types::{AuthorizedAccounts, WalletResult};

/// A wallet reachable from the host environment.
///
/// Mirrors the three things an injected EIP-1193 provider offers a dApp:
/// a presence check, `eth_requestAccounts`, and the request transport itself.
#[async_trait]
pub trait WalletCapability: Send + Sync {
    /// Whether the wallet is actually available to talk to.
    fn exists(&self) -> bool;

    /// Ask the user to authorize accounts for this application.
    ///
    /// Suspends until the user answers in the wallet's own UI.
    async fn request_accounts(&self) -> WalletResult<AuthorizedAccounts>;

    /// The wallet's request transport, used to build a provider and signer.
    fn transport(&self) -> BoxTransport;
}
