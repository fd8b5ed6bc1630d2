//! Signing identity derived from a wallet transport.
//!
//! The private key stays inside the wallet. Transactions sent through
//! [`WalletSigner::provider`] go out as `eth_sendTransaction` with the signer
//! as `from`, and the wallet signs them.

use alloy::network::Ethereum;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::BoxTransport;

use crate::wallet::types::{WalletError, WalletResult};

/// An authorized account together with the provider that can act for it.
#[derive(Clone)]
pub struct WalletSigner {
    address: Address,
    provider: DynProvider<Ethereum>,
}

impl WalletSigner {
    /// Build a provider over `transport` and take its current account.
    ///
    /// The provider carries no local fillers: nonce, gas and chain ID are left
    /// to the wallet, as a browser provider would.
    pub async fn derive(transport: BoxTransport) -> WalletResult<Self> {
        let client = RpcClient::new(transport, true);
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_client(client)
            .erased();

        let accounts = provider.get_accounts().await?;
        let address = accounts.first().copied().ok_or_else(|| {
            WalletError::Transport("provider exposes no account to sign with".to_string())
        })?;

        tracing::debug!(address = %address, "Signer derived from wallet provider");
        Ok(Self { address, provider })
    }

    /// The account transactions are sent from.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }
}

impl std::fmt::Debug for WalletSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSigner")
            .field("address", &self.address)
            .finish()
    }
}
