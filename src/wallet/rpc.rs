//! EIP-1193 wallet reached over JSON-RPC.
//!
//! Desktop and browser-bridge wallets expose the same request surface as an
//! injected `window.ethereum` object on a local endpoint; this adapter speaks
//! to such an endpoint, or to any alloy transport in tests.

use alloy::primitives::Address;
use alloy::rpc::client::RpcClient;
use alloy::transports::http::{Http, reqwest::Client};
use alloy::transports::{BoxTransport, Transport};
use async_trait::async_trait;
use url::Url;

use crate::wallet::capability::WalletCapability;
use crate::wallet::types::{AuthorizedAccounts, WalletResult};

/// A wallet behind a JSON-RPC transport.
#[derive(Clone)]
pub struct RpcWallet {
    transport: BoxTransport,
    client: RpcClient,
    endpoint: Option<Url>,
}

impl RpcWallet {
    /// Wallet served over HTTP at `endpoint`. No connection is made here.
    pub fn connect_http(endpoint: Url) -> Self {
        let transport = Http::<Client>::new(endpoint.clone());
        let mut wallet = Self::from_transport(transport);
        wallet.endpoint = Some(endpoint);
        wallet
    }

    /// Wallet behind an arbitrary transport.
    pub fn from_transport<T>(transport: T) -> Self
    where
        T: Transport + Clone,
    {
        let transport = transport.boxed();
        let client = RpcClient::new(transport.clone(), true);
        Self {
            transport,
            client,
            endpoint: None,
        }
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
}

#[async_trait]
impl WalletCapability for RpcWallet {
    fn exists(&self) -> bool {
        true
    }

    async fn request_accounts(&self) -> WalletResult<AuthorizedAccounts> {
        let accounts: Vec<Address> = self
            .client
            .request_noparams("eth_requestAccounts")
            .await?;

        tracing::debug!(accounts = accounts.len(), "Wallet answered authorization request");
        AuthorizedAccounts::new(accounts)
    }

    fn transport(&self) -> BoxTransport {
        self.transport.clone()
    }
}

impl std::fmt::Debug for RpcWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcWallet")
            .field("endpoint", &self.endpoint.as_ref().map(Url::as_str))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::types::WalletError;
    use alloy::primitives::address;
    use alloy::rpc::json_rpc::ErrorPayload;
    use alloy::transports::mock::{Asserter, MockTransport};

    #[tokio::test]
    async fn test_request_accounts_approved() {
        let asserter = Asserter::new();
        let account = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        asserter.push_success(&vec![account]);

        let wallet = RpcWallet::from_transport(MockTransport::new(asserter));
        let accounts = wallet.request_accounts().await.unwrap();
        assert_eq!(accounts.as_slice(), &[account]);
    }

    #[tokio::test]
    async fn test_request_accounts_rejected() {
        let asserter = Asserter::new();
        asserter.push_failure(ErrorPayload {
            code: 4001,
            message: "User rejected the request.".into(),
            data: None,
        });

        let wallet = RpcWallet::from_transport(MockTransport::new(asserter));
        let err = wallet.request_accounts().await.unwrap_err();
        assert!(matches!(err, WalletError::Denied(_)));
    }

    #[tokio::test]
    async fn test_request_accounts_empty() {
        let asserter = Asserter::new();
        asserter.push_success(&Vec::<Address>::new());

        let wallet = RpcWallet::from_transport(MockTransport::new(asserter));
        let err = wallet.request_accounts().await.unwrap_err();
        assert!(matches!(err, WalletError::Denied(_)));
    }

    #[test]
    fn test_http_wallet_keeps_endpoint() {
        let url: Url = "http://127.0.0.1:1248".parse().unwrap();
        let wallet = RpcWallet::connect_http(url.clone());
        assert!(wallet.exists());
        assert_eq!(wallet.endpoint(), Some(&url));
        assert!(format!("{:?}", wallet).contains("127.0.0.1:1248"));
    }
}
