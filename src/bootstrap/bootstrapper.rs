//! The bootstrap procedure.

use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

use crate::bootstrap::types::{BootstrapError, BootstrapResult, Step};
use crate::config::ClientConfig;
use crate::contract::{ContractClient, ContractDescriptor};
use crate::observability::metrics;
use crate::wallet::capability::WalletCapability;
use crate::wallet::signer::WalletSigner;
use crate::wallet::types::WalletResult;

/// Turns wallet access into a [`ContractClient`] for one fixed contract.
#[derive(Debug, Clone)]
pub struct ContractClientBootstrapper {
    descriptor: ContractDescriptor,
    authorization_timeout: Option<Duration>,
    signer_timeout: Option<Duration>,
}

impl ContractClientBootstrapper {
    /// Bootstrapper for `descriptor`, waiting on the wallet without bound.
    pub fn new(descriptor: ContractDescriptor) -> Self {
        Self {
            descriptor,
            authorization_timeout: None,
            signer_timeout: None,
        }
    }

    /// Build from configuration.
    ///
    /// A malformed descriptor is a configuration defect and is reported here,
    /// before any wallet is contacted.
    pub fn from_config(config: &ClientConfig) -> BootstrapResult<Self> {
        let descriptor = ContractDescriptor::from_config(&config.contract)?;
        let mut bootstrapper = Self::new(descriptor);
        bootstrapper.authorization_timeout =
            config.wallet.authorization_timeout_secs.map(Duration::from_secs);
        bootstrapper.signer_timeout = config.wallet.signer_timeout_secs.map(Duration::from_secs);
        Ok(bootstrapper)
    }

    pub fn with_authorization_timeout(mut self, limit: Duration) -> Self {
        self.authorization_timeout = Some(limit);
        self
    }

    pub fn with_signer_timeout(mut self, limit: Duration) -> Self {
        self.signer_timeout = Some(limit);
        self
    }

    pub fn descriptor(&self) -> &ContractDescriptor {
        &self.descriptor
    }

    /// Detect, authorize, derive the signer, bind.
    ///
    /// `None` means the host has no wallet. Triggers the wallet's authorization
    /// prompt on every call; the wallet decides whether to show it again.
    pub async fn bootstrap<W>(&self, wallet: Option<&W>) -> BootstrapResult<ContractClient>
    where
        W: WalletCapability + ?Sized,
    {
        let result = self.run(wallet).await;
        match &result {
            Ok(_) => metrics::record_bootstrap_success(),
            Err(e) => metrics::record_bootstrap_failure(e.step()),
        }
        result
    }

    async fn run<W>(&self, wallet: Option<&W>) -> BootstrapResult<ContractClient>
    where
        W: WalletCapability + ?Sized,
    {
        // 1. Detection
        let wallet = match wallet {
            Some(wallet) if wallet.exists() => wallet,
            _ => {
                tracing::warn!("No wallet available in host environment");
                return Err(BootstrapError::WalletNotFound);
            }
        };

        // 2. Authorization
        tracing::info!(contract = %self.descriptor.address(), "Requesting wallet authorization");
        let accounts = within(
            Step::Authorization,
            self.authorization_timeout,
            wallet.request_accounts(),
        )
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Wallet authorization failed"))?;

        tracing::info!(accounts = accounts.as_slice().len(), "Wallet authorized accounts");

        // 3. Signer derivation
        let signer = within(
            Step::SignerDerivation,
            self.signer_timeout,
            WalletSigner::derive(wallet.transport()),
        )
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Signer derivation failed"))?;

        if !accounts.contains(&signer.address()) {
            tracing::warn!(
                signer = %signer.address(),
                "Provider signer is outside the authorized account set"
            );
            return Err(BootstrapError::UnauthorizedSigner(signer.address()));
        }

        // 4. Contract binding
        let client = ContractClient::bind(self.descriptor.clone(), signer);

        tracing::info!(
            contract = %client.address(),
            signer = %client.signer_address(),
            "Contract client ready"
        );

        Ok(client)
    }
}

/// Await a wallet round-trip, bounded by `limit` when one is configured.
async fn within<F, T>(step: Step, limit: Option<Duration>, fut: F) -> BootstrapResult<T>
where
    F: Future<Output = WalletResult<T>>,
{
    let outcome = match limit {
        Some(limit) => timeout(limit, fut)
            .await
            .map_err(|_| BootstrapError::Timeout { step, after: limit })?,
        None => fut.await,
    };
    outcome.map_err(|e| BootstrapError::from_wallet(step, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ClientConfig;
    use crate::wallet::types::WalletError;

    #[test]
    fn test_from_config_defaults() {
        let bootstrapper =
            ContractClientBootstrapper::from_config(&ClientConfig::default()).unwrap();
        assert!(bootstrapper.authorization_timeout.is_none());
        assert!(bootstrapper.signer_timeout.is_none());
        assert!(bootstrapper.descriptor().has_function("createRace"));
    }

    #[test]
    fn test_from_config_timeouts() {
        let mut config = ClientConfig::default();
        config.wallet.authorization_timeout_secs = Some(90);
        config.wallet.signer_timeout_secs = Some(5);
        let bootstrapper = ContractClientBootstrapper::from_config(&config).unwrap();
        assert_eq!(bootstrapper.authorization_timeout, Some(Duration::from_secs(90)));
        assert_eq!(bootstrapper.signer_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_from_config_bad_address_is_binding_failure() {
        let mut config = ClientConfig::default();
        config.contract.address = "0xnope".to_string();
        let err = ContractClientBootstrapper::from_config(&config).unwrap_err();
        assert!(matches!(err, BootstrapError::Binding(_)));
    }

    #[tokio::test]
    async fn test_within_without_limit() {
        let value = within(Step::Authorization, None, async { Ok::<_, WalletError>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_within_times_out() {
        let err = within(
            Step::SignerDerivation,
            Some(Duration::from_millis(20)),
            std::future::pending::<WalletResult<()>>(),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::Timeout { step: Step::SignerDerivation, .. }
        ));
    }

    #[tokio::test]
    async fn test_within_maps_wallet_error() {
        let err = within(Step::Authorization, None, async {
            Err::<(), _>(WalletError::Denied("nope".to_string()))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, BootstrapError::AuthorizationDenied { .. }));
    }
}
