//! Wallet detection in the host environment.

use url::Url;

use crate::config::WalletConfig;
use crate::wallet::rpc::RpcWallet;

/// Environment variable naming the wallet's JSON-RPC endpoint.
pub const WALLET_URL_ENV_VAR: &str = "CATRACE_WALLET_URL";

/// Where the host tells us a wallet lives.
#[derive(Debug, Clone, Default)]
pub struct HostEnvironment {
    endpoint: Option<String>,
}

impl HostEnvironment {
    /// Read `CATRACE_WALLET_URL`, falling back to `[wallet].endpoint`.
    pub fn from_env(config: &WalletConfig) -> Self {
        Self {
            endpoint: resolve_endpoint(std::env::var(WALLET_URL_ENV_VAR).ok(), config),
        }
    }

    /// Host with a known (or known-absent) wallet endpoint.
    pub fn with_endpoint(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }

    /// The wallet, if the host advertises a usable one.
    pub fn detect(&self) -> Option<RpcWallet> {
        let raw = self.endpoint.as_deref()?;
        match raw.parse::<Url>() {
            Ok(url) => {
                tracing::debug!(endpoint = %url, "Wallet endpoint detected");
                Some(RpcWallet::connect_http(url))
            }
            Err(e) => {
                tracing::warn!(endpoint = %raw, error = %e, "Ignoring invalid wallet endpoint");
                None
            }
        }
    }
}

fn resolve_endpoint(from_env: Option<String>, config: &WalletConfig) -> Option<String> {
    from_env
        .filter(|value| !value.trim().is_empty())
        .or_else(|| config.endpoint.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_config() {
        let config = WalletConfig {
            endpoint: Some("http://127.0.0.1:1248".to_string()),
            ..Default::default()
        };
        let resolved = resolve_endpoint(Some("http://localhost:9000".to_string()), &config);
        assert_eq!(resolved.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_blank_env_falls_back_to_config() {
        let config = WalletConfig {
            endpoint: Some("http://127.0.0.1:1248".to_string()),
            ..Default::default()
        };
        let resolved = resolve_endpoint(Some("  ".to_string()), &config);
        assert_eq!(resolved.as_deref(), Some("http://127.0.0.1:1248"));
    }

    #[test]
    fn test_no_endpoint_detects_nothing() {
        assert!(HostEnvironment::with_endpoint(None).detect().is_none());
    }

    #[test]
    fn test_invalid_endpoint_detects_nothing() {
        let host = HostEnvironment::with_endpoint(Some("not a url".to_string()));
        assert!(host.detect().is_none());
    }

    #[test]
    fn test_valid_endpoint_detects_wallet() {
        let host = HostEnvironment::with_endpoint(Some("http://127.0.0.1:1248".to_string()));
        let wallet = host.detect().unwrap();
        assert_eq!(wallet.endpoint().map(Url::as_str), Some("http://127.0.0.1:1248/"));
    }
}
