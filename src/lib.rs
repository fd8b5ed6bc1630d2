//! CatRace contract client.
//!
//! Connects a user's wallet to the `CatRace` contract: detect the wallet,
//! request account authorization, derive the signer, and bind it to the
//! contract's fixed address and interface.
//!
//! ```no_run
//! use catrace_client::config::ClientConfig;
//! use catrace_client::{ContractClientBootstrapper, HostEnvironment};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let bootstrapper = ContractClientBootstrapper::from_config(&config)?;
//! let wallet = HostEnvironment::from_env(&config.wallet).detect();
//! let client = bootstrapper.bootstrap(wallet.as_ref()).await?;
//! let count = client.call("raceCount", &[]).await?;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod contract;
pub mod observability;
pub mod wallet;

pub use bootstrap::{BootstrapError, ContractClientBootstrapper, Step};
pub use config::ClientConfig;
pub use contract::{ContractClient, ContractDescriptor};
pub use wallet::{HostEnvironment, RpcWallet, WalletCapability};
