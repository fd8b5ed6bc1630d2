//! `catrace-connect`: run the wallet handshake once and report the bound client.

use clap::Parser;
use std::path::PathBuf;

use catrace_client::config::{load_config, ClientConfig};
use catrace_client::observability::logging::init_logging;
use catrace_client::{ContractClientBootstrapper, HostEnvironment};

#[derive(Parser)]
#[command(name = "catrace-connect")]
#[command(about = "Connect a wallet to the CatRace contract", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wallet JSON-RPC endpoint (overrides CATRACE_WALLET_URL and the config file).
    #[arg(short, long)]
    wallet_url: Option<String>,

    /// Argument-free view function to call once connected (e.g. raceCount).
    #[arg(long)]
    call: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };

    init_logging(&config.observability);

    tracing::info!(
        contract = %config.contract.address,
        abi = config.contract.abi_path.as_deref().unwrap_or("embedded"),
        "Configuration loaded"
    );

    let bootstrapper = ContractClientBootstrapper::from_config(&config)?;

    let host = match cli.wallet_url {
        Some(url) => HostEnvironment::with_endpoint(Some(url)),
        None => HostEnvironment::from_env(&config.wallet),
    };
    let wallet = host.detect();

    let client = bootstrapper.bootstrap(wallet.as_ref()).await?;

    println!("contract: {}", client.address());
    println!("signer:   {}", client.signer_address());

    if let Some(function) = cli.call {
        let outputs = client.call(&function, &[]).await?;
        println!("{}: {:?}", function, outputs);
    }

    Ok(())
}
