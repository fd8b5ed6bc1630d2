//! Contract client bound to a wallet signer.

use alloy::contract::{ContractInstance, Interface};
use alloy::dyn_abi::DynSolValue;
use alloy::json_abi::JsonAbi;
use alloy::network::Ethereum;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::DynProvider;

use crate::contract::descriptor::ContractDescriptor;
use crate::contract::types::{ContractError, ContractResult};
use crate::wallet::signer::WalletSigner;

/// The contract's operations, sent from the authorized account.
///
/// Owns its signer; nothing else keeps a reference to it.
pub struct ContractClient {
    descriptor: ContractDescriptor,
    signer: WalletSigner,
    instance: ContractInstance<DynProvider<Ethereum>, Ethereum>,
}

impl ContractClient {
    /// Bind `descriptor` to `signer`.
    pub fn bind(descriptor: ContractDescriptor, signer: WalletSigner) -> Self {
        let instance = ContractInstance::new(
            descriptor.address(),
            signer.provider().clone(),
            Interface::new(descriptor.abi().clone()),
        );

        Self {
            descriptor,
            signer,
            instance,
        }
    }

    pub fn address(&self) -> Address {
        self.descriptor.address()
    }

    pub fn abi(&self) -> &JsonAbi {
        self.descriptor.abi()
    }

    pub fn descriptor(&self) -> &ContractDescriptor {
        &self.descriptor
    }

    pub fn signer(&self) -> &WalletSigner {
        &self.signer
    }

    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.descriptor.has_function(name)
    }

    /// Read-only call (`eth_call`) of `function`.
    pub async fn call(
        &self,
        function: &str,
        args: &[DynSolValue],
    ) -> ContractResult<Vec<DynSolValue>> {
        let outputs = self
            .instance
            .function(function, args)?
            .from(self.signer.address())
            .call()
            .await?;

        tracing::debug!(function, outputs = outputs.len(), "Contract call returned");
        Ok(outputs)
    }

    /// Submit a transaction invoking `function` and return its hash.
    ///
    /// The wallet signs and broadcasts; confirmation is left to the caller.
    pub async fn send(&self, function: &str, args: &[DynSolValue]) -> ContractResult<TxHash> {
        self.send_with_value(function, args, U256::ZERO).await
    }

    /// [`ContractClient::send`] attaching `value` wei, for payable functions.
    pub async fn send_with_value(
        &self,
        function: &str,
        args: &[DynSolValue],
        value: U256,
    ) -> ContractResult<TxHash> {
        if !self.has_function(function) {
            return Err(ContractError::Abi(format!("unknown function: {}", function)));
        }

        let pending = self
            .instance
            .function(function, args)?
            .from(self.signer.address())
            .value(value)
            .send()
            .await?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(
            function,
            tx_hash = %tx_hash,
            from = %self.signer.address(),
            "Transaction submitted through wallet"
        );
        Ok(tx_hash)
    }
}

impl std::fmt::Debug for ContractClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractClient")
            .field("address", &self.descriptor.address())
            .field("signer", &self.signer.address())
            .field("functions", &self.descriptor.abi().functions.len())
            .finish()
    }
}
