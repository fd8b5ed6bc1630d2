//! Shared wallet doubles for integration tests.

use alloy::primitives::{address, Address};
use alloy::rpc::json_rpc::{ErrorPayload, RequestPacket, ResponsePacket};
use alloy::transports::mock::{Asserter, MockTransport};
use alloy::transports::{BoxTransport, Transport, TransportError, TransportFut};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use catrace_client::wallet::{AuthorizedAccounts, WalletCapability, WalletError, WalletResult};

pub const ALICE: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const BOB: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

/// How the fake wallet answers `eth_requestAccounts`.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Authorization {
    Approve(Vec<Address>),
    Reject(String),
    Fail(String),
    Hang,
}

/// How the wallet's provider answers `eth_accounts`.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum SignerLookup {
    Accounts(Vec<Address>),
    /// JSON-RPC error with the given code.
    Error(i64, String),
    Hang,
}

/// Transport that accepts every request and never answers.
#[derive(Debug, Clone)]
pub struct SilentTransport;

impl tower::Service<RequestPacket> for SilentTransport {
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = TransportFut<'static>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: RequestPacket) -> Self::Future {
        Box::pin(std::future::pending())
    }
}

/// Wallet double that records which capability methods were used, in order.
pub struct FakeWallet {
    present: bool,
    authorization: Mutex<Authorization>,
    signer_lookup: Mutex<SignerLookup>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

#[allow(dead_code)]
impl FakeWallet {
    /// A wallet that approves `account` and signs as `account`.
    pub fn approving(account: Address) -> Self {
        Self {
            present: true,
            authorization: Mutex::new(Authorization::Approve(vec![account])),
            signer_lookup: Mutex::new(SignerLookup::Accounts(vec![account])),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A wallet object that reports itself unavailable.
    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::approving(ALICE)
        }
    }

    pub fn with_authorization(self, authorization: Authorization) -> Self {
        self.set_authorization(authorization);
        self
    }

    pub fn with_signer_lookup(self, lookup: SignerLookup) -> Self {
        *self.signer_lookup.lock().unwrap() = lookup;
        self
    }

    pub fn set_authorization(&self, authorization: Authorization) {
        *self.authorization.lock().unwrap() = authorization;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl WalletCapability for FakeWallet {
    fn exists(&self) -> bool {
        self.record("exists");
        self.present
    }

    async fn request_accounts(&self) -> WalletResult<AuthorizedAccounts> {
        self.record("request_accounts");
        let authorization = self.authorization.lock().unwrap().clone();
        match authorization {
            Authorization::Approve(accounts) => AuthorizedAccounts::new(accounts),
            Authorization::Reject(message) => Err(WalletError::Denied(message)),
            Authorization::Fail(message) => Err(WalletError::Transport(message)),
            Authorization::Hang => std::future::pending().await,
        }
    }

    fn transport(&self) -> BoxTransport {
        self.record("transport");
        let lookup = self.signer_lookup.lock().unwrap().clone();
        let asserter = Asserter::new();
        match lookup {
            SignerLookup::Accounts(accounts) => asserter.push_success(&accounts),
            SignerLookup::Error(code, message) => asserter.push_failure(ErrorPayload {
                code,
                message: message.into(),
                data: None,
            }),
            SignerLookup::Hang => return SilentTransport.boxed(),
        }
        MockTransport::new(asserter).boxed()
    }
}
