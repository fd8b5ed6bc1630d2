//! Contract descriptor and bound client.
//!
//! # Data Flow
//! ```text
//! [contract] config + abi/CatRace.json (embedded)
//!     → descriptor.rs (validated address + JSON ABI, immutable)
//!     → client.rs (descriptor bound to a wallet signer)
//! ```

pub mod client;
pub mod descriptor;
pub mod types;

pub use client::ContractClient;
pub use descriptor::ContractDescriptor;
pub use types::{ContractError, ContractResult};
