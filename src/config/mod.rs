//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → consumed once by the bootstrapper
//! ```
//!
//! # Design Decisions
//! - Config is static for the lifetime of the process; there is no reload
//! - All fields have defaults so an empty file yields the built-in contract
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ClientConfig;
pub use schema::ContractConfig;
pub use schema::ObservabilityConfig;
pub use schema::WalletConfig;
