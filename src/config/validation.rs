//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the contract address and wallet endpoint are well formed
//! - Validate value ranges (timeouts > 0, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use alloy::primitives::Address;
use std::fmt;

use crate::config::schema::ClientConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.contract.address.parse::<Address>() {
        errors.push(ValidationError {
            field: "contract.address",
            message: format!("invalid address '{}': {}", config.contract.address, e),
        });
    }

    if let Some(path) = &config.contract.abi_path {
        if path.trim().is_empty() {
            errors.push(ValidationError {
                field: "contract.abi_path",
                message: "must not be empty when set".to_string(),
            });
        }
    }

    if let Some(endpoint) = &config.wallet.endpoint {
        if let Err(e) = endpoint.parse::<url::Url>() {
            errors.push(ValidationError {
                field: "wallet.endpoint",
                message: format!("invalid URL '{}': {}", endpoint, e),
            });
        }
    }

    if config.wallet.authorization_timeout_secs == Some(0) {
        errors.push(ValidationError {
            field: "wallet.authorization_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.wallet.signer_timeout_secs == Some(0) {
        errors.push(ValidationError {
            field: "wallet.signer_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError {
            field: "observability.log_level",
            message: format!("unknown level '{}'", config.observability.log_level),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
