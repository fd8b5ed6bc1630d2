//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! bootstrap steps produce:
//!     → tracing events (step outcomes, addresses; never key material)
//!     → metrics.rs (bootstrap outcome counters)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout) in the binary
//!     → whatever `metrics` recorder the embedding application installs
//! ```

pub mod logging;
pub mod metrics;
