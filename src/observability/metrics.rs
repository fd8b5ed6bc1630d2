//! Bootstrap metrics.
//!
//! # Metrics
//! - `catrace_bootstrap_total` (counter): bootstraps by `outcome` (success, failure)
//! - `catrace_bootstrap_step_failures_total` (counter): failures by `step`
//!
//! Recorded through the `metrics` facade; with no recorder installed these
//! are no-ops.

use crate::bootstrap::types::Step;

pub fn record_bootstrap_success() {
    ::metrics::counter!("catrace_bootstrap_total", "outcome" => "success").increment(1);
}

pub fn record_bootstrap_failure(step: Step) {
    ::metrics::counter!("catrace_bootstrap_total", "outcome" => "failure").increment(1);
    ::metrics::counter!("catrace_bootstrap_step_failures_total", "step" => step.as_str())
        .increment(1);
}
