//! Metrics-based observability hooks for the capability runtime.
//!
//! ```rust
//! use mcapability::CapabilityRuntimeHooks;
//! use mobserve::MetricsInvocationHooks;
//!
//! fn accepts_hooks(_hooks: &dyn CapabilityRuntimeHooks) {}
//!
//! let hooks = MetricsInvocationHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use mcapability::{
    CapabilityCall, CapabilityError, CapabilityRuntimeHooks, InvocationContext, InvocationResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsInvocationHooks;

impl CapabilityRuntimeHooks for MetricsInvocationHooks {
    fn on_invocation_start(&self, call: &CapabilityCall, _context: &InvocationContext) {
        metrics::counter!(
            "magpie_capability_invocation_start_total",
            "capability" => call.name.clone()
        )
        .increment(1);
    }

    fn on_invocation_success(
        &self,
        call: &CapabilityCall,
        _context: &InvocationContext,
        _result: &InvocationResult,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "magpie_capability_invocation_success_total",
            "capability" => call.name.clone()
        )
        .increment(1);
        metrics::histogram!(
            "magpie_capability_invocation_duration_seconds",
            "capability" => call.name.clone(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_invocation_failure(
        &self,
        call: &CapabilityCall,
        _context: &InvocationContext,
        error: &CapabilityError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "magpie_capability_invocation_failure_total",
            "capability" => call.name.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "magpie_capability_invocation_duration_seconds",
            "capability" => call.name.clone(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
