//! Tracing-based observability hooks for the capability runtime.
//!
//! ```rust
//! use mcapability::CapabilityRuntimeHooks;
//! use mobserve::TracingInvocationHooks;
//!
//! fn accepts_hooks(_hooks: &dyn CapabilityRuntimeHooks) {}
//!
//! let hooks = TracingInvocationHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use mcapability::{
    CapabilityCall, CapabilityError, CapabilityRuntimeHooks, InvocationContext, InvocationResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInvocationHooks;

impl CapabilityRuntimeHooks for TracingInvocationHooks {
    fn on_invocation_start(&self, call: &CapabilityCall, context: &InvocationContext) {
        tracing::info!(
            phase = "capability",
            event = "invocation_start",
            capability = call.name,
            call_id = call.id,
            invocation_id = %context.invocation_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str())
        );
    }

    fn on_invocation_success(
        &self,
        call: &CapabilityCall,
        context: &InvocationContext,
        result: &InvocationResult,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "capability",
            event = "invocation_success",
            capability = call.name,
            call_id = call.id,
            invocation_id = %context.invocation_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str()),
            output_bytes = result.output.len(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_invocation_failure(
        &self,
        call: &CapabilityCall,
        context: &InvocationContext,
        error: &CapabilityError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "capability",
            event = "invocation_failure",
            capability = call.name,
            call_id = call.id,
            invocation_id = %context.invocation_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str()),
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            field = error.field.as_deref(),
            error = %error
        );
    }
}
