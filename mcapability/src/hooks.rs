//! Runtime hooks for capability invocation lifecycle events.
//!
//! ```rust
//! use mcapability::{CapabilityRuntimeHooks, NoopCapabilityRuntimeHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn CapabilityRuntimeHooks) {}
//!
//! let hooks = NoopCapabilityRuntimeHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use crate::{CapabilityCall, CapabilityError, InvocationContext, InvocationResult};

pub trait CapabilityRuntimeHooks: Send + Sync {
    fn on_invocation_start(&self, _call: &CapabilityCall, _context: &InvocationContext) {}

    fn on_invocation_success(
        &self,
        _call: &CapabilityCall,
        _context: &InvocationContext,
        _result: &InvocationResult,
        _elapsed: Duration,
    ) {
    }

    fn on_invocation_failure(
        &self,
        _call: &CapabilityCall,
        _context: &InvocationContext,
        _error: &CapabilityError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapabilityRuntimeHooks;

impl CapabilityRuntimeHooks for NoopCapabilityRuntimeHooks {}
